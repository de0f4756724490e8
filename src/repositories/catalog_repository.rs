// src/repositories/catalog_repository.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{CountriesDocument, IngredientsDocument, RecipesDocument};
use crate::error::AppResult;
use crate::repositories::kv::{read_json, write_json, StorageKey};

/// The three catalog documents written together by a refresh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogDocuments {
    pub ingredients: IngredientsDocument,
    pub recipes: RecipesDocument,
    pub countries: CountriesDocument,
}

pub trait CatalogRepository: Send + Sync {
    fn load_ingredients(&self) -> AppResult<Option<IngredientsDocument>>;
    fn load_recipes(&self) -> AppResult<Option<RecipesDocument>>;
    fn load_countries(&self) -> AppResult<Option<CountriesDocument>>;
    /// Replaces all three documents in a single transaction.
    fn save_all(&self, documents: &CatalogDocuments) -> AppResult<()>;
}

pub struct SqliteCatalogRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCatalogRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl CatalogRepository for SqliteCatalogRepository {
    fn load_ingredients(&self) -> AppResult<Option<IngredientsDocument>> {
        let conn = self.pool.get()?;
        read_json(&conn, StorageKey::Ingredients)
    }

    fn load_recipes(&self) -> AppResult<Option<RecipesDocument>> {
        let conn = self.pool.get()?;
        read_json(&conn, StorageKey::Recipes)
    }

    fn load_countries(&self) -> AppResult<Option<CountriesDocument>> {
        let conn = self.pool.get()?;
        read_json(&conn, StorageKey::Countries)
    }

    fn save_all(&self, documents: &CatalogDocuments) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        write_json(&tx, StorageKey::Ingredients, &documents.ingredients)?;
        write_json(&tx, StorageKey::Recipes, &documents.recipes)?;
        write_json(&tx, StorageKey::Countries, &documents.countries)?;

        tx.commit()?;
        Ok(())
    }
}
