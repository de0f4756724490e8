// src/repositories/favorites_repository.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Favorites;
use crate::error::AppResult;
use crate::repositories::kv::{read_json, write_json, StorageKey};

pub trait FavoritesRepository: Send + Sync {
    fn load(&self) -> AppResult<Option<Favorites>>;
    fn save(&self, favorites: &Favorites) -> AppResult<()>;
}

pub struct SqliteFavoritesRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoritesRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl FavoritesRepository for SqliteFavoritesRepository {
    fn load(&self) -> AppResult<Option<Favorites>> {
        let conn = self.pool.get()?;
        read_json(&conn, StorageKey::Favorites)
    }

    fn save(&self, favorites: &Favorites) -> AppResult<()> {
        let conn = self.pool.get()?;
        write_json(&conn, StorageKey::Favorites, favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, initialize_database};
    use crate::domain::locale::english;
    use crate::domain::Recipe;

    fn repo() -> SqliteFavoritesRepository {
        let pool = Arc::new(create_in_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteFavoritesRepository::new(pool)
    }

    #[test]
    fn test_saved_favorites_are_stored_as_full_recipes() {
        let repo = repo();
        let favorites = Favorites::new(vec![Recipe::new("r1", english("Moussaka"))]);

        repo.save(&favorites).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.recipes()[0].display_name("en"), "Moussaka");
    }

    #[test]
    fn test_missing_favorites() {
        assert!(repo().load().unwrap().is_none());
    }
}
