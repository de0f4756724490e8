// src/services/catalog_service.rs
//
// Owns the in-memory catalog for the session.
//
// Load order: persisted documents, then the bundled dataset (persisted as a
// seed), then an empty `Unavailable` catalog. Refresh replaces everything or
// nothing.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{error, info, warn};

use crate::domain::{Catalog, CatalogOrigin, FilterCatalog};
use crate::error::{AppError, AppResult};
use crate::integrations::RemoteCatalog;
use crate::repositories::{CatalogDocuments, CatalogRepository};
use crate::services::bundled_catalog::bundled_documents;

pub struct CatalogService {
    catalog_repo: Arc<dyn CatalogRepository>,
    remote: Arc<dyn RemoteCatalog>,
    catalog: RwLock<Catalog>,
}

impl CatalogService {
    pub fn new(catalog_repo: Arc<dyn CatalogRepository>, remote: Arc<dyn RemoteCatalog>) -> Self {
        Self {
            catalog_repo,
            remote,
            catalog: RwLock::new(Catalog::unavailable()),
        }
    }

    /// Load the catalog into memory. Never fails; see the module docs for the
    /// fallback order.
    pub fn load(&self) -> Catalog {
        let catalog = match self.read_persisted() {
            Ok(Some(catalog)) => catalog,
            Ok(None) => {
                info!("No persisted catalog, seeding from bundled data");
                self.seed_from_bundle()
            }
            Err(e) => {
                warn!(error = %e, "Persisted catalog unreadable, seeding from bundled data");
                self.seed_from_bundle()
            }
        };

        info!(
            origin = ?catalog.origin,
            ingredients = catalog.ingredients.len(),
            recipes = catalog.recipes.len(),
            "Catalog loaded"
        );

        self.replace(catalog.clone());
        catalog
    }

    /// Download all three documents and replace the catalog.
    ///
    /// Any failed download or invalid document aborts before anything is
    /// written, leaving both the store and the in-memory catalog untouched.
    pub async fn refresh(&self) -> AppResult<Catalog> {
        info!("Refreshing catalog from remote sources");

        let (ingredients, recipes, countries) = tokio::try_join!(
            self.remote.fetch_ingredients(),
            self.remote.fetch_recipes(),
            self.remote.fetch_countries()
        )
        .inspect_err(|e| warn!(error = %e, "Catalog refresh failed"))?;

        ingredients
            .validate()
            .map_err(|e| AppError::malformed("ingredients", e))?;
        recipes
            .validate()
            .map_err(|e| AppError::malformed("recipes", e))?;

        let documents = CatalogDocuments {
            ingredients,
            recipes,
            countries,
        };
        self.catalog_repo.save_all(&documents)?;

        let catalog = Self::catalog_from(documents, CatalogOrigin::Persisted);
        info!(
            ingredients = catalog.ingredients.len(),
            recipes = catalog.recipes.len(),
            countries = catalog.countries.len(),
            "Catalog refreshed"
        );

        self.replace(catalog.clone());
        Ok(catalog)
    }

    pub fn snapshot(&self) -> Catalog {
        self.catalog
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fails with `CatalogUnavailable` when no source produced a catalog
    pub fn require_available(&self) -> AppResult<Catalog> {
        let catalog = self.snapshot();
        if !catalog.is_available() {
            return Err(AppError::CatalogUnavailable(
                "no stored or bundled catalog could be read".to_string(),
            ));
        }
        Ok(catalog)
    }

    pub fn filter_catalog(&self) -> FilterCatalog {
        let catalog = self.catalog.read().unwrap_or_else(PoisonError::into_inner);
        FilterCatalog::from_recipes(&catalog.recipes)
    }

    fn read_persisted(&self) -> AppResult<Option<Catalog>> {
        let (Some(ingredients), Some(recipes)) = (
            self.catalog_repo.load_ingredients()?,
            self.catalog_repo.load_recipes()?,
        ) else {
            return Ok(None);
        };

        ingredients
            .validate()
            .map_err(|e| AppError::malformed("ingredients", e))?;
        recipes
            .validate()
            .map_err(|e| AppError::malformed("recipes", e))?;

        // Countries are optional; a broken document just means no country list
        let countries = match self.catalog_repo.load_countries() {
            Ok(countries) => countries.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable countries document");
                Default::default()
            }
        };

        Ok(Some(Self::catalog_from(
            CatalogDocuments {
                ingredients,
                recipes,
                countries,
            },
            CatalogOrigin::Persisted,
        )))
    }

    fn seed_from_bundle(&self) -> Catalog {
        let documents = match bundled_documents() {
            Ok(documents) => documents,
            Err(e) => {
                error!(error = %e, "Bundled catalog unusable, catalog unavailable");
                return Catalog::unavailable();
            }
        };

        if let Err(e) = self.catalog_repo.save_all(&documents) {
            warn!(error = %e, "Could not persist bundled catalog seed");
        }

        Self::catalog_from(documents, CatalogOrigin::Bundled)
    }

    fn catalog_from(documents: CatalogDocuments, origin: CatalogOrigin) -> Catalog {
        Catalog {
            ingredients: documents.ingredients.ingredients,
            recipes: documents.recipes.recipes,
            countries: documents.countries.countries,
            origin,
        }
    }

    fn replace(&self, catalog: Catalog) {
        *self.catalog.write().unwrap_or_else(PoisonError::into_inner) = catalog;
    }
}
