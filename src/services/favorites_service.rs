// src/services/favorites_service.rs

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::domain::{Favorites, Recipe, Session};
use crate::error::{AppError, AppResult};
use crate::repositories::FavoritesRepository;

pub struct FavoritesService {
    favorites_repo: Arc<dyn FavoritesRepository>,
    favorites: RwLock<Favorites>,
}

impl FavoritesService {
    pub fn new(favorites_repo: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repo,
            favorites: RwLock::new(Favorites::default()),
        }
    }

    pub fn load(&self) -> Favorites {
        let favorites = match self.favorites_repo.load() {
            Ok(favorites) => favorites.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Favorites unreadable, starting empty");
                Favorites::default()
            }
        };

        *self.favorites.write().unwrap_or_else(PoisonError::into_inner) = favorites.clone();
        favorites
    }

    pub fn list(&self) -> Vec<Recipe> {
        self.favorites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .recipes()
            .to_vec()
    }

    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorites
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_favorite(recipe_id)
    }

    /// Add or remove `recipe`. Returns whether it is a favorite afterwards.
    ///
    /// Requires a signed-in session; otherwise nothing changes.
    pub fn toggle(&self, session: &Session, recipe: &Recipe) -> AppResult<bool> {
        if !session.is_authenticated {
            return Err(AppError::AuthenticationRequired);
        }

        let mut current = self.favorites.write().unwrap_or_else(PoisonError::into_inner);
        let next = current.toggled(recipe);
        self.favorites_repo.save(&next)?;

        let is_favorite = next.is_favorite(&recipe.id);
        info!(recipe_id = %recipe.id, is_favorite, "Favorite toggled");
        *current = next;
        Ok(is_favorite)
    }
}
