// src/repositories/selection_repository.rs
//
// Only the selected ingredient ids survive restarts; filter selections are
// per-session.

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::AppResult;
use crate::repositories::kv::{read_json, write_json, StorageKey};

pub trait SelectionRepository: Send + Sync {
    fn load_ingredient_ids(&self) -> AppResult<Option<Vec<String>>>;
    fn save_ingredient_ids(&self, ids: &[String]) -> AppResult<()>;
}

pub struct SqliteSelectionRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSelectionRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl SelectionRepository for SqliteSelectionRepository {
    fn load_ingredient_ids(&self) -> AppResult<Option<Vec<String>>> {
        let conn = self.pool.get()?;
        read_json(&conn, StorageKey::SelectedIngredients)
    }

    fn save_ingredient_ids(&self, ids: &[String]) -> AppResult<()> {
        let conn = self.pool.get()?;
        write_json(&conn, StorageKey::SelectedIngredients, ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, initialize_database};

    #[test]
    fn test_selected_ids_round_trip() {
        let pool = Arc::new(create_in_memory_pool().unwrap());
        initialize_database(&pool.get().unwrap()).unwrap();
        let repo = SqliteSelectionRepository::new(pool);

        assert!(repo.load_ingredient_ids().unwrap().is_none());

        repo.save_ingredient_ids(&["egg".to_string(), "flour".to_string()])
            .unwrap();
        assert_eq!(
            repo.load_ingredient_ids().unwrap(),
            Some(vec!["egg".to_string(), "flour".to_string()])
        );

        repo.save_ingredient_ids(&[]).unwrap();
        assert_eq!(repo.load_ingredient_ids().unwrap(), Some(vec![]));
    }
}
