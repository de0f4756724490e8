// src/repositories/kv.rs
//
// Key-value primitives over the `kv_store` table.
//
// Every persisted entity lives under one well-known key as a JSON string
// (flags, language and theme are plain strings). Writes replace the whole value.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// The well-known keys of the local store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Ingredients,
    Recipes,
    Countries,
    Favorites,
    SelectedIngredients,
    UserRecipes,
    DailyPlan,
    WeeklyPlan,
    AppLanguage,
    AppTheme,
    IsAuthenticated,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Ingredients => "ingredients",
            StorageKey::Recipes => "recipes",
            StorageKey::Countries => "countries",
            StorageKey::Favorites => "favorites",
            StorageKey::SelectedIngredients => "selectedIngredients",
            StorageKey::UserRecipes => "userRecipes",
            StorageKey::DailyPlan => "dailyPlan",
            StorageKey::WeeklyPlan => "weeklyPlan",
            StorageKey::AppLanguage => "appLanguage",
            StorageKey::AppTheme => "appTheme",
            StorageKey::IsAuthenticated => "isAuthenticated",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn get_value(conn: &Connection, key: StorageKey) -> AppResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = ?1",
            params![key.as_str()],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

pub fn put_value(conn: &Connection, key: StorageKey, value: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key.as_str(), value, Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

pub fn delete_value(conn: &Connection, key: StorageKey) -> AppResult<()> {
    conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key.as_str()])?;
    Ok(())
}

/// Read and decode a JSON value.
///
/// A value that does not parse is reported as `MalformedData`; callers treat it
/// like an absent key.
pub fn read_json<T: DeserializeOwned>(conn: &Connection, key: StorageKey) -> AppResult<Option<T>> {
    match get_value(conn, key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AppError::malformed(key.as_str(), e)),
    }
}

pub fn write_json<T: Serialize + ?Sized>(conn: &Connection, key: StorageKey, value: &T) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    put_value(conn, key, &raw)
}
