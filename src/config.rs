// src/config.rs
//
// Runtime configuration
//
// Sources, lowest to highest precedence:
// - built-in defaults
// - TOML file (`--config`, `RECIPEHUB_CONFIG`, or ./recipehub.toml when present)
// - environment variables, e.g. RECIPEHUB__REMOTE__TIMEOUT_SECS=10

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::db::get_database_path;
use crate::error::AppResult;
use crate::integrations::CatalogSources;

const DEFAULT_CONFIG_FILE: &str = "recipehub.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Defaults to the platform data directory when unset
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    pub ingredients_url: String,
    pub recipes_url: String,
    pub countries_url: String,
    pub auth_base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default(
                "remote.ingredients_url",
                "https://automation.ebit.gr/wp-content/uploads/2025/01/ingredients.json",
            )?
            .set_default(
                "remote.recipes_url",
                "https://automation.ebit.gr/wp-content/uploads/2025/01/recipes.json",
            )?
            .set_default(
                "remote.countries_url",
                "https://automation.ebit.gr/wp-content/uploads/2025/01/countries.json",
            )?
            .set_default(
                "remote.auth_base_url",
                "https://automation.ebit.gr/wp-json/react-native-auth/v1",
            )?
            .set_default("remote.timeout_secs", 30)?
            .set_default("observability.log_level", "info")?;

        // An explicitly named file must exist; the implicit one is optional
        match config_path.or_else(|| env::var("RECIPEHUB_CONFIG").ok()) {
            Some(path) => {
                builder = builder.add_source(File::with_name(&path).required(true));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix("RECIPEHUB")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.remote.timeout_secs == 0 {
            return Err("remote.timeout_secs must be greater than zero".to_string());
        }

        let urls = [
            ("remote.ingredients_url", &self.remote.ingredients_url),
            ("remote.recipes_url", &self.remote.recipes_url),
            ("remote.countries_url", &self.remote.countries_url),
            ("remote.auth_base_url", &self.remote.auth_base_url),
        ];
        for (key, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("{} must be an http(s) URL, got '{}'", key, url));
            }
        }

        Ok(())
    }

    pub fn database_path(&self) -> AppResult<PathBuf> {
        match &self.storage.database_path {
            Some(path) => Ok(path.clone()),
            None => get_database_path(),
        }
    }

    pub fn catalog_sources(&self) -> CatalogSources {
        CatalogSources {
            ingredients_url: self.remote.ingredients_url.clone(),
            recipes_url: self.remote.recipes_url.clone(),
            countries_url: self.remote.countries_url.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.remote.timeout_secs)
    }
}
