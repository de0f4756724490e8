// src/integrations/catalog_client.rs
//
// Remote catalog source
//
// ARCHITECTURE:
// - Plain HTTPS GET of three JSON documents
// - Parses into the wrapped document types; validation is the caller's job
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Never touches the local store
// - Any non-2xx status or undecodable body is an error

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::domain::{CountriesDocument, IngredientsDocument, RecipesDocument};
use crate::error::{AppError, AppResult};

/// Where the three catalog documents are downloaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSources {
    pub ingredients_url: String,
    pub recipes_url: String,
    pub countries_url: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteCatalog: Send + Sync {
    async fn fetch_ingredients(&self) -> AppResult<IngredientsDocument>;
    async fn fetch_recipes(&self) -> AppResult<RecipesDocument>;
    async fn fetch_countries(&self) -> AppResult<CountriesDocument>;
}

pub struct HttpCatalogClient {
    http_client: Client,
    sources: CatalogSources,
}

impl HttpCatalogClient {
    pub fn new(sources: CatalogSources, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            sources,
        })
    }

    async fn fetch_document<T: DeserializeOwned>(&self, key: &str, url: &str) -> AppResult<T> {
        debug!(url, "Downloading {} document", key);

        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "GET {} returned HTTP {}",
                url, status
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| AppError::malformed(key, e))
    }
}

#[async_trait]
impl RemoteCatalog for HttpCatalogClient {
    async fn fetch_ingredients(&self) -> AppResult<IngredientsDocument> {
        self.fetch_document("ingredients", &self.sources.ingredients_url)
            .await
    }

    async fn fetch_recipes(&self) -> AppResult<RecipesDocument> {
        self.fetch_document("recipes", &self.sources.recipes_url).await
    }

    async fn fetch_countries(&self) -> AppResult<CountriesDocument> {
        self.fetch_document("countries", &self.sources.countries_url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(base: &str) -> CatalogSources {
        CatalogSources {
            ingredients_url: format!("{}/ingredients.json", base),
            recipes_url: format!("{}/recipes.json", base),
            countries_url: format!("{}/countries.json", base),
        }
    }

    #[test]
    fn test_client_creation() {
        let client = HttpCatalogClient::new(sources("https://example.invalid"), Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_network_error() {
        // Port 9 on localhost refuses connections
        let client =
            HttpCatalogClient::new(sources("http://127.0.0.1:9"), Duration::from_secs(2)).unwrap();
        let result = client.fetch_recipes().await;
        assert!(matches!(result, Err(AppError::Network(_))));
    }
}
