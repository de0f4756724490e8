// src/integrations/mod.rs
//
// External Integrations Module

pub mod auth_client;
pub mod catalog_client;

pub use auth_client::{AuthGateway, AuthResponse, HttpAuthClient};
pub use catalog_client::{CatalogSources, HttpCatalogClient, RemoteCatalog};

#[cfg(test)]
pub use auth_client::MockAuthGateway;
#[cfg(test)]
pub use catalog_client::MockRemoteCatalog;
