// src/application/commands/catalog_commands.rs
//
// Catalog Command Handlers

use crate::application::dto::{CatalogStatusDto, FilterCatalogDto};
use crate::application::error_handling::ToErrorResponse;
use crate::application::state::AppState;

/// Download the remote catalog and replace the local one
pub async fn refresh_catalog(state: &AppState) -> Result<CatalogStatusDto, String> {
    let session = state.settings_service.current_session();

    let catalog = state
        .catalog_service
        .refresh()
        .await
        .to_error_response()?;

    Ok(CatalogStatusDto::localized(&catalog, &session.language))
}

pub async fn catalog_status(state: &AppState) -> Result<CatalogStatusDto, String> {
    let session = state.settings_service.current_session();
    let catalog = state.catalog_service.snapshot();
    Ok(CatalogStatusDto::localized(&catalog, &session.language))
}

/// Selectable tag, difficulty and country values
pub async fn list_filters(state: &AppState) -> Result<FilterCatalogDto, String> {
    Ok(state.catalog_service.filter_catalog().into())
}
