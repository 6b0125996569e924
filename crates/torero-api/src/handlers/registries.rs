//! Registry API handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::{filter_resources, unique_sorted, ListParams};
use crate::error::{ApiError, ApiResult};
use crate::models::Resource;
use crate::state::AppState;

/// List registered registries (package sources such as Ansible Galaxy or PyPI).
///
/// `GET /v1/registries/?type=<type>&skip=<n>&limit=<n>`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Resource>>> {
    let registries = state.catalog.registries().await?;
    Ok(Json(filter_resources(registries, &params)))
}

/// List the registry types currently in use.
///
/// `GET /v1/registries/types`
pub async fn types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let registries = state.catalog.registries().await?;
    Ok(Json(unique_sorted(
        registries.into_iter().map(|r| r.resource_type),
    )))
}

/// Get a single registry by name.
///
/// `GET /v1/registries/{name}`
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Resource>> {
    state
        .catalog
        .registry(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Registry '{}' not found", name)))
}
