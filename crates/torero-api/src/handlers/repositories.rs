//! Repository API handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::{filter_resources, unique_sorted, ListParams};
use crate::error::{ApiError, ApiResult};
use crate::models::Resource;
use crate::state::AppState;

/// List registered repositories.
///
/// `GET /v1/repositories/?type=<type>&skip=<n>&limit=<n>`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Resource>>> {
    let repositories = state.catalog.repositories().await?;
    Ok(Json(filter_resources(repositories, &params)))
}

/// List the repository types currently in use.
///
/// `GET /v1/repositories/types`
pub async fn types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let repositories = state.catalog.repositories().await?;
    Ok(Json(unique_sorted(
        repositories.into_iter().map(|r| r.resource_type),
    )))
}

/// Get a single repository by name.
///
/// `GET /v1/repositories/{name}`
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Resource>> {
    state
        .catalog
        .repository(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Repository '{}' not found", name)))
}
