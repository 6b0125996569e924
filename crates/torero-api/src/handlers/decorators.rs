//! Decorator API handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::{filter_resources, unique_sorted, ListParams};
use crate::error::{ApiError, ApiResult};
use crate::models::Resource;
use crate::state::AppState;

/// List registered decorators.
///
/// `GET /v1/decorators/?type=<type>&skip=<n>&limit=<n>`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Resource>>> {
    let decorators = state.catalog.decorators().await?;
    Ok(Json(filter_resources(decorators, &params)))
}

/// List the decorator types currently in use.
///
/// `GET /v1/decorators/types`
pub async fn types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let decorators = state.catalog.decorators().await?;
    Ok(Json(unique_sorted(
        decorators.into_iter().map(|d| d.resource_type),
    )))
}

/// Get a single decorator by name.
///
/// `GET /v1/decorators/{name}`
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Resource>> {
    state
        .catalog
        .decorator(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Decorator '{}' not found", name)))
}
