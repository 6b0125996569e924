//! Secret API handlers.
//!
//! Metadata only. Secret values never leave the catalog layer; see
//! [`crate::models::Secret::redacted`].

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::{filter_secrets, unique_sorted, ListParams};
use crate::error::{ApiError, ApiResult};
use crate::models::Secret;
use crate::state::AppState;

/// List registered secrets, metadata only.
///
/// `GET /v1/secrets/?type=<type>&skip=<n>&limit=<n>`
///
/// # Response
///
/// ```json
/// [
///   {"name": "lab-ssh", "type": "ssh-key"}
/// ]
/// ```
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Secret>>> {
    let secrets = state.catalog.secrets().await?;
    Ok(Json(filter_secrets(secrets, &params)))
}

/// List the secret types currently in use.
///
/// `GET /v1/secrets/types`
pub async fn types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let secrets = state.catalog.secrets().await?;
    Ok(Json(unique_sorted(
        secrets.into_iter().map(|s| s.secret_type),
    )))
}

/// Get a single secret by name, metadata only.
///
/// `GET /v1/secrets/{name}`
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Secret>> {
    state
        .catalog
        .secret(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Secret '{}' not found", name)))
}
