//! Service API handlers.
//!
//! Read-only endpoints over torero's registered services.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::catalog::{filter_services, unique_sorted, ListParams};
use crate::error::{ApiError, ApiResult};
use crate::models::{Service, SERVICE_TYPES};
use crate::state::AppState;

/// List registered services.
///
/// `GET /v1/services/?type=<type>&tag=<tag>&skip=<n>&limit=<n>`
///
/// # Response
///
/// ```json
/// [
///   {
///     "name": "backup-routers",
///     "type": "ansible-playbook",
///     "tags": ["net", "backup"],
///     "description": "Nightly router config backup"
///   }
/// ]
/// ```
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Service>>> {
    if let Some(requested) = params.resource_type.as_deref() {
        if !SERVICE_TYPES.contains(&requested) {
            return Err(ApiError::BadRequest(format!(
                "Invalid service type '{}'. Valid types: {}",
                requested,
                SERVICE_TYPES.join(", ")
            )));
        }
    }

    let services = state.catalog.services().await?;
    Ok(Json(filter_services(services, &params)))
}

/// List the service types currently in use.
///
/// `GET /v1/services/types`
pub async fn types(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let services = state.catalog.services().await?;
    Ok(Json(unique_sorted(
        services.into_iter().map(|s| s.service_type),
    )))
}

/// List the tags currently attached to any service.
///
/// `GET /v1/services/tags`
pub async fn tags(State(state): State<AppState>) -> ApiResult<Json<Vec<String>>> {
    let services = state.catalog.services().await?;
    Ok(Json(unique_sorted(
        services.into_iter().flat_map(|s| s.tags),
    )))
}

/// Get a single service by name.
///
/// `GET /v1/services/{name}`
pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<Service>> {
    state
        .catalog
        .service(&name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Service '{}' not found", name)))
}

/// Get torero's full description of a service.
///
/// `GET /v1/services/{name}/describe`
///
/// Returns the raw JSON document torero emits for the service.
pub async fn describe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    if state.catalog.service(&name).await?.is_none() {
        return Err(ApiError::NotFound(format!("Service '{}' not found", name)));
    }

    let description = state.catalog.describe_service(&name).await?;
    Ok(Json(description))
}
