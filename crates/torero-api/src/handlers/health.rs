//! Health check endpoint for the torero API.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status ("ok" or "unhealthy")
    pub status: String,

    /// torero availability probe outcome
    pub torero: String,

    /// torero version, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub torero_version: Option<String>,

    /// Server uptime in seconds
    pub uptime_seconds: u64,

    /// API version
    pub version: String,
}

/// Health check endpoint.
///
/// `GET /health`
///
/// Probes torero availability on every call (PATH lookup plus a short
/// `torero version` run).
///
/// # Returns
///
/// - `200 OK` when torero is reachable
/// - `503 Service Unavailable` when the binary is missing or unresponsive
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (status_code, status, torero, torero_version) =
        match state.catalog.invoker().check().await {
            Ok(version) => (
                StatusCode::OK,
                "ok".to_string(),
                "available".to_string(),
                Some(version),
            ),
            Err(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unhealthy".to_string(),
                e.to_string(),
                None,
            ),
        };

    let response = HealthResponse {
        status,
        torero,
        torero_version,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (status_code, Json(response))
}
