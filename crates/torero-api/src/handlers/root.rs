//! API root endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// API identity response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiInfo {
    /// API name
    pub name: String,

    /// API version
    pub version: String,

    /// Short description
    pub description: String,

    /// torero binary this instance fronts
    pub binary: String,
}

/// API identity endpoint.
///
/// `GET /`
pub async fn api_root(State(state): State<AppState>) -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "torero-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "REST API facade for torero service management".to_string(),
        binary: state.config.binary.clone(),
    })
}
