//! Execution API handlers.
//!
//! Each endpoint maps to one torero run subcommand. Executions trigger real
//! automation actions in the external system: they are not idempotent and
//! are never retried. A non-zero exit code is a reported outcome, returned
//! with HTTP 200 and torero's exit code verbatim in the payload; HTTP errors
//! are reserved for requests that could not be processed at all.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use torero_exec::RunOutput;

use crate::error::{ApiError, ApiResult};
use crate::models::ExecutionResult;
use crate::state::AppState;

/// Run an ansible-playbook service.
///
/// `POST /v1/execution/ansible-playbook/{name}`
///
/// # Response
///
/// ```json
/// {
///   "service": "backup-routers",
///   "type": "ansible-playbook",
///   "exit_code": 0,
///   "stdout": "PLAY RECAP ...",
///   "stderr": "",
///   "start_time": "2025-01-01T00:00:00Z",
///   "end_time": "2025-01-01T00:01:30Z",
///   "duration_ms": 90000
/// }
/// ```
pub async fn run_ansible_playbook(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ExecutionResult>> {
    require_service_type(&state, &name, "ansible-playbook").await?;
    let start = Utc::now();
    let output = state.catalog.run_ansible_playbook(&name).await?;
    Ok(respond(name, "ansible-playbook", start, output))
}

/// Run a python-script service.
///
/// `POST /v1/execution/python-script/{name}`
pub async fn run_python_script(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ExecutionResult>> {
    require_service_type(&state, &name, "python-script").await?;
    let start = Utc::now();
    let output = state.catalog.run_python_script(&name).await?;
    Ok(respond(name, "python-script", start, output))
}

/// Apply an opentofu-plan service.
///
/// `POST /v1/execution/opentofu-plan/{name}/apply`
pub async fn apply_opentofu_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ExecutionResult>> {
    require_service_type(&state, &name, "opentofu-plan").await?;
    let start = Utc::now();
    let output = state.catalog.apply_opentofu_plan(&name).await?;
    Ok(respond(name, "opentofu-plan", start, output))
}

/// Destroy an opentofu-plan service.
///
/// `POST /v1/execution/opentofu-plan/{name}/destroy`
pub async fn destroy_opentofu_plan(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ExecutionResult>> {
    require_service_type(&state, &name, "opentofu-plan").await?;
    let start = Utc::now();
    let output = state.catalog.destroy_opentofu_plan(&name).await?;
    Ok(respond(name, "opentofu-plan", start, output))
}

/// Verify the named service exists and matches the endpoint's service type.
async fn require_service_type(
    state: &AppState,
    name: &str,
    expected_type: &str,
) -> ApiResult<()> {
    let service = state
        .catalog
        .service(name)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Service '{}' not found", name)))?;

    if service.service_type != expected_type {
        return Err(ApiError::BadRequest(format!(
            "Service '{}' has type '{}', expected '{}'",
            name, service.service_type, expected_type
        )));
    }

    Ok(())
}

fn respond(
    name: String,
    service_type: &str,
    start: chrono::DateTime<Utc>,
    output: RunOutput,
) -> Json<ExecutionResult> {
    if !output.is_success() {
        tracing::warn!(
            service = %name,
            exit_code = output.exit_code,
            "Service execution reported failure"
        );
    }
    Json(ExecutionResult::from_output(name, service_type, start, output))
}
