//! Execution result model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use torero_exec::RunOutput;

/// Outcome of running a service through torero.
///
/// Created synchronously per execution request and returned as the HTTP
/// response body; never persisted. The exit code is the external tool's,
/// verbatim: a non-zero code is a reported failure, not an HTTP error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Name of the executed service.
    pub service: String,

    /// Type of the executed service.
    #[serde(rename = "type")]
    pub service_type: String,

    /// torero's exit code.
    pub exit_code: i32,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// When the invocation started.
    pub start_time: DateTime<Utc>,

    /// When the invocation finished.
    pub end_time: DateTime<Utc>,

    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl ExecutionResult {
    /// Build a result from captured subprocess output.
    pub fn from_output(
        service: impl Into<String>,
        service_type: impl Into<String>,
        start_time: DateTime<Utc>,
        output: RunOutput,
    ) -> Self {
        Self {
            service: service.into(),
            service_type: service_type.into(),
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
            start_time,
            end_time: Utc::now(),
            duration_ms: output.duration_ms,
        }
    }
}
