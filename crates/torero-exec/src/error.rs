//! Invoker error types.

use thiserror::Error;

/// Errors that can occur while invoking the torero binary.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The torero binary is missing from the execution path.
    #[error("torero unavailable: {0}")]
    Unavailable(String),

    /// Spawning or waiting on the subprocess failed for another reason.
    #[error("process error: {0}")]
    Process(String),

    /// The subprocess did not finish within the deadline. The child is killed.
    #[error("torero command timed out after {0} seconds")]
    Timeout(u64),

    /// The subprocess exited non-zero where success was required.
    #[error("torero exited with code {exit_code}: {stderr}")]
    Failure { exit_code: i32, stderr: String },

    /// torero emitted output that could not be parsed as JSON.
    #[error("invalid JSON from torero: {0}")]
    InvalidOutput(String),
}

impl From<std::io::Error> for ExecError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExecError::Unavailable(e.to_string())
        } else {
            ExecError::Process(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExecError::Timeout(30);
        assert_eq!(err.to_string(), "torero command timed out after 30 seconds");

        let err = ExecError::Failure {
            exit_code: 2,
            stderr: "no such service".to_string(),
        };
        assert_eq!(err.to_string(), "torero exited with code 2: no such service");
    }

    #[test]
    fn test_not_found_io_error_maps_to_unavailable() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no torero");
        let err: ExecError = io_err.into();
        assert!(matches!(err, ExecError::Unavailable(_)));
    }

    #[test]
    fn test_other_io_error_maps_to_process() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ExecError = io_err.into();
        assert!(matches!(err, ExecError::Process(_)));
    }
}
