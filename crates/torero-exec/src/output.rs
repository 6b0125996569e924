//! Captured subprocess output.

use serde::{Deserialize, Serialize};

/// Result of running a torero subcommand to completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutput {
    /// Process exit code (-1 if terminated by a signal).
    pub exit_code: i32,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl RunOutput {
    /// Returns true if the process exited with code 0.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_success() {
        let out = RunOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
            duration_ms: 1,
        };
        assert!(out.is_success());

        let out = RunOutput { exit_code: 2, ..out };
        assert!(!out.is_success());
    }

    #[test]
    fn test_json_parses_stdout() {
        let out = RunOutput {
            exit_code: 0,
            stdout: r#"[{"name":"hello"}]"#.to_string(),
            stderr: String::new(),
            duration_ms: 1,
        };
        let value = out.json().unwrap();
        assert_eq!(value[0]["name"], "hello");
    }

    #[test]
    fn test_json_rejects_non_json() {
        let out = RunOutput {
            exit_code: 0,
            stdout: "not json".to_string(),
            stderr: String::new(),
            duration_ms: 1,
        };
        assert!(out.json().is_err());
    }
}
