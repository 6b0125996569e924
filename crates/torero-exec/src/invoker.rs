//! Spawn-with-timeout execution of torero subcommands.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;

use crate::error::ExecError;
use crate::output::RunOutput;

/// Deadline for the `torero version` availability probe.
const VERSION_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Invokes the external torero binary.
///
/// Every call spawns a fresh short-lived subprocess. Children are created
/// with `kill_on_drop`, so a timeout or a dropped caller future terminates
/// the process instead of leaving an orphaned automation job behind.
#[derive(Debug, Clone)]
pub struct ToreroInvoker {
    binary: PathBuf,
}

impl ToreroInvoker {
    /// Create an invoker for the `torero` binary on the execution path.
    pub fn new() -> Self {
        Self::with_binary("torero")
    }

    /// Create an invoker for a specific binary name or path.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// The configured binary name or path.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Resolve the binary against the execution path.
    ///
    /// A binary given as a path (containing a separator) is checked directly;
    /// a bare name is searched in `PATH`.
    pub fn locate(&self) -> Option<PathBuf> {
        if self.binary.components().count() > 1 {
            return self.binary.is_file().then(|| self.binary.clone());
        }

        let path = std::env::var_os("PATH")?;
        std::env::split_paths(&path)
            .map(|dir| dir.join(&self.binary))
            .find(|candidate| candidate.is_file())
    }

    /// Run a torero subcommand to completion, capturing output.
    ///
    /// Returns `RunOutput` for any exit code; only spawn failures and
    /// timeouts are errors. On timeout the child is killed.
    pub async fn run(&self, args: &[&str], deadline: Duration) -> Result<RunOutput, ExecError> {
        tracing::debug!(binary = %self.binary.display(), ?args, "Invoking torero");
        let start = Instant::now();

        let child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = match timeout(deadline, child.wait_with_output()).await {
            Ok(result) => result?,
            Err(_) => {
                // Dropping the wait future reaps the child via kill_on_drop.
                tracing::warn!(?args, seconds = deadline.as_secs(), "torero command timed out");
                return Err(ExecError::Timeout(deadline.as_secs()));
            }
        };

        let run = RunOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            exit_code = run.exit_code,
            duration_ms = run.duration_ms,
            "torero command finished"
        );

        Ok(run)
    }

    /// Run a `--raw` listing subcommand and parse its stdout as JSON.
    ///
    /// Non-zero exit codes and unparsable output are errors here: listing
    /// subcommands must succeed for the caller to have anything to map.
    pub async fn run_json(
        &self,
        args: &[&str],
        deadline: Duration,
    ) -> Result<serde_json::Value, ExecError> {
        let output = self.run(args, deadline).await?;

        if !output.is_success() {
            tracing::error!(
                exit_code = output.exit_code,
                stderr = %output.stderr.trim(),
                "torero listing command failed"
            );
            return Err(ExecError::Failure {
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        output
            .json()
            .map_err(|e| ExecError::InvalidOutput(e.to_string()))
    }

    /// Probe torero availability.
    ///
    /// Checks the execution path, then runs `torero version` with a short
    /// deadline. Returns the reported version on success.
    pub async fn check(&self) -> Result<String, ExecError> {
        if self.locate().is_none() {
            return Err(ExecError::Unavailable(format!(
                "{} executable not found in PATH",
                self.binary.display()
            )));
        }

        let output = self.run(&["version"], VERSION_PROBE_TIMEOUT).await?;
        if !output.is_success() {
            return Err(ExecError::Unavailable(format!(
                "torero version check failed: {}",
                output.stderr.trim()
            )));
        }

        Ok(parse_version(&output.stdout))
    }
}

impl Default for ToreroInvoker {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the version number from `torero version` output.
///
/// Expected shape: a line like `torero version 1.3.1`. Returns `"unknown"`
/// when no such line is present.
fn parse_version(stdout: &str) -> String {
    for line in stdout.lines() {
        if line.starts_with("torero") {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                return parts[2].to_string();
            }
        }
    }
    "unknown".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    /// Write an executable stub script and return its path.
    #[cfg(unix)]
    fn stub_script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "#!/bin/sh\n{}", body).unwrap();
        drop(file);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_captures_stdout_and_exit_code() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "echo 'hello'");

        let invoker = ToreroInvoker::with_binary(stub);
        let output = invoker.run(&[], Duration::from_secs(5)).await.unwrap();

        assert!(output.is_success());
        assert_eq!(output.exit_code, 0);
        assert!(output.stdout.contains("hello"));
    }

    #[tokio::test]
    async fn test_run_reports_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "echo 'boom' >&2\nexit 3");

        let invoker = ToreroInvoker::with_binary(stub);
        let output = invoker.run(&[], Duration::from_secs(5)).await.unwrap();

        assert_eq!(output.exit_code, 3);
        assert!(output.stderr.contains("boom"));
    }

    #[tokio::test]
    async fn test_run_times_out() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "sleep 10");

        let invoker = ToreroInvoker::with_binary(stub);
        let err = invoker
            .run(&[], Duration::from_millis(100))
            .await
            .unwrap_err();

        assert!(matches!(err, ExecError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_run_missing_binary_is_unavailable() {
        let invoker = ToreroInvoker::with_binary("/nonexistent/torero");
        let err = invoker.run(&[], Duration::from_secs(1)).await.unwrap_err();

        assert!(matches!(err, ExecError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_run_json_parses_listing() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", r#"echo '[{"name":"svc-a"}]'"#);

        let invoker = ToreroInvoker::with_binary(stub);
        let value = invoker
            .run_json(&["get", "services", "--raw"], Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(value[0]["name"], "svc-a");
    }

    #[tokio::test]
    async fn test_run_json_nonzero_exit_is_failure() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "echo 'db locked' >&2\nexit 1");

        let invoker = ToreroInvoker::with_binary(stub);
        let err = invoker
            .run_json(&["get", "services", "--raw"], Duration::from_secs(5))
            .await
            .unwrap_err();

        match err {
            ExecError::Failure { exit_code, stderr } => {
                assert_eq!(exit_code, 1);
                assert_eq!(stderr, "db locked");
            }
            other => panic!("expected Failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_json_malformed_output_is_invalid() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "echo 'Usage: torero ...'");

        let invoker = ToreroInvoker::with_binary(stub);
        let err = invoker
            .run_json(&["get", "services", "--raw"], Duration::from_secs(5))
            .await
            .unwrap_err();

        assert!(matches!(err, ExecError::InvalidOutput(_)));
    }

    #[tokio::test]
    async fn test_check_reports_version() {
        let dir = TempDir::new().unwrap();
        let stub = stub_script(&dir, "torero", "echo 'torero version 1.3.1'");

        let invoker = ToreroInvoker::with_binary(stub);
        let version = invoker.check().await.unwrap();

        assert_eq!(version, "1.3.1");
    }

    #[tokio::test]
    async fn test_check_missing_binary() {
        let invoker = ToreroInvoker::with_binary("/nonexistent/torero");
        let err = invoker.check().await.unwrap_err();

        assert!(matches!(err, ExecError::Unavailable(_)));
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("torero version 1.3.1\n"), "1.3.1");
        assert_eq!(parse_version("something else\n"), "unknown");
        assert_eq!(parse_version(""), "unknown");
    }

    #[test]
    fn test_locate_bare_name_searches_path() {
        let invoker = ToreroInvoker::with_binary("definitely-not-a-real-binary-name");
        assert!(invoker.locate().is_none());
    }
}
