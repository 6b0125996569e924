//! Application configuration for the torero API server.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// Environment variables are prefixed with `TORERO_API_`:
/// - `TORERO_API_HOST`: Server bind address (default: "0.0.0.0")
/// - `TORERO_API_PORT`: Server port (default: 8000)
/// - `TORERO_API_BINARY`: torero binary name or path (default: "torero")
/// - `TORERO_API_LIST_TIMEOUT`: Listing subcommand deadline in seconds (default: 30)
/// - `TORERO_API_EXECUTION_TIMEOUT`: Execution subcommand deadline in seconds (default: 600)
/// - `TORERO_API_LOG_LEVEL`: Default log filter level (default: "info")
/// - `TORERO_API_PID_FILE`: PID file path (default: ~/.torero-api/torero-api.pid)
/// - `TORERO_API_LOG_FILE`: Daemon log file path (default: ~/.torero-api/torero-api.log)
///
/// The configuration is immutable after startup; handlers receive it behind
/// an `Arc` through the application state.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// torero binary name or path
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Deadline for listing/describe subcommands, in seconds
    #[serde(default = "default_list_timeout")]
    pub list_timeout: u64,

    /// Deadline for execution subcommands, in seconds. Infrastructure
    /// apply/destroy runs can take minutes.
    #[serde(default = "default_execution_timeout")]
    pub execution_timeout: u64,

    /// Default log filter level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// PID file path (daemon mode)
    #[serde(default)]
    pub pid_file: Option<PathBuf>,

    /// Log file path (daemon mode)
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_binary() -> String {
    "torero".to_string()
}

fn default_list_timeout() -> u64 {
    30
}

fn default_execution_timeout() -> u64 {
    600
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `TORERO_API_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("TORERO_API_").from_env::<AppConfig>()
    }

    /// Get the server bind address as a string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// PID file path, falling back to `~/.torero-api/torero-api.pid`.
    pub fn pid_file_path(&self) -> PathBuf {
        self.pid_file
            .clone()
            .unwrap_or_else(|| state_dir().join("torero-api.pid"))
    }

    /// Log file path, falling back to `~/.torero-api/torero-api.log`.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| state_dir().join("torero-api.log"))
    }
}

/// Directory for PID and log files.
fn state_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".torero-api")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            binary: default_binary(),
            list_timeout: default_list_timeout(),
            execution_timeout: default_execution_timeout(),
            log_level: default_log_level(),
            pid_file: None,
            log_file: None,
        }
    }
}
