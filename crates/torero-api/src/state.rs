//! Application state for the torero API server.
//!
//! This module defines the shared application state that is
//! passed to all handlers via Axum's state management.

use std::sync::Arc;

use crate::catalog::ToreroCatalog;
use crate::config::AppConfig;

/// Shared application state.
///
/// Holds the immutable configuration and the catalog handle. Nothing here
/// is mutated after startup; requests share no writable state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,

    /// Resource mapper over the torero CLI
    pub catalog: ToreroCatalog,

    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create a new application state from the startup configuration.
    pub fn new(config: AppConfig) -> Self {
        let catalog = ToreroCatalog::new(&config);
        Self {
            config: Arc::new(config),
            catalog,
            start_time: std::time::Instant::now(),
        }
    }

    /// Get the server uptime in seconds.
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_carries_config() {
        let state = AppState::new(AppConfig::default());
        assert_eq!(state.config.port, 8000);
        assert!(state.uptime_seconds() < 5);
    }
}
