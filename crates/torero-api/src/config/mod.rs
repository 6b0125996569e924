//! Configuration loading for the torero API server.

mod app;

pub use app::AppConfig;
