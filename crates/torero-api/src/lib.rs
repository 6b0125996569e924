//! torero API server library.
//!
//! A thin REST facade over the `torero` automation CLI. Every resource is a
//! transient projection of the tool's current state: each request re-invokes
//! the binary, maps its JSON output into typed resources, and applies
//! filtering and pagination in memory. Nothing is cached or persisted.
//!
//! ## Modules
//!
//! - [`config`]: Configuration from environment variables and CLI flags
//! - [`catalog`]: Resource mappers over torero listing/describe/run subcommands
//! - [`error`]: API error types with Axum integration
//! - [`handlers`]: HTTP route handlers
//! - [`models`]: Typed resource representations
//! - [`router`]: Versioned REST route table
//! - [`state`]: Shared application state
//!
//! ## Example
//!
//! ```ignore
//! use torero_api::{config::AppConfig, router::build_router, state::AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::from_env()?;
//!     let state = AppState::new(config);
//!     let app = build_router(state);
//!     // ... bind and serve
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod daemon;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use error::{ApiError, ApiResult};
