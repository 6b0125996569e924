//! HTTP handlers for the torero API.
//!
//! This module contains all route handlers organized by resource domain.

pub mod decorators;
pub mod execution;
pub mod health;
pub mod registries;
pub mod repositories;
pub mod root;
pub mod secrets;
pub mod services;

pub use health::health_check;
pub use root::api_root;
