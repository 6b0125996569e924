//! Typed representations of torero resources.
//!
//! All resources are read-only projections of torero's current state,
//! deserialized from `--raw` CLI output. Fields the facade does not model
//! explicitly are preserved in a flattened metadata map so tool-specific
//! detail survives the round trip.

mod execution;
mod resource;
mod secret;
mod service;

pub use execution::ExecutionResult;
pub use resource::Resource;
pub use secret::Secret;
pub use service::{Service, SERVICE_TYPES};
