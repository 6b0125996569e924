//! torero CLI invoker.
//!
//! This crate wraps invocations of the external `torero` binary. It is the
//! only place that touches `tokio::process`; everything above it deals in
//! typed results.
//!
//! - [`invoker`]: spawn-with-timeout execution of torero subcommands
//! - [`output`]: captured subprocess output (exit code, stdout, stderr, duration)
//! - [`error`]: invoker error taxonomy

pub mod error;
pub mod invoker;
pub mod output;

pub use error::ExecError;
pub use invoker::ToreroInvoker;
pub use output::RunOutput;
