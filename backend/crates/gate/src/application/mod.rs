//! Application Layer
//!
//! Use cases and configuration.

pub mod check_access;
pub mod config;

// Re-exports
pub use check_access::{AccessOutcome, CheckAccessUseCase};
pub use config::{FailurePolicy, GateConfig};
