//! Infrastructure Layer
//!
//! Session resolver implementations.

pub mod provider;

pub use provider::{HttpSessionResolver, ProviderConfig};
