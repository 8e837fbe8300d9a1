//! Presentation Layer
//!
//! Middleware and router helpers.

pub mod middleware;
pub mod router;

pub use middleware::{GateState, route_gate};
pub use router::gated;
