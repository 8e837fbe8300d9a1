//! Gate (Route Access Control) Module
//!
//! Clean Architecture structure:
//! - `domain/` - Allow-list, exclusions, decision function, resolver trait
//! - `application/` - Check-access use case and configuration
//! - `infra/` - HTTP session resolver for the hosted auth provider
//! - `presentation/` - axum middleware
//!
//! ## Policy
//! - Paths on the public allow-list pass with or without a session
//! - Any other path without a session is redirected to
//!   `/authentication/login?redirect=<original path>`
//! - Static assets and images bypass the gate
//! - Session lookups are time-bounded; failures follow [`FailurePolicy`]
//!   (fail-closed by default)
//!
//! ## Usage
//! ```rust,ignore
//! let resolver = HttpSessionResolver::new(provider_config, &http_config)?;
//! let state = GateState::new(resolver, GateConfig::default());
//! let app = gate::gated(site_router, state);
//! ```

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{FailurePolicy, GateConfig};
pub use domain::{Session, SessionStatus, sanitize_return_path};
pub use error::{GateError, GateResult};
pub use infra::provider::{HttpSessionResolver, ProviderConfig};
pub use presentation::{GateState, gated, route_gate};
