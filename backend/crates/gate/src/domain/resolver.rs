//! Session resolver trait
//!
//! The authentication provider seen from the gate. Implementation is in the
//! infrastructure layer; tests substitute their own.

use axum::http::HeaderMap;

use crate::domain::session::Session;
use crate::error::GateResult;

/// Resolve the session for the current request.
///
/// * `Ok(Some(_))` - provider confirmed a session
/// * `Ok(None)` - no session (no credentials, or provider rejected them)
/// * `Err(_)` - could not find out
#[trait_variant::make(SessionResolver: Send)]
pub trait LocalSessionResolver {
    async fn resolve(&self, headers: &HeaderMap) -> GateResult<Option<Session>>;
}
