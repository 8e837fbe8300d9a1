//! Gate Router helpers

use axum::Router;
use axum::middleware::from_fn_with_state;

use crate::domain::resolver::SessionResolver;
use crate::presentation::middleware::{GateState, route_gate};

/// Put every route of `router` behind the gate.
///
/// Apply this after all routes are merged: axum layers only wrap routes
/// that already exist, and the fallback counts as one.
pub fn gated<R>(router: Router, state: GateState<R>) -> Router
where
    R: SessionResolver + Send + Sync + 'static,
{
    router.layer(from_fn_with_state(state, route_gate::<R>))
}
