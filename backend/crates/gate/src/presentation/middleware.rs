//! Route Gate Middleware
//!
//! Runs on every request that is not an excluded asset. Protected paths
//! without a session get a 307 to the login page; everything else is
//! forwarded with the session status attached.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use platform::client::extract_client_ip;

use crate::application::{CheckAccessUseCase, GateConfig};
use crate::domain::resolver::SessionResolver;
use crate::domain::{AccessDecision, SessionStatus};

/// Middleware state
pub struct GateState<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    pub resolver: Arc<R>,
    pub config: Arc<GateConfig>,
}

impl<R> GateState<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    pub fn new(resolver: R, config: GateConfig) -> Self {
        Self {
            resolver: Arc::new(resolver),
            config: Arc::new(config),
        }
    }
}

impl<R> Clone for GateState<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            resolver: self.resolver.clone(),
            config: self.config.clone(),
        }
    }
}

/// Gate middleware, for `axum::middleware::from_fn_with_state`.
///
/// On pass-through the request carries a [`SessionStatus`] extension, plus
/// the [`crate::domain::Session`] when one was resolved.
pub async fn route_gate<R>(
    State(state): State<GateState<R>>,
    mut req: Request,
    next: Next,
) -> Response
where
    R: SessionResolver + Send + Sync + 'static,
{
    let path = req.uri().path().to_owned();

    if state.config.excluded_paths.matches(&path) {
        return next.run(req).await;
    }

    let use_case = CheckAccessUseCase::new(state.resolver.clone(), state.config.clone());

    let outcome = match use_case.execute(&path, req.headers()).await {
        Ok(outcome) => outcome,
        Err(e) => return e.into_response(),
    };

    match outcome.decision {
        AccessDecision::Allow => {
            req.extensions_mut().insert(SessionStatus {
                is_authenticated: outcome.session.is_some(),
            });
            if let Some(session) = outcome.session {
                req.extensions_mut().insert(session);
            }
            next.run(req).await
        }
        AccessDecision::Redirect(target) => {
            let direct_ip = req
                .extensions()
                .get::<ConnectInfo<SocketAddr>>()
                .map(|info| info.0.ip());
            let client_ip = extract_client_ip(req.headers(), direct_ip);

            tracing::debug!(
                path = %path,
                client_ip = ?client_ip,
                "No session for protected path, redirecting to login"
            );

            Redirect::temporary(&target.location()).into_response()
        }
    }
}
