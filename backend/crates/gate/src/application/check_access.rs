//! Check Access Use Case
//!
//! Resolves the session (bounded by the configured timeout), applies the
//! failure policy, and runs the decision.

use std::sync::Arc;

use axum::http::HeaderMap;

use crate::application::config::{FailurePolicy, GateConfig};
use crate::domain::resolver::SessionResolver;
use crate::domain::{AccessDecision, Session, decide};
use crate::error::{GateError, GateResult};

/// Result of checking one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessOutcome {
    pub decision: AccessDecision,
    /// Present only when the provider confirmed a session
    pub session: Option<Session>,
}

/// Check access use case
pub struct CheckAccessUseCase<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    resolver: Arc<R>,
    config: Arc<GateConfig>,
}

impl<R> CheckAccessUseCase<R>
where
    R: SessionResolver + Send + Sync + 'static,
{
    pub fn new(resolver: Arc<R>, config: Arc<GateConfig>) -> Self {
        Self { resolver, config }
    }

    /// Decide for `path`.
    ///
    /// Lookup failures error only under `FailurePolicy::Propagate`, and only
    /// for protected paths. A failed lookup never blocks a public page.
    pub async fn execute(&self, path: &str, headers: &HeaderMap) -> GateResult<AccessOutcome> {
        let is_public = self.config.public_paths.is_public(path);

        let session = match self.lookup_session(headers).await {
            Ok(session) => session,
            Err(e) if !e.is_lookup_failure() => return Err(e),
            Err(e) if is_public => {
                tracing::debug!(error = %e, path, "Session lookup failed on public path");
                None
            }
            Err(e) => match self.config.failure_policy {
                FailurePolicy::Closed => {
                    tracing::warn!(error = %e, path, "Session lookup failed, treating as signed out");
                    None
                }
                FailurePolicy::Open => {
                    tracing::warn!(error = %e, path, "Session lookup failed, letting request through");
                    return Ok(AccessOutcome {
                        decision: AccessDecision::Allow,
                        session: None,
                    });
                }
                FailurePolicy::Propagate => return Err(e),
            },
        };

        let decision = decide(
            path,
            session.is_some(),
            &self.config.public_paths,
            &self.config.login,
        );

        Ok(AccessOutcome { decision, session })
    }

    /// Ask the resolver, giving up after `session_timeout`.
    pub async fn lookup_session(&self, headers: &HeaderMap) -> GateResult<Option<Session>> {
        let budget = self.config.session_timeout;

        match tokio::time::timeout(budget, self.resolver.resolve(headers)).await {
            Ok(result) => result,
            Err(_) => Err(GateError::Timeout(budget)),
        }
    }
}
