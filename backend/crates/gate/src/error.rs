//! Gate Error Types
//!
//! Gate-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use std::time::Duration;

use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use thiserror::Error;

/// Gate-specific result type alias
pub type GateResult<T> = Result<T, GateError>;

/// Everything that can go wrong while deciding whether a request may pass.
///
/// Only session resolution fails at request time; `InvalidConfig` is a
/// startup error.
#[derive(Debug, Error)]
pub enum GateError {
    /// Provider answered with a status that is neither "valid" nor "no session"
    #[error("Authentication provider returned status {status}")]
    Provider { status: u16 },

    /// Network failure or undecodable provider response
    #[error("Authentication provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Session lookup did not finish within the configured budget
    #[error("Session lookup timed out after {0:?}")]
    Timeout(Duration),

    /// Gate configuration is unusable
    #[error("Invalid gate configuration: {0}")]
    InvalidConfig(String),
}

impl GateError {
    /// Whether this error came from talking to the session provider.
    ///
    /// Only these follow the [`crate::FailurePolicy`]; anything else is a
    /// bug or a misconfiguration and is always returned.
    pub fn is_lookup_failure(&self) -> bool {
        matches!(
            self,
            GateError::Provider { .. } | GateError::Transport(_) | GateError::Timeout(_)
        )
    }

    /// Convert to AppError. Provider details stay in the logs; a transport
    /// failure travels along as the source.
    pub fn into_app_error(self) -> AppError {
        match self {
            GateError::Provider { .. } => AppError::bad_gateway("Could not verify your session")
                .with_action("Please try again shortly"),
            GateError::Transport(e) => AppError::bad_gateway("Could not verify your session")
                .with_action("Please try again shortly")
                .with_source(e),
            GateError::Timeout(_) => AppError::gateway_timeout("Session verification timed out")
                .with_action("Please try again shortly"),
            GateError::InvalidConfig(_) => AppError::internal("Internal server error"),
        }
    }

    fn log(&self) {
        match self {
            GateError::Provider { status } => {
                tracing::warn!(status = *status, "Auth provider returned unexpected status");
            }
            GateError::Transport(e) => {
                tracing::warn!(error = %e, "Auth provider request failed");
            }
            GateError::Timeout(budget) => {
                tracing::warn!(budget_ms = budget.as_millis() as u64, "Session lookup timed out");
            }
            GateError::InvalidConfig(msg) => {
                tracing::error!(message = %msg, "Invalid gate configuration");
            }
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
