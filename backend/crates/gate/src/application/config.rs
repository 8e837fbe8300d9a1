//! Application Configuration
//!
//! Configuration for the gate. Built once at startup, shared behind an
//! `Arc`, never mutated.

use std::str::FromStr;
use std::time::Duration;

use crate::domain::{ExcludedPaths, LoginRoute, PublicPaths};
use crate::error::{GateError, GateResult};

/// What to do with a protected request when the session lookup fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Treat the failure as "no session" and redirect to login
    #[default]
    Closed,
    /// Let the request through without a session
    Open,
    /// Answer with the lookup error (502/504)
    Propagate,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailurePolicy::Closed => "closed",
            FailurePolicy::Open => "open",
            FailurePolicy::Propagate => "propagate",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closed" | "fail-closed" => Ok(FailurePolicy::Closed),
            "open" | "fail-open" => Ok(FailurePolicy::Open),
            "propagate" => Ok(FailurePolicy::Propagate),
            other => Err(GateError::InvalidConfig(format!(
                "unknown failure policy {other:?} (expected closed, open or propagate)"
            ))),
        }
    }
}

/// Gate configuration
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Paths reachable without a session
    pub public_paths: PublicPaths,
    /// Paths that skip the gate entirely (assets, images)
    pub excluded_paths: ExcludedPaths,
    /// Where blocked visitors are sent
    pub login: LoginRoute,
    /// Upper bound on one session lookup (3 seconds)
    pub session_timeout: Duration,
    /// Behavior when the lookup fails on a protected path
    pub failure_policy: FailurePolicy,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            public_paths: PublicPaths::default(),
            excluded_paths: ExcludedPaths::default(),
            login: LoginRoute::default(),
            session_timeout: Duration::from_secs(3),
            failure_policy: FailurePolicy::Closed,
        }
    }
}

impl GateConfig {
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_session_timeout(mut self, timeout: Duration) -> Self {
        self.session_timeout = timeout;
        self
    }

    /// Reject configurations that cannot work.
    ///
    /// A login path that is itself protected would redirect forever.
    pub fn validate(&self) -> GateResult<()> {
        if !self.login.path.starts_with('/') {
            return Err(GateError::InvalidConfig(format!(
                "login path {:?} must start with '/'",
                self.login.path
            )));
        }
        if self.login.param.is_empty() {
            return Err(GateError::InvalidConfig(
                "redirect parameter name must not be empty".to_string(),
            ));
        }
        if !self.public_paths.is_public(&self.login.path) {
            return Err(GateError::InvalidConfig(format!(
                "login path {:?} is not in the public allow-list",
                self.login.path
            )));
        }
        if self.excluded_paths.matches(&self.login.path) {
            return Err(GateError::InvalidConfig(format!(
                "login path {:?} is excluded from the gate",
                self.login.path
            )));
        }
        if self.session_timeout.is_zero() {
            return Err(GateError::InvalidConfig(
                "session lookup timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn session_timeout_ms(&self) -> u64 {
        self.session_timeout.as_millis() as u64
    }
}
