//! Access decision
//!
//! The whole policy: protected path and no session means login.

use crate::domain::public_paths::PublicPaths;
use crate::domain::redirect::{LoginRoute, RedirectTarget};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Forward the request unchanged
    Allow,
    /// Send the visitor to the login page
    Redirect(RedirectTarget),
}

impl AccessDecision {
    pub fn is_allow(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// Decide for one request.
///
/// Public paths pass regardless of session; protected paths pass only
/// with a session.
pub fn decide(
    path: &str,
    session_present: bool,
    public_paths: &PublicPaths,
    login: &LoginRoute,
) -> AccessDecision {
    if session_present || public_paths.is_public(path) {
        AccessDecision::Allow
    } else {
        AccessDecision::Redirect(login.target_for(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::public_paths::DEFAULT_PUBLIC_PATHS;

    fn run(path: &str, session_present: bool) -> AccessDecision {
        decide(
            path,
            session_present,
            &PublicPaths::default(),
            &LoginRoute::default(),
        )
    }

    #[test]
    fn test_public_paths_pass_with_and_without_session() {
        for path in DEFAULT_PUBLIC_PATHS {
            assert!(run(path, false).is_allow(), "{path} without session");
            assert!(run(path, true).is_allow(), "{path} with session");
        }
    }

    #[test]
    fn test_protected_paths_redirect_without_session() {
        for path in ["/dashboard", "/dashboard/billing", "/a", "/authentication/logout"] {
            match run(path, false) {
                AccessDecision::Redirect(target) => {
                    assert_eq!(target.original_path(), path);
                    assert!(target.location().starts_with("/authentication/login?redirect="));
                }
                AccessDecision::Allow => panic!("{path} should redirect"),
            }
        }
    }

    #[test]
    fn test_protected_paths_pass_with_session() {
        assert_eq!(run("/dashboard", true), AccessDecision::Allow);
        assert_eq!(run("/dashboard/billing", true), AccessDecision::Allow);
    }

    #[test]
    fn test_dashboard_redirect_location() {
        let AccessDecision::Redirect(target) = run("/dashboard", false) else {
            panic!("expected redirect");
        };
        assert_eq!(
            target.location(),
            "/authentication/login?redirect=%2Fdashboard"
        );
    }

    #[test]
    fn test_prefix_of_public_entry_is_public() {
        assert!(run("/about/team", false).is_allow());
    }
}
