//! Redirect target
//!
//! Where an unauthenticated visitor is sent, and how the page they wanted
//! is carried along so the login page can send them back.

/// Login entry point plus the query parameter that carries the original path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRoute {
    pub path: String,
    pub param: String,
}

impl Default for LoginRoute {
    fn default() -> Self {
        Self {
            path: "/authentication/login".to_string(),
            param: "redirect".to_string(),
        }
    }
}

impl LoginRoute {
    pub fn target_for(&self, original_path: &str) -> RedirectTarget {
        RedirectTarget::new(self.path.clone(), self.param.clone(), original_path)
    }
}

/// Login location for one blocked request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    login_path: String,
    param: String,
    original_path: String,
}

impl RedirectTarget {
    pub fn new(
        login_path: impl Into<String>,
        param: impl Into<String>,
        original_path: impl Into<String>,
    ) -> Self {
        Self {
            login_path: login_path.into(),
            param: param.into(),
            original_path: original_path.into(),
        }
    }

    pub fn original_path(&self) -> &str {
        &self.original_path
    }

    /// Value for the `Location` header, e.g.
    /// `/authentication/login?redirect=%2Fdashboard`.
    pub fn location(&self) -> String {
        format!(
            "{}?{}={}",
            self.login_path,
            urlencoding::encode(&self.param),
            urlencoding::encode(&self.original_path)
        )
    }
}

/// Validate a post-login return path.
///
/// `path` is the already-decoded query value; it is not decoded again, so
/// escapes that were part of the original request path (`%3F`, `%2520`)
/// survive and the visitor returns to the exact route they asked for.
///
/// Only same-origin relative paths survive. Anything that a browser could
/// resolve to another host (`//evil.com`, `/\evil.com`, `https://...`) or
/// that carries control characters is rejected.
pub fn sanitize_return_path(path: &str) -> Option<&str> {
    let valid = path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
        && !path.chars().any(char::is_control);

    valid.then_some(path)
}
