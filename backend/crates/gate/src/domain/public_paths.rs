//! Public path allow-list
//!
//! Paths reachable without a session. Built once at startup and only read
//! afterwards.

use crate::error::{GateError, GateResult};

/// Allow-list shipped with the site, in match order.
pub const DEFAULT_PUBLIC_PATHS: &[&str] = &[
    "/",
    "/about",
    "/services",
    "/contact",
    "/authentication/login",
    "/authentication/signup",
    "/authentication/reset-password",
    "/authentication/verify",
];

/// Ordered set of public path prefixes.
///
/// A path is public when it equals an entry or starts with one. Matching
/// is on raw string prefixes, so `/about` also admits `/about/team` and
/// `/aboutus`. The root entry `/` is the exception: it only admits `/`
/// itself, because every path starts with a slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicPaths {
    entries: Vec<String>,
}

impl PublicPaths {
    /// Build an allow-list. Every entry must be an absolute path.
    pub fn new<I, S>(entries: I) -> GateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

        if let Some(bad) = entries.iter().find(|e| !e.starts_with('/')) {
            return Err(GateError::InvalidConfig(format!(
                "public path {bad:?} must start with '/'"
            )));
        }

        Ok(Self { entries })
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.matching_entry(path).is_some()
    }

    /// First entry admitting `path`, in list order.
    pub fn matching_entry(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(String::as_str)
            .find(|entry| entry_admits(entry, path))
    }
}

impl Default for PublicPaths {
    fn default() -> Self {
        Self {
            entries: DEFAULT_PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

fn entry_admits(entry: &str, path: &str) -> bool {
    if entry == "/" {
        return path == "/";
    }
    path == entry || path.starts_with(entry)
}
