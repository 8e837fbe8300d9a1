//! Paths the gate never looks at
//!
//! Static assets and images are served without a session lookup. This
//! rule runs before the allow-list and is independent of it.

/// Prefixes served straight from disk.
pub const DEFAULT_EXCLUDED_PREFIXES: &[&str] = &["/static/", "/favicon.ico"];

/// Image extensions (compared case-insensitively, without the dot).
pub const DEFAULT_EXCLUDED_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp", "ico"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedPaths {
    prefixes: Vec<String>,
    extensions: Vec<String>,
}

impl ExcludedPaths {
    pub fn new<P, E>(prefixes: P, extensions: E) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
            extensions: extensions
                .into_iter()
                .map(|e| e.into().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        if self.prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            return true;
        }

        let last_segment = path.rsplit('/').next().unwrap_or(path);
        match last_segment.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.extensions.iter().any(|e| *e == ext)
            }
            _ => false,
        }
    }
}

impl Default for ExcludedPaths {
    fn default() -> Self {
        Self::new(
            DEFAULT_EXCLUDED_PREFIXES.iter().copied(),
            DEFAULT_EXCLUDED_EXTENSIONS.iter().copied(),
        )
    }
}
