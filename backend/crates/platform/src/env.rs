//! Environment variable helpers
//!
//! Small typed readers used by the binary when it assembles its config.

use std::str::FromStr;

/// Error reading a typed environment variable
#[derive(Debug, Clone, thiserror::Error)]
pub enum EnvError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: String, value: String },
}

/// Read a boolean flag. Accepts `1/true/yes/on` and `0/false/no/off`,
/// case-insensitively. Anything else (or unset) is `None`.
pub fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

/// Read a string, falling back to `default` when unset or blank.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Read a required, non-blank string.
pub fn env_required(key: &str) -> Result<String, EnvError> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| EnvError::Missing(key.to_string()))
}

/// Parse an optional variable. Unset or blank is `Ok(None)`; a value that
/// does not parse is an error rather than silently ignored.
pub fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, EnvError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<T>().map(Some).map_err(|_| EnvError::Invalid {
        key: key.to_string(),
        value: raw.to_string(),
    })
}
