//! Outbound HTTP client
//!
//! One pooled `reqwest::Client` per upstream, built at startup.

use std::time::Duration;

/// Settings for an outbound client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Whole-request timeout (connect + send + receive)
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            user_agent: concat!("platform/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Build a client with the given timeouts.
///
/// Redirects are not followed: an auth provider that answers with a
/// redirect is misconfigured and should surface as an error status.
pub fn build_http_client(config: &HttpClientConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .user_agent(config.user_agent.clone())
        .redirect(reqwest::redirect::Policy::none())
        .build()
}
