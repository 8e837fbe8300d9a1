//! Authentication Provider Session Resolver
//!
//! Resolves sessions against a hosted auth service by forwarding the
//! access token from the session cookie to its "current user" endpoint.

use std::sync::Arc;

use axum::http::{HeaderMap, StatusCode};
use platform::cookie::extract_cookie;
use platform::http_client::{HttpClientConfig, build_http_client};

use crate::domain::resolver::SessionResolver;
use crate::domain::session::Session;
use crate::error::{GateError, GateResult};

/// Where and how to reach the provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://project.auth.example.com`
    pub base_url: String,
    /// Path of the endpoint returning the current user
    pub user_endpoint: String,
    /// Public API key sent as the `apikey` header, if the provider wants one
    pub api_key: Option<String>,
    /// Cookie holding the provider access token
    pub session_cookie_name: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:54321".to_string(),
            user_endpoint: "/auth/v1/user".to_string(),
            api_key: None,
            session_cookie_name: "access_token".to_string(),
        }
    }
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn user_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.user_endpoint.trim_start_matches('/')
        )
    }
}

/// HTTP-backed session resolver
#[derive(Clone)]
pub struct HttpSessionResolver {
    client: reqwest::Client,
    config: Arc<ProviderConfig>,
}

impl HttpSessionResolver {
    pub fn new(config: ProviderConfig, http: &HttpClientConfig) -> GateResult<Self> {
        let client = build_http_client(http)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::Client, config: ProviderConfig) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

impl SessionResolver for HttpSessionResolver {
    async fn resolve(&self, headers: &HeaderMap) -> GateResult<Option<Session>> {
        let Some(token) = extract_cookie(headers, &self.config.session_cookie_name) else {
            tracing::debug!("No session cookie");
            return Ok(None);
        };

        let mut request = self.client.get(self.config.user_url()).bearer_auth(&token);
        if let Some(api_key) = &self.config.api_key {
            request = request.header("apikey", api_key);
        }

        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let session: Session = response.json().await?;
                Ok(Some(session))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => {
                tracing::debug!(status = response.status().as_u16(), "Provider rejected token");
                Ok(None)
            }
            status => Err(GateError::Provider {
                status: status.as_u16(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};
    use std::time::Duration;

    fn resolver_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> HttpSessionResolver {
        let config = ProviderConfig {
            api_key: api_key.map(str::to_string),
            ..ProviderConfig::new(server.url())
        };
        HttpSessionResolver::new(config, &HttpClientConfig::default()).unwrap()
    }

    fn cookie_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_user_url_joins_cleanly() {
        let config = ProviderConfig::new("https://auth.example.com/");
        assert_eq!(config.user_url(), "https://auth.example.com/auth/v1/user");

        let config = ProviderConfig {
            user_endpoint: "me".to_string(),
            ..ProviderConfig::new("https://auth.example.com")
        };
        assert_eq!(config.user_url(), "https://auth.example.com/me");
    }

    #[tokio::test]
    async fn test_valid_token_resolves_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/v1/user")
            .match_header("authorization", "Bearer tok-123")
            .match_header("apikey", "anon-key")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"user-1","email":"ada@example.com","role":"authenticated"}"#)
            .expect(1)
            .create_async()
            .await;

        let resolver = resolver_for(&server, Some("anon-key"));
        let session = resolver
            .resolve(&cookie_headers("theme=dark; access_token=tok-123"))
            .await
            .unwrap();

        mock.assert_async().await;
        let session = session.expect("session should be present");
        assert_eq!(session.user_id.as_deref(), Some("user-1"));
        assert_eq!(session.email.as_deref(), Some("ada@example.com"));
    }

    #[tokio::test]
    async fn test_missing_cookie_skips_provider() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/auth/v1/user")
            .expect(0)
            .create_async()
            .await;

        let resolver = resolver_for(&server, None);
        let session = resolver.resolve(&HeaderMap::new()).await.unwrap();

        mock.assert_async().await;
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_rejected_token_is_no_session() {
        for status in [401, 403, 404] {
            let mut server = mockito::Server::new_async().await;
            let _mock = server
                .mock("GET", "/auth/v1/user")
                .with_status(status)
                .create_async()
                .await;

            let resolver = resolver_for(&server, None);
            let session = resolver
                .resolve(&cookie_headers("access_token=expired"))
                .await
                .unwrap();

            assert!(session.is_none(), "status {status} should mean no session");
        }
    }

    #[tokio::test]
    async fn test_provider_error_status_is_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/v1/user")
            .with_status(500)
            .create_async()
            .await;

        let resolver = resolver_for(&server, None);
        let err = resolver
            .resolve(&cookie_headers("access_token=tok"))
            .await
            .unwrap_err();

        assert!(matches!(err, GateError::Provider { status: 500 }));
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/auth/v1/user")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let resolver = resolver_for(&server, None);
        let err = resolver
            .resolve(&cookie_headers("access_token=tok"))
            .await
            .unwrap_err();

        assert!(matches!(err, GateError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let http = HttpClientConfig {
            request_timeout: Duration::from_millis(500),
            connect_timeout: Duration::from_millis(200),
            ..Default::default()
        };
        let resolver = HttpSessionResolver::new(ProviderConfig::new("http://127.0.0.1:1"), &http).unwrap();

        let err = resolver
            .resolve(&cookie_headers("access_token=tok"))
            .await
            .unwrap_err();

        assert!(matches!(err, GateError::Transport(_)));
        assert!(err.is_lookup_failure());
    }
}
