//! Web Server Entry Point
//!
//! Serves the site behind the route gate. Uses `anyhow` for startup errors;
//! request-time failures are `gate::GateError` rendered as problem JSON.

use anyhow::Context;
use axum::Router;
use gate::domain::PublicPaths;
use gate::{FailurePolicy, GateConfig, GateState, HttpSessionResolver, ProviderConfig};
use platform::cookie::CookieConfig;
use platform::env::{env_bool, env_or, env_parse, env_required};
use platform::http_client::HttpClientConfig;
use site::{SiteConfig, site_router};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "web=info,gate=info,site=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Auth provider
    let cookie_name = env_or("SESSION_COOKIE_NAME", "access_token");
    let provider = ProviderConfig {
        api_key: std::env::var("AUTH_PROVIDER_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty()),
        session_cookie_name: cookie_name.clone(),
        ..ProviderConfig::new(env_required("AUTH_PROVIDER_URL")?)
    };

    // Gate configuration
    let mut gate_config = GateConfig::default();
    if let Ok(raw) = std::env::var("GATE_PUBLIC_PATHS") {
        let entries = raw.split(',').map(str::trim).filter(|e| !e.is_empty());
        gate_config.public_paths = PublicPaths::new(entries).context("GATE_PUBLIC_PATHS")?;
    }
    if let Some(ms) = env_parse::<u64>("SESSION_LOOKUP_TIMEOUT_MS")? {
        gate_config = gate_config.with_session_timeout(Duration::from_millis(ms));
    }
    if let Some(policy) = env_parse::<FailurePolicy>("GATE_FAILURE_POLICY")? {
        gate_config = gate_config.with_failure_policy(policy);
    }
    gate_config
        .validate()
        .context("invalid gate configuration")?;

    // Keep the HTTP timeout above the lookup budget so the gate's own
    // timeout is the one that fires.
    let http_config = HttpClientConfig {
        request_timeout: gate_config.session_timeout + Duration::from_secs(1),
        ..HttpClientConfig::default()
    };

    tracing::info!(
        provider = %provider.user_url(),
        cookie = %cookie_name,
        policy = gate_config.failure_policy.as_str(),
        timeout_ms = gate_config.session_timeout_ms(),
        "Route gate configured"
    );

    let resolver = HttpSessionResolver::new(provider, &http_config)?;

    // Site
    let site_config = SiteConfig {
        session_cookie: CookieConfig {
            secure: env_bool("COOKIE_SECURE").unwrap_or(true),
            ..CookieConfig::named(cookie_name)
        },
        ..SiteConfig::default()
    };

    let static_dir = PathBuf::from(env_or("STATIC_DIR", "static"));
    if !static_dir.is_dir() {
        tracing::warn!(dir = %static_dir.display(), "Static directory not found");
    }

    // Build router
    let app = Router::new()
        .nest_service("/static", ServeDir::new(&static_dir))
        .route_service("/favicon.ico", ServeFile::new(static_dir.join("favicon.ico")))
        .merge(site_router(site_config));

    let app = gate::gated(app, GateState::new(resolver, gate_config)).layer(TraceLayer::new_for_http());

    // Start server
    let addr = env_parse::<SocketAddr>("BIND_ADDR")?
        .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
