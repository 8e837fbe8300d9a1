//! Site Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::config::SiteConfig;
use crate::pages::{account, dashboard, home, info, login, not_found, sign_out, signup};

pub type SiteState = Arc<SiteConfig>;

/// Create the site router
///
/// Routes are registered from `config`; the gate is applied by the caller.
pub fn site_router(config: SiteConfig) -> Router {
    let state: SiteState = Arc::new(config);

    Router::new()
        .route(&state.home_path, get(home::home))
        .route("/about", get(info::about))
        .route("/services", get(info::services))
        .route("/contact", get(info::contact))
        .route(&state.login_path, get(login::login))
        .route(&state.signup_path, get(signup::signup))
        .route(&state.reset_password_path, get(account::reset_password))
        .route("/authentication/verify", get(account::verify))
        .route(&state.dashboard_path, get(dashboard::dashboard))
        .route(&state.logout_path, post(sign_out::sign_out))
        .fallback(not_found::not_found)
        .with_state(state)
}
