//! Login page
//!
//! The gate sends blocked visitors here with `?redirect=<path>`. The page
//! hands that path to the sign-in script through a hidden field, after
//! checking it cannot point off-site.

use axum::extract::{Query, State};
use axum::response::Html;
use gate::sanitize_return_path;
use leptos::prelude::*;
use serde::Deserialize;

use crate::config::SiteConfig;
use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

/// `redirect` arrives percent-decoded by the `Query` extractor.
#[derive(Debug, Default, Deserialize)]
pub struct LoginQuery {
    pub redirect: Option<String>,
}

/// Where to go after signing in.
pub fn return_path(config: &SiteConfig, requested: Option<&str>) -> String {
    match requested.and_then(sanitize_return_path) {
        Some(path) => path.to_string(),
        None => {
            if let Some(raw) = requested {
                tracing::debug!(requested = %raw, "Ignoring unsafe post-login redirect");
            }
            config.dashboard_path.clone()
        }
    }
}

/// GET /authentication/login
pub async fn login(
    State(config): State<SiteState>,
    viewer: Viewer,
    Query(query): Query<LoginQuery>,
) -> Html<String> {
    let next = return_path(&config, query.redirect.as_deref());
    let already_signed_in = viewer.authenticated.then(|| next.clone());
    let reset = config.reset_password_path.clone();
    let signup = config.signup_path.clone();

    public_page(config, &viewer, "Log in", move || {
        view! {
            <h1>"Log in"</h1>
            {already_signed_in.map(|href| {
                view! {
                    <p class="notice">
                        "You are already signed in. "
                        <a href=href>"Continue"</a>
                    </p>
                }
            })}
            <form class="login-form">
                <input type="hidden" name="redirect" value=next/>
                <label for="email">"Email"</label>
                <input id="email" name="email" type="email" autocomplete="email" required=true/>
                <label for="password">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    required=true
                />
                <button type="submit">"Log in"</button>
            </form>
            <p><a href=reset>"Forgot your password?"</a></p>
            <p>"New here? " <a href=signup>"Create an account"</a></p>
        }
    })
}
