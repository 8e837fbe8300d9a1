//! Account recovery and verification pages

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

/// GET /authentication/reset-password
pub async fn reset_password(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    let login = config.login_path.clone();

    public_page(config, &viewer, "Reset password", move || {
        view! {
            <h1>"Reset your password"</h1>
            <form class="reset-password-form">
                <label for="email">"Email"</label>
                <input id="email" name="email" type="email" autocomplete="email" required=true/>
                <button type="submit">"Send reset link"</button>
            </form>
            <p><a href=login>"Back to log in"</a></p>
        }
    })
}

/// GET /authentication/verify
pub async fn verify(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    let login = config.login_path.clone();

    public_page(config, &viewer, "Verify email", move || {
        view! {
            <h1>"Check your inbox"</h1>
            <p>"We sent you a link to confirm your email address."</p>
            <p><a href=login>"Continue to log in"</a></p>
        }
    })
}
