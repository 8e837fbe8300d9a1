//! Sign-out

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use platform::cookie::delete_cookie_header;

use crate::router::SiteState;

/// POST /authentication/logout
///
/// Clears the session cookie and sends the visitor home.
pub async fn sign_out(State(config): State<SiteState>) -> impl IntoResponse {
    tracing::debug!(cookie = %config.session_cookie.name, "Clearing session cookie");

    (
        [(header::SET_COOKIE, delete_cookie_header(&config.session_cookie))],
        Redirect::to(&config.home_path),
    )
}
