//! Signup page

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use crate::components::RegistrationForm;
use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

/// GET /authentication/signup
pub async fn signup(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    let login = config.login_path.clone();

    public_page(config, &viewer, "Sign up", move || {
        view! {
            <h1>"Create your account"</h1>
            <RegistrationForm login_path=login/>
        }
    })
}
