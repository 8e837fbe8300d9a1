//! Fallback page

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use leptos::prelude::*;

use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

pub async fn not_found(
    State(config): State<SiteState>,
    viewer: Viewer,
) -> (StatusCode, Html<String>) {
    let home = config.home_path.clone();

    let page = public_page(config, &viewer, "Not found", move || {
        view! {
            <h1>"Page not found"</h1>
            <p><a href=home>"Back to the home page"</a></p>
        }
    });

    (StatusCode::NOT_FOUND, page)
}
