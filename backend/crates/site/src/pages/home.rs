//! Landing page

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

/// GET /
pub async fn home(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    let (cta_href, cta_label) = if viewer.authenticated {
        (config.dashboard_path.clone(), "Go to your dashboard")
    } else {
        (config.signup_path.clone(), "Get started")
    };
    let tagline = format!(
        "{} keeps your projects, people and paperwork together.",
        config.brand_name
    );

    public_page(config, &viewer, "Home", move || {
        view! {
            <section class="hero">
                <h1>"Everything your team needs, in one place"</h1>
                <p>{tagline}</p>
                <a class="button" href=cta_href>{cta_label}</a>
            </section>
        }
    })
}
