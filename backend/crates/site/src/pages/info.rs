//! Public information pages

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use crate::pages::public_page;
use crate::router::SiteState;
use crate::viewer::Viewer;

/// GET /about
pub async fn about(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    public_page(config, &viewer, "About us", || {
        view! {
            <h1>"About us"</h1>
            <p>"We are a small team building tools for teams like yours."</p>
        }
    })
}

/// GET /services
pub async fn services(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    public_page(config, &viewer, "Services", || {
        view! {
            <h1>"Services"</h1>
            <ul class="services">
                <li>"Project workspaces"</li>
                <li>"Document sharing"</li>
                <li>"Team scheduling"</li>
            </ul>
        }
    })
}

/// GET /contact
pub async fn contact(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    public_page(config, &viewer, "Contact", || {
        view! {
            <h1>"Contact"</h1>
            <p>
                "Write to "
                <a href="mailto:hello@example.com">"hello@example.com"</a>
            </p>
        }
    })
}
