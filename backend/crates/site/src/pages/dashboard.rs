//! Dashboard (protected)

use axum::extract::State;
use axum::response::Html;
use leptos::prelude::*;

use crate::components::{DashboardHeader, Loading};
use crate::layout::{Document, render};
use crate::router::SiteState;
use crate::viewer::Viewer;

/// GET /dashboard
pub async fn dashboard(State(config): State<SiteState>, viewer: Viewer) -> Html<String> {
    let email = viewer.email().map(str::to_string);
    let greeting = match &email {
        Some(email) => format!("Welcome back, {email}"),
        None => "Welcome back".to_string(),
    };
    let brand = config.brand_name.clone();

    Html(render(move || {
        view! {
            <Document title="Dashboard" brand=brand>
                <DashboardHeader config=config email=email/>
                <main>
                    <h1>{greeting}</h1>
                    <section id="activity">
                        <h2>"Recent activity"</h2>
                        <Loading label="Loading activity"/>
                    </section>
                </main>
            </Document>
        }
    }))
}
