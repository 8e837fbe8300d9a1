//! Page handlers

use axum::response::Html;
use leptos::prelude::*;

use crate::components::Header;
use crate::layout::{Document, render};
use crate::router::SiteState;
use crate::viewer::Viewer;

pub mod account;
pub mod dashboard;
pub mod home;
pub mod info;
pub mod login;
pub mod not_found;
pub mod sign_out;
pub mod signup;

/// Document with the site header above `content`.
pub(crate) fn public_page<F, V>(
    config: SiteState,
    viewer: &Viewer,
    title: &str,
    content: F,
) -> Html<String>
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let brand = config.brand_name.clone();
    let title = title.to_string();
    let authenticated = viewer.authenticated;

    Html(render(move || {
        view! {
            <Document title=title brand=brand>
                <Header config=config authenticated=authenticated/>
                <main>{content()}</main>
            </Document>
        }
    }))
}
