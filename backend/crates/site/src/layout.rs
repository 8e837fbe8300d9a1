//! Document shell and server-side rendering

use leptos::prelude::*;

/// Full HTML document; `children` fill the body.
#[component]
pub fn Document(
    #[prop(into)] title: String,
    #[prop(into)] brand: String,
    children: Children,
) -> impl IntoView {
    let full_title = format!("{title} | {brand}");

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{full_title}</title>
                <link rel="icon" href="/favicon.ico"/>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body>{children()}</body>
        </html>
    }
}

/// Render a view to an HTML string under a fresh reactive owner.
pub fn render<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().to_html())
}
