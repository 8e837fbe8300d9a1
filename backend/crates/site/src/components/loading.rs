//! Loading placeholder

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="loading" role="status" aria-live="polite">
            <span class="spinner"></span>
            <span>{label}</span>
        </div>
    }
}
