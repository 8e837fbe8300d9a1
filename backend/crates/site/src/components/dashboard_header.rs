//! Dashboard header

use leptos::prelude::*;

use crate::router::SiteState;

/// Header for signed-in pages: home, dashboard, and a sign-out button.
#[component]
pub fn DashboardHeader(config: SiteState, email: Option<String>) -> impl IntoView {
    view! {
        <header class="dashboard-header">
            <a class="brand" href=config.home_path.clone()>{config.brand_name.clone()}</a>
            <a href=config.dashboard_path.clone()>"Dashboard"</a>
            {email.map(|email| view! { <span class="account">{email}</span> })}
            <form method="post" action=config.logout_path.clone()>
                <button type="submit">"Sign out"</button>
            </form>
        </header>
    }
}
