//! Site header

use leptos::prelude::*;

use crate::router::SiteState;

/// Brand link to the home page and a login button.
///
/// Signed-in visitors get a dashboard link in place of the login button.
#[component]
pub fn Header(config: SiteState, authenticated: bool) -> impl IntoView {
    let action = if authenticated {
        view! { <a class="button" href=config.dashboard_path.clone()>"Dashboard"</a> }.into_any()
    } else {
        view! { <a class="button" href=config.login_path.clone()>"Log in"</a> }.into_any()
    };

    view! {
        <header class="site-header">
            <a class="brand" href=config.home_path.clone()>{config.brand_name.clone()}</a>
            <nav>
                <a href="/about">"About"</a>
                <a href="/services">"Services"</a>
                <a href="/contact">"Contact"</a>
            </nav>
            {action}
        </header>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::SiteConfig;
    use crate::layout::render;

    fn header_html(config: SiteConfig, authenticated: bool) -> String {
        let config = Arc::new(config);
        render(move || view! { <Header config=config authenticated=authenticated/> })
    }

    #[test]
    fn test_anonymous_header_links_to_login() {
        let html = header_html(SiteConfig::default(), false);
        assert!(html.contains(">Northwind</a>"));
        assert!(html.contains(r#"href="/authentication/login""#));
        assert!(html.contains(">Log in</a>"));
        assert!(!html.contains("Dashboard"));
    }

    #[test]
    fn test_signed_in_header_links_to_dashboard() {
        let html = header_html(SiteConfig::default(), true);
        assert!(html.contains(r#"href="/dashboard""#));
        assert!(html.contains(">Dashboard</a>"));
        assert!(!html.contains("Log in"));
    }

    #[test]
    fn test_brand_is_escaped() {
        let config = SiteConfig {
            brand_name: "A&B".to_string(),
            ..Default::default()
        };
        assert!(header_html(config, false).contains(">A&amp;B</a>"));
    }
}
