//! Router tests for the site crate
//! Pages alone, and pages behind the gate with a cookie-driven resolver.

mod support {
    use axum::Router;
    use axum::body::Body;
    use axum::extract::Request;
    use axum::http::{HeaderMap, Method};
    use axum::response::Response;
    use gate::domain::SessionResolver;
    use gate::{GateConfig, GateResult, GateState, Session, gated};
    use platform::cookie::extract_cookie;
    use tower::ServiceExt;

    use crate::{SiteConfig, site_router};

    /// Accepts `access_token=valid`, rejects everything else
    #[derive(Debug, Clone, Default)]
    pub struct CookieResolver;

    impl SessionResolver for CookieResolver {
        async fn resolve(&self, headers: &HeaderMap) -> GateResult<Option<Session>> {
            Ok(match extract_cookie(headers, "access_token").as_deref() {
                Some("valid") => Some(
                    Session::new()
                        .with_user_id("user-1")
                        .with_email("ada@example.com"),
                ),
                _ => None,
            })
        }
    }

    pub fn gated_site() -> Router {
        gated(
            site_router(SiteConfig::default()),
            GateState::new(CookieResolver, GateConfig::default()),
        )
    }

    pub fn bare_site() -> Router {
        site_router(SiteConfig::default())
    }

    pub async fn send(app: Router, method: Method, uri: &str, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header("cookie", cookie);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
        send(app, Method::GET, uri, cookie).await
    }

    pub async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }
}

mod page_tests {
    use axum::http::{Method, StatusCode, header};

    use super::support::{bare_site, body_string, get, send};

    #[tokio::test]
    async fn test_public_pages_render() {
        for (uri, title) in [
            ("/", "<title>Home | Northwind</title>"),
            ("/about", "<title>About us | Northwind</title>"),
            ("/services", "<title>Services | Northwind</title>"),
            ("/contact", "<title>Contact | Northwind</title>"),
            ("/authentication/login", "<title>Log in | Northwind</title>"),
            ("/authentication/signup", "<title>Sign up | Northwind</title>"),
            (
                "/authentication/reset-password",
                "<title>Reset password | Northwind</title>",
            ),
            (
                "/authentication/verify",
                "<title>Verify email | Northwind</title>",
            ),
        ] {
            let response = get(bare_site(), uri, None).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert!(body_string(response).await.contains(title), "{uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_renders_html_404() {
        let response = get(bare_site(), "/no/such/page", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_login_form_carries_safe_redirect() {
        let response = get(bare_site(), "/authentication/login?redirect=%2Fdashboard%2Freports", None).await;
        let body = body_string(response).await;
        assert!(body.contains(r#"name="redirect" value="/dashboard/reports""#));
        assert!(body.contains(r#"href="/authentication/reset-password""#));
        assert!(body.contains(r#"href="/authentication/signup""#));
    }

    #[tokio::test]
    async fn test_login_drops_offsite_redirect() {
        let response = get(bare_site(), "/authentication/login?redirect=%2F%2Fevil.example", None).await;
        let body = body_string(response).await;
        assert!(body.contains(r#"name="redirect" value="/dashboard""#));
        assert!(!body.contains("evil.example"));
    }

    #[tokio::test]
    async fn test_sign_out_clears_cookie_and_goes_home() {
        let response = send(bare_site(), Method::POST, "/authentication/logout", None).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("access_token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn test_sign_out_rejects_get() {
        let response = get(bare_site(), "/authentication/logout", None).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}

mod gated_tests {
    use axum::http::{StatusCode, header};

    use super::support::{body_string, gated_site, get};

    const VALID: &str = "access_token=valid";

    #[tokio::test]
    async fn test_dashboard_redirects_anonymous_visitor() {
        let response = get(gated_site(), "/dashboard", None).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/authentication/login?redirect=%2Fdashboard"
        );
    }

    #[tokio::test]
    async fn test_rejected_token_is_anonymous() {
        let response = get(gated_site(), "/dashboard", Some("access_token=expired")).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    }

    #[tokio::test]
    async fn test_dashboard_greets_signed_in_visitor() {
        let response = get(gated_site(), "/dashboard", Some(VALID)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_string(response).await;
        assert!(body.contains("Welcome back, ada@example.com"));
        assert!(body.contains(r#"action="/authentication/logout""#));
        assert!(body.contains(r#"role="status""#));
    }

    #[tokio::test]
    async fn test_header_reflects_session_on_public_pages() {
        let anonymous = body_string(get(gated_site(), "/about", None).await).await;
        assert!(anonymous.contains(">Log in</a>"));

        let signed_in = body_string(get(gated_site(), "/about", Some(VALID)).await).await;
        assert!(signed_in.contains(">Dashboard</a>"));
    }

    #[tokio::test]
    async fn test_redirect_round_trips_through_login_page() {
        let redirect = get(gated_site(), "/dashboard", None).await;
        let location = redirect
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();

        let login = get(gated_site(), &location, None).await;
        assert_eq!(login.status(), StatusCode::OK);
        assert!(body_string(login).await.contains(r#"name="redirect" value="/dashboard""#));
    }

    #[tokio::test]
    async fn test_escaped_path_round_trips_unchanged() {
        let original = "/dashboard/files/a%3Fb%2520c";
        let redirect = get(gated_site(), original, None).await;
        let location = redirect
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert_eq!(
            location,
            "/authentication/login?redirect=%2Fdashboard%2Ffiles%2Fa%253Fb%252520c"
        );

        let login = body_string(get(gated_site(), &location, None).await).await;
        assert!(login.contains(r#"name="redirect" value="/dashboard/files/a%3Fb%2520c""#));
    }

    #[tokio::test]
    async fn test_unknown_path_is_protected() {
        let anonymous = get(gated_site(), "/settings", None).await;
        assert_eq!(anonymous.status(), StatusCode::TEMPORARY_REDIRECT);

        let signed_in = get(gated_site(), "/settings", Some(VALID)).await;
        assert_eq!(signed_in.status(), StatusCode::NOT_FOUND);
    }
}
