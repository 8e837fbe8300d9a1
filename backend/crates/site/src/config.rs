//! Site Configuration

use platform::cookie::CookieConfig;

/// Navigation targets and the session cookie the site clears on sign-out
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub brand_name: String,
    pub home_path: String,
    pub login_path: String,
    pub signup_path: String,
    pub reset_password_path: String,
    pub dashboard_path: String,
    pub logout_path: String,
    /// Must match the cookie the auth provider's client sets
    pub session_cookie: CookieConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "Northwind".to_string(),
            home_path: "/".to_string(),
            login_path: "/authentication/login".to_string(),
            signup_path: "/authentication/signup".to_string(),
            reset_password_path: "/authentication/reset-password".to_string(),
            dashboard_path: "/dashboard".to_string(),
            logout_path: "/authentication/logout".to_string(),
            session_cookie: CookieConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        let mut config = Self::default();
        config.session_cookie.secure = false;
        config
    }
}
