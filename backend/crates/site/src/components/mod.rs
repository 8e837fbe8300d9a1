//! UI components
//!
//! Leptos components rendered on the server. Navigation is plain links and
//! forms.

pub mod dashboard_header;
pub mod header;
pub mod loading;
pub mod registration_form;

pub use dashboard_header::DashboardHeader;
pub use header::Header;
pub use loading::Loading;
pub use registration_form::RegistrationForm;
