//! Site (marketing pages, auth screens and dashboard)
//!
//! - `config` - Navigation targets and session cookie settings
//! - `layout` - Document shell and server-side rendering
//! - `components` - Leptos components: header, dashboard header, loading
//!   indicator, registration form
//! - `pages` - Route handlers
//! - `viewer` - Extractor for what the gate learned about the visitor
//!
//! Pages never check sessions themselves. Access control belongs to the
//! `gate` middleware wrapped around [`site_router`].

pub mod components;
pub mod config;
pub mod layout;
pub mod pages;
pub mod router;
pub mod viewer;

pub use config::SiteConfig;
pub use router::{SiteState, site_router};
pub use viewer::Viewer;

#[cfg(test)]
mod tests;
