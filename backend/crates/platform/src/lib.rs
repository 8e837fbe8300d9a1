//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no product meaning:
//! - Cookie parsing and `Set-Cookie` building
//! - Client IP extraction behind reverse proxies
//! - Environment variable parsing helpers
//! - Outbound HTTP client construction

pub mod client;
pub mod cookie;
pub mod env;
pub mod http_client;
