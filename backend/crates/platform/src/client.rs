//! Client identification utilities
//!
//! Used for log fields only; nothing in the gate trusts these values.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// First address in `X-Forwarded-For`, else the peer address.
///
/// Returns `None` when neither is available (e.g. in-process tests).
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|xff| xff.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}
