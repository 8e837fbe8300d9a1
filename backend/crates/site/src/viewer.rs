//! Viewer extractor
//!
//! What the gate learned about the visitor, read back from request
//! extensions. Without the gate in front every visitor is anonymous.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gate::{Session, SessionStatus};

#[derive(Debug, Clone, Default)]
pub struct Viewer {
    pub authenticated: bool,
    pub session: Option<Session>,
}

impl Viewer {
    pub fn email(&self) -> Option<&str> {
        self.session.as_ref().and_then(|s| s.email.as_deref())
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let authenticated = parts
            .extensions
            .get::<SessionStatus>()
            .is_some_and(|s| s.is_authenticated);
        let session = parts.extensions.get::<Session>().cloned();

        Ok(Self {
            authenticated,
            session,
        })
    }
}
