//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate holds the vocabulary every other crate agrees on:
//! - The unified [`error::app_error::AppError`]
//! - [`error::kind::ErrorKind`], the HTTP-facing error classification
//! - Problem-details rendering behind the `axum` feature
//!
//! Only things whose meaning is identical across the gate, the site and
//! the binary belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
