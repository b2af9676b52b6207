//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers for all endpoints
//! - **[`models`]**: request/response data structures for API communication
//!
//! Handlers receive the raw request surface (body string, path parameters,
//! query string parameters), run it through [`crate::validation`], and call
//! the repositories in [`crate::db::handlers`]. Status-code policy lives in
//! one place only: [`crate::errors::Error`]'s `IntoResponse` impl.

pub mod handlers;
pub mod models;
