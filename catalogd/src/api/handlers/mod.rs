//! HTTP request handlers for all API endpoints.
//!
//! Each handler follows the same flow: validate the raw request surface via
//! [`crate::validation`] (fail fast, before any connection is acquired),
//! acquire a pooled connection or transaction from [`crate::AppState`], run
//! the repository operation, and map an absent row to the appropriate typed
//! not-found error. No handler decides a status code - that happens once, in
//! [`crate::errors::Error`]'s `IntoResponse`.
//!
//! # Handler Modules
//!
//! - [`categories`]: category CRUD
//! - [`items`]: item CRUD
//! - [`item_categories`]: item-category linking and per-category item listing
//! - [`orders`]: order creation

pub mod categories;
pub mod item_categories;
pub mod items;
pub mod orders;
