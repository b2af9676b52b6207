//! Database layer for data persistence and access.
//!
//! This module implements the data access layer using SQLx with PostgreSQL,
//! following the repository pattern: one repository struct per table, each
//! wrapping a `&mut PgConnection` supplied by the caller. The pool itself is
//! owned by [`crate::AppState`] and injected per request - there is no global
//! connection state.
//!
//! # Modules
//!
//! - [`handlers`]: repository implementations and the active-row existence check
//! - [`models`]: typed record structs matching query column lists
//! - [`errors`]: database-specific error type and sqlx categorization

pub mod errors;
pub mod handlers;
pub mod models;
