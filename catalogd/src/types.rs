//! Shared identifier types.
//!
//! All catalog entities use 64-bit integer surrogate keys generated by the
//! database (`BIGSERIAL`).

/// Identifier for a category row.
pub type CategoryId = i64;

/// Identifier for an item row.
pub type ItemId = i64;

/// Identifier for an order row.
pub type OrderId = i64;
