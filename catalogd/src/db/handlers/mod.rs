//! Repository implementations for database access.
//!
//! Each repository wraps a SQLx connection or transaction, owns the SQL for
//! one table, and returns typed records from [`crate::db::models`]. The
//! soft-deletable catalog entities ([`Categories`], [`Items`]) implement the
//! [`Repository`] trait; [`Orders`] and [`ItemCategories`] expose only the
//! operations their tables support.
//!
//! Reads and updates are soft-delete aware: a row with `deleted = true` is
//! indistinguishable from an absent row to every caller. The one deliberate
//! exception is `soft_delete` itself, which matches by id alone - see the
//! module docs on [`categories`].

pub mod categories;
pub mod existence;
pub mod item_categories;
pub mod items;
pub mod orders;
pub mod repository;

pub use categories::Categories;
pub use existence::{TableName, get_active_row};
pub use item_categories::ItemCategories;
pub use items::Items;
pub use orders::Orders;
pub use repository::Repository;
