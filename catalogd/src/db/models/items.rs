//! Database records for the items table.

use crate::types::ItemId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Full item row as returned by create, read, and list statements.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Row returned by the item update statement (no `created_at`).
#[derive(Debug, Clone, FromRow)]
pub struct ItemUpdateRecord {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Insert parameters for a new item.
#[derive(Debug, Clone)]
pub struct ItemCreateDBRequest {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Full-replace update parameters for an item. Every column is resupplied;
/// there is no partial patch.
#[derive(Debug, Clone)]
pub struct ItemUpdateDBRequest {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}
