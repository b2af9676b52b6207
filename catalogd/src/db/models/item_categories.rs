//! Database records for the item-category association table.

use crate::types::ItemId;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Item row projected through the association join (id, name, price only).
#[derive(Debug, Clone, FromRow)]
pub struct CategoryItemRecord {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
}
