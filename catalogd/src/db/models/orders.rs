//! Database records for the orders table.

use crate::types::OrderId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Row returned by the order create statement. `status` and `total` take
/// their schema defaults ('pending', 0).
#[derive(Debug, Clone, FromRow)]
pub struct OrderRecord {
    pub id: OrderId,
    pub status: String,
    pub total: Decimal,
    pub created_at: NaiveDateTime,
}
