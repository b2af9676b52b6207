//! API response models for orders.

use crate::db::models::orders::OrderRecord;
use crate::types::OrderId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order details returned by create. Status and total carry the schema
/// defaults ('pending', 0).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: OrderId,
    pub status: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub total: Decimal,
    /// Server-assigned creation time
    pub created_at: NaiveDateTime,
}

impl From<OrderRecord> for OrderResponse {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            total: record.total,
            created_at: record.created_at,
        }
    }
}
