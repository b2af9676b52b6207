//! API request/response models for items.

use crate::db::models::items::{ItemRecord, ItemUpdateRecord};
use crate::types::ItemId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating an item, and for updating one - updates are a
/// full replace re-validated with the create rules.
///
/// Produced by [`crate::validation::item_payload`].
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemCreate {
    /// Display name; leading/trailing whitespace is trimmed
    #[schema(example = "Cola")]
    pub name: String,
    /// Non-negative price with at most two decimal places
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 2.5)]
    pub price: Decimal,
    /// Optional free-text description
    pub description: Option<String>,
}

/// Full item details returned by create, get, and list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub description: Option<String>,
    /// Server-assigned creation time
    pub created_at: NaiveDateTime,
}

/// Item details returned by update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemUpdateResponse {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub description: Option<String>,
}

impl From<ItemRecord> for ItemResponse {
    fn from(record: ItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

impl From<ItemUpdateRecord> for ItemUpdateResponse {
    fn from(record: ItemUpdateRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
            description: record.description,
        }
    }
}
