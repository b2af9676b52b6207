//! API request/response models for item-category associations.

use crate::db::models::item_categories::CategoryItemRecord;
use crate::types::ItemId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for linking an item to a category.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemIdQuery {
    /// Item to link, passed as `itemID`
    #[serde(rename = "itemID")]
    pub item_id: Option<String>,
}

/// Confirmation returned when an item is linked to a category.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LinkResponse {
    pub message: String,
}

/// Item projection returned when listing a category's items.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryItemResponse {
    pub id: ItemId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64)]
    pub price: Decimal,
}

impl From<CategoryItemRecord> for CategoryItemResponse {
    fn from(record: CategoryItemRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
        }
    }
}
