//! API request/response models for categories.

use crate::db::models::categories::{CategoryRecord, CategoryUpdateRecord};
use crate::types::CategoryId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for creating or renaming a category.
///
/// Produced by [`crate::validation::category_payload`], never deserialized
/// directly - the validation layer owns the per-cause error messages.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryCreate {
    /// Display name; leading/trailing whitespace is trimmed
    #[schema(example = "Drinks")]
    pub name: String,
}

/// Full category details returned by create and list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub name: String,
    /// Server-assigned creation time
    pub created_at: NaiveDateTime,
}

/// Category details returned by update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryUpdateResponse {
    pub id: CategoryId,
    pub name: String,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            created_at: record.created_at,
        }
    }
}

impl From<CategoryUpdateRecord> for CategoryUpdateResponse {
    fn from(record: CategoryUpdateRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
        }
    }
}
