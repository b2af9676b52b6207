//! Database records for the categories table.

use crate::types::CategoryId;
use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Row returned by category create and list statements.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Row returned by the category update statement.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryUpdateRecord {
    pub id: CategoryId,
    pub name: String,
}

/// Insert parameters for a new category.
#[derive(Debug, Clone)]
pub struct CategoryCreateDBRequest {
    pub name: String,
}

/// Update parameters for renaming a category.
#[derive(Debug, Clone)]
pub struct CategoryUpdateDBRequest {
    pub name: String,
}
