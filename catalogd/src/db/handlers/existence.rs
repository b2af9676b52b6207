//! Active-row existence checks, shared by the association endpoints.

use crate::db::errors::Result;
use sqlx::PgConnection;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Allow-listed tables for [`get_active_row`].
///
/// Table identifiers cannot be bound as statement parameters, so the name is
/// interpolated into the query text. Restricting it to this fixed set keeps
/// the interpolation injection-safe; [`TableName::as_str`] is the only place
/// an identifier enters SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableName {
    Items,
    Categories,
    ItemCategories,
    Orders,
}

impl TableName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Items => "items",
            TableName::Categories => "categories",
            TableName::ItemCategories => "item_categories",
            TableName::Orders => "orders",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejected table name, reported before any query is attempted.
#[derive(Debug, thiserror::Error)]
#[error("Invalid table name: {0}")]
pub struct InvalidTableName(pub String);

impl FromStr for TableName {
    type Err = InvalidTableName;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "items" => Ok(TableName::Items),
            "categories" => Ok(TableName::Categories),
            "item_categories" => Ok(TableName::ItemCategories),
            "orders" => Ok(TableName::Orders),
            _ => Err(InvalidTableName(s.to_string())),
        }
    }
}

/// Look up an active (non-deleted) row in one of the allow-listed tables.
///
/// Returns the row id, or `None` when the id is absent or soft-deleted -
/// callers translate `None` into their own not-found error.
#[instrument(skip(conn), err)]
pub async fn get_active_row(conn: &mut PgConnection, table: TableName, id: i64) -> Result<Option<i64>> {
    let query = format!("SELECT id FROM {} WHERE id = $1 AND deleted = false", table.as_str());

    let row = sqlx::query_scalar::<_, i64>(&query)
        .bind(id)
        .fetch_optional(conn)
        .await?;

    Ok(row)
}
