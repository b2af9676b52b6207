//! Database repository for item-category associations.

use crate::db::{errors::Result, models::item_categories::CategoryItemRecord};
use sqlx::PgConnection;
use tracing::instrument;

pub struct ItemCategories<'c> {
    db: &'c mut PgConnection,
}

impl<'c> ItemCategories<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Link an item to a category.
    ///
    /// The `(item_id, category_id)` uniqueness constraint surfaces as
    /// [`DbError::UniqueViolation`](crate::db::errors::DbError::UniqueViolation);
    /// the caller re-signals it as a client error.
    #[instrument(skip(self), err)]
    pub async fn link(&mut self, item_id: i64, category_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO item_categories (item_id, category_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(item_id)
        .bind(category_id)
        .execute(&mut *self.db)
        .await?;

        Ok(())
    }

    /// Active items linked to the category, ordered by item name.
    #[instrument(skip(self), err)]
    pub async fn items_for_category(&mut self, category_id: i64) -> Result<Vec<CategoryItemRecord>> {
        let items = sqlx::query_as::<_, CategoryItemRecord>(
            r#"
            SELECT items.id, items.name, items.price
            FROM item_categories
            INNER JOIN items ON item_categories.item_id = items.id
            WHERE item_categories.category_id = $1 AND items.deleted = false
            ORDER BY items.name
            "#,
        )
        .bind(category_id)
        .fetch_all(&mut *self.db)
        .await?;

        Ok(items)
    }
}
