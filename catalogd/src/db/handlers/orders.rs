//! Database repository for orders.
//!
//! Orders are created with schema defaults only; there is no update, list, or
//! delete operation for them.

use crate::db::{errors::Result, models::orders::OrderRecord};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Orders<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Orders<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Insert an order taking every column default. Callers treat `None` as
    /// an insert failure.
    #[instrument(skip(self), err)]
    pub async fn create(&mut self) -> Result<Option<OrderRecord>> {
        let order = sqlx::query_as::<_, OrderRecord>(
            r#"
            INSERT INTO orders
            DEFAULT VALUES
            RETURNING id, status, total, created_at
            "#,
        )
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(order)
    }
}
