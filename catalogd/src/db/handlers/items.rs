//! Database repository for items.
//!
//! Same soft-delete policy as [`crate::db::handlers::Categories`]; item
//! updates are a full replace - every column is resupplied.

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::items::{ItemCreateDBRequest, ItemRecord, ItemUpdateDBRequest, ItemUpdateRecord},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Items<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Items<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }

    /// Fetch an active item with all its columns.
    #[instrument(skip(self), fields(item_id = id), err)]
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<ItemRecord>> {
        let item = sqlx::query_as::<_, ItemRecord>(
            r#"
            SELECT id, name, price, description, created_at
            FROM items
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(item)
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Items<'c> {
    type CreateRequest = ItemCreateDBRequest;
    type UpdateRequest = ItemUpdateDBRequest;
    type Record = ItemRecord;
    type UpdateRecord = ItemUpdateRecord;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Option<ItemRecord>> {
        let item = sqlx::query_as::<_, ItemRecord>(
            r#"
            INSERT INTO items (name, price, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, price, description, created_at
            "#,
        )
        .bind(&request.name)
        .bind(request.price)
        .bind(&request.description)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<ItemRecord>> {
        let items = sqlx::query_as::<_, ItemRecord>(
            r#"
            SELECT id, name, price, description, created_at
            FROM items
            WHERE deleted = false
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(items)
    }

    #[instrument(skip(self, request), fields(item_id = id), err)]
    async fn update(&mut self, id: i64, request: &Self::UpdateRequest) -> Result<Option<ItemUpdateRecord>> {
        let item = sqlx::query_as::<_, ItemUpdateRecord>(
            r#"
            UPDATE items
            SET name = $1, price = $2, description = $3
            WHERE id = $4 AND deleted = false
            RETURNING id, name, price, description
            "#,
        )
        .bind(&request.name)
        .bind(request.price)
        .bind(&request.description)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(item)
    }

    #[instrument(skip(self), fields(item_id = id), err)]
    async fn soft_delete(&mut self, id: i64) -> Result<Option<i64>> {
        let deleted = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE items
            SET deleted = true
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(deleted)
    }
}
