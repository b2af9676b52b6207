//! Database repository for categories.
//!
//! Soft-delete policy: `update` refuses to touch a deleted row (the
//! `deleted = false` predicate), while `soft_delete` matches by id alone, so
//! re-deleting an already-deleted category succeeds. The same policy applies
//! to [`crate::db::handlers::Items`].

use crate::db::{
    errors::Result,
    handlers::repository::Repository,
    models::categories::{CategoryCreateDBRequest, CategoryRecord, CategoryUpdateDBRequest, CategoryUpdateRecord},
};
use sqlx::PgConnection;
use tracing::instrument;

pub struct Categories<'c> {
    db: &'c mut PgConnection,
}

impl<'c> Categories<'c> {
    pub fn new(db: &'c mut PgConnection) -> Self {
        Self { db }
    }
}

#[async_trait::async_trait]
impl<'c> Repository for Categories<'c> {
    type CreateRequest = CategoryCreateDBRequest;
    type UpdateRequest = CategoryUpdateDBRequest;
    type Record = CategoryRecord;
    type UpdateRecord = CategoryUpdateRecord;

    #[instrument(skip(self, request), fields(name = %request.name), err)]
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Option<CategoryRecord>> {
        let category = sqlx::query_as::<_, CategoryRecord>(
            r#"
            INSERT INTO categories (name)
            VALUES ($1)
            RETURNING id, name, created_at
            "#,
        )
        .bind(&request.name)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self), err)]
    async fn list(&mut self) -> Result<Vec<CategoryRecord>> {
        let categories = sqlx::query_as::<_, CategoryRecord>(
            r#"
            SELECT id, name, created_at FROM categories
            WHERE deleted = false
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *self.db)
        .await?;

        Ok(categories)
    }

    #[instrument(skip(self, request), fields(category_id = id), err)]
    async fn update(&mut self, id: i64, request: &Self::UpdateRequest) -> Result<Option<CategoryUpdateRecord>> {
        let category = sqlx::query_as::<_, CategoryUpdateRecord>(
            r#"
            UPDATE categories
            SET name = $1
            WHERE id = $2 AND deleted = false
            RETURNING id, name
            "#,
        )
        .bind(&request.name)
        .bind(id)
        .fetch_optional(&mut *self.db)
        .await?;

        Ok(category)
    }

    #[instrument(skip(self), fields(category_id = id), err)]
    async fn soft_delete(&mut self, id: i64) -> Result<Option<i64>> {
        let deleted = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE categories
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
