//! Base repository trait for database operations.

use crate::db::errors::Result;

/// Common operations shared by the soft-deletable catalog entities.
///
/// Separate associated types cover create requests, update requests, and the
/// records each statement returns. `update` and `soft_delete` return `None`
/// when no row matched; the not-found policy (and its HTTP mapping) stays
/// with the caller. `create` returns `None` only if the insert unexpectedly
/// produced no row.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The request type for updating entities
    type UpdateRequest;

    /// The record type returned by create and list
    type Record;

    /// The record type returned by update
    type UpdateRecord;

    /// Insert a new row, returning the stored record.
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Option<Self::Record>>;

    /// List active (non-deleted) rows, newest first.
    async fn list(&mut self) -> Result<Vec<Self::Record>>;

    /// Update an active row; `None` when the id is absent or soft-deleted.
    async fn update(&mut self, id: i64, request: &Self::UpdateRequest) -> Result<Option<Self::UpdateRecord>>;

    /// Mark a row deleted; `None` when the id does not exist.
    async fn soft_delete(&mut self, id: i64) -> Result<Option<i64>>;
}
