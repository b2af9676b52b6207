use crate::db::errors::DbError;
use crate::db::handlers::existence::InvalidTableName;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// Invalid request data or business rule violation
    #[error("{message}")]
    Validation { message: String },

    /// Delete target does not exist at all
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Existence check found no active row for the referenced table/id
    #[error("No Active {table} found at ID: {id}")]
    ActiveRowNotFound { table: &'static str, id: i64 },

    /// Read/update target is missing or soft-deleted
    #[error("Active {entity} with ID {id} not found")]
    ActiveEntityNotFound { entity: &'static str, id: i64 },

    /// An insert unexpectedly returned no row
    #[error("Failed to create {entity}")]
    InsertFailed { entity: &'static str },

    /// Database operation error
    #[error(transparent)]
    Database(#[from] DbError),

    /// Unexpected error with full context chain
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation { message: message.into() }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation { .. } => StatusCode::BAD_REQUEST,
            Error::NotFound { .. } | Error::ActiveRowNotFound { .. } | Error::ActiveEntityNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            Error::InsertFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Database(DbError::NotFound) => StatusCode::NOT_FOUND,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns a user-safe error message, without leaking internal implementation details
    pub fn user_message(&self) -> String {
        match self {
            Error::Validation { message } => message.clone(),
            Error::NotFound { .. }
            | Error::ActiveRowNotFound { .. }
            | Error::ActiveEntityNotFound { .. }
            | Error::InsertFailed { .. } => self.to_string(),
            Error::Database(DbError::NotFound) => "Resource not found".to_string(),
            Error::Database(_) => "Database error".to_string(),
            Error::Other(_) => "Internal server error".to_string(),
        }
    }
}

/// The single place HTTP status codes are decided. Handlers propagate typed
/// errors with `?`; everything converges here.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Log full error details - different log levels based on severity
        match &self {
            Error::Database(DbError::NotFound) => {
                tracing::warn!("Database row not found: {}", self);
            }
            Error::Database(_) | Error::Other(_) => {
                tracing::error!("Internal service error: {:#}", self);
            }
            Error::InsertFailed { .. } => {
                tracing::error!("Insert returned no row: {}", self);
            }
            Error::Validation { .. } => {
                tracing::warn!("Validation error: {}", self);
            }
            Error::NotFound { .. } | Error::ActiveRowNotFound { .. } | Error::ActiveEntityNotFound { .. } => {
                tracing::warn!("Resource not found: {}", self);
            }
        }

        let status = self.status_code();
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

impl From<InvalidTableName> for Error {
    fn from(err: InvalidTableName) -> Self {
        Error::Validation { message: err.to_string() }
    }
}

/// Type alias for service operation results
pub type Result<T> = std::result::Result<T, Error>;
