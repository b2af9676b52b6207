//! HTTP handlers for category endpoints.

use crate::AppState;
use crate::api::models::categories::{CategoryCreate, CategoryResponse, CategoryUpdateResponse};
use crate::db::handlers::{Categories, Repository};
use crate::db::models::categories::{CategoryCreateDBRequest, CategoryUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::validation;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    summary = "Create category",
    request_body = CategoryCreate,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_category(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<CategoryResponse>)> {
    let payload = validation::category_payload(&body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Categories::new(&mut conn);
    let request = CategoryCreateDBRequest { name: payload.name };

    let category = repo
        .create(&request)
        .await?
        .ok_or(Error::InsertFailed { entity: "category" })?;

    tracing::info!(category_id = category.id, "Created category");
    Ok((StatusCode::CREATED, Json(CategoryResponse::from(category))))
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    summary = "List categories",
    responses(
        (status = 200, description = "Active categories, newest first", body = Vec<CategoryResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<CategoryResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Categories::new(&mut conn);

    let categories = repo.list().await?;

    Ok(Json(categories.into_iter().map(CategoryResponse::from).collect()))
}

#[utoipa::path(
    patch,
    path = "/categories/{id}",
    tag = "categories",
    summary = "Rename category",
    request_body = CategoryCreate,
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category updated", body = CategoryUpdateResponse),
        (status = 400, description = "Invalid id or request body"),
        (status = 404, description = "Category missing or soft-deleted"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: String,
) -> Result<Json<CategoryUpdateResponse>> {
    let category_id = validation::path_id(Some(&raw_id))?;
    let payload = validation::category_payload(&body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Categories::new(&mut conn);
    let request = CategoryUpdateDBRequest { name: payload.name };

    let category = repo
        .update(category_id, &request)
        .await?
        .ok_or(Error::ActiveEntityNotFound { entity: "Category", id: category_id })?;

    Ok(Json(CategoryUpdateResponse::from(category)))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "categories",
    summary = "Delete category",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category soft-deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Category does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_category(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<StatusCode> {
    let category_id = validation::path_id(Some(&raw_id))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Categories::new(&mut conn);

    repo.soft_delete(category_id)
        .await?
        .ok_or(Error::NotFound { resource: "Category", id: category_id })?;

    tracing::info!(category_id, "Soft-deleted category");
    Ok(StatusCode::NO_CONTENT)
}
