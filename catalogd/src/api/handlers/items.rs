//! HTTP handlers for item endpoints.

use crate::AppState;
use crate::api::models::items::{ItemCreate, ItemResponse, ItemUpdateResponse};
use crate::db::handlers::{Items, Repository};
use crate::db::models::items::{ItemCreateDBRequest, ItemUpdateDBRequest};
use crate::errors::{Error, Result};
use crate::validation;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    summary = "Create item",
    request_body = ItemCreate,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Invalid request body"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_item(State(state): State<AppState>, body: String) -> Result<(StatusCode, Json<ItemResponse>)> {
    let payload = validation::item_payload(&body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Items::new(&mut conn);
    let request = ItemCreateDBRequest {
        name: payload.name,
        price: payload.price,
        description: payload.description,
    };

    let item = repo.create(&request).await?.ok_or(Error::InsertFailed { entity: "item" })?;

    tracing::info!(item_id = item.id, "Created item");
    Ok((StatusCode::CREATED, Json(ItemResponse::from(item))))
}

#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    summary = "List items",
    responses(
        (status = 200, description = "Active items, newest first", body = Vec<ItemResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<ItemResponse>>> {
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Items::new(&mut conn);

    let items = repo.list().await?;

    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "items",
    summary = "Get item",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item details", body = ItemResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item missing or soft-deleted"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_item(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<Json<ItemResponse>> {
    let item_id = validation::path_id(Some(&raw_id))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Items::new(&mut conn);

    let item = repo
        .get_by_id(item_id)
        .await?
        .ok_or(Error::ActiveEntityNotFound { entity: "Item", id: item_id })?;

    Ok(Json(ItemResponse::from(item)))
}

#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "items",
    summary = "Replace item",
    request_body = ItemCreate,
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item updated", body = ItemUpdateResponse),
        (status = 400, description = "Invalid id or request body"),
        (status = 404, description = "Item missing or soft-deleted"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: String,
) -> Result<Json<ItemUpdateResponse>> {
    let item_id = validation::path_id(Some(&raw_id))?;
    // Full replace: the payload is re-validated with the create rules.
    let payload = validation::item_payload(&body)?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Items::new(&mut conn);
    let request = ItemUpdateDBRequest {
        name: payload.name,
        price: payload.price,
        description: payload.description,
    };

    let item = repo
        .update(item_id, &request)
        .await?
        .ok_or(Error::ActiveEntityNotFound { entity: "Item", id: item_id })?;

    Ok(Json(ItemUpdateResponse::from(item)))
}

#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "items",
    summary = "Delete item",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item soft-deleted"),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Item does not exist"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn delete_item(State(state): State<AppState>, Path(raw_id): Path<String>) -> Result<StatusCode> {
    let item_id = validation::path_id(Some(&raw_id))?;

    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Items::new(&mut conn);

    repo.soft_delete(item_id)
        .await?
        .ok_or(Error::NotFound { resource: "Item", id: item_id })?;

    tracing::info!(item_id, "Soft-deleted item");
    Ok(StatusCode::NO_CONTENT)
}
