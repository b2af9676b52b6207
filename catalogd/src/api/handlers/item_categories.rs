//! HTTP handlers for item-category association endpoints.
//!
//! Both handlers run their existence checks and statements on a single
//! transaction. A concurrent soft-delete between the check and the insert
//! surfaces as a constraint failure rather than silent corruption; that race
//! is tolerated by design of the schema, not retried here.

use crate::AppState;
use crate::api::models::item_categories::{CategoryItemResponse, ItemIdQuery, LinkResponse};
use crate::db::errors::DbError;
use crate::db::handlers::{ItemCategories, TableName, get_active_row};
use crate::errors::{Error, Result};
use crate::validation;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

#[utoipa::path(
    post,
    path = "/categories/{id}/items",
    tag = "item-categories",
    summary = "Add item to category",
    params(
        ("id" = i64, Path, description = "Category ID"),
        ItemIdQuery
    ),
    responses(
        (status = 201, description = "Item linked to category", body = LinkResponse),
        (status = 400, description = "Invalid ids or pair already linked"),
        (status = 404, description = "Item or category missing or soft-deleted"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn add_item_to_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<ItemIdQuery>,
) -> Result<(StatusCode, Json<LinkResponse>)> {
    let category_id = validation::path_id(Some(&raw_id))?;
    let item_id = validation::item_id_query(query.item_id.as_deref())?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    // Item existence is checked before category existence so that when both
    // ids are invalid the reported error names the item.
    if get_active_row(&mut tx, TableName::Items, item_id).await?.is_none() {
        return Err(Error::ActiveRowNotFound { table: TableName::Items.as_str(), id: item_id });
    }
    if get_active_row(&mut tx, TableName::Categories, category_id).await?.is_none() {
        return Err(Error::ActiveRowNotFound {
            table: TableName::Categories.as_str(),
            id: category_id,
        });
    }

    let mut repo = ItemCategories::new(&mut tx);
    match repo.link(item_id, category_id).await {
        Ok(()) => {}
        Err(DbError::UniqueViolation { .. }) => {
            return Err(Error::validation(format!(
                "Item at ID {item_id} is already added to Category with ID {category_id}"
            )));
        }
        Err(e) => return Err(e.into()),
    }

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    tracing::info!(item_id, category_id, "Linked item to category");
    Ok((
        StatusCode::CREATED,
        Json(LinkResponse {
            message: format!("Successfully added Item at ID {item_id} to Category at ID {category_id}"),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/items",
    tag = "item-categories",
    summary = "List a category's items",
    params(
        ("id" = i64, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Active items in the category, ordered by name", body = Vec<CategoryItemResponse>),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Category missing or soft-deleted"),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn get_items_by_category(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Vec<CategoryItemResponse>>> {
    let category_id = validation::path_id(Some(&raw_id))?;

    let mut tx = state.db.begin().await.map_err(|e| Error::Database(e.into()))?;

    if get_active_row(&mut tx, TableName::Categories, category_id).await?.is_none() {
        return Err(Error::ActiveRowNotFound {
            table: TableName::Categories.as_str(),
            id: category_id,
        });
    }

    let mut repo = ItemCategories::new(&mut tx);
    let items = repo.items_for_category(category_id).await?;

    tx.commit().await.map_err(|e| Error::Database(e.into()))?;

    Ok(Json(items.into_iter().map(CategoryItemResponse::from).collect()))
}
