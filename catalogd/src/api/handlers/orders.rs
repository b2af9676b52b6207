//! HTTP handlers for order endpoints.

use crate::AppState;
use crate::api::models::orders::OrderResponse;
use crate::db::handlers::Orders;
use crate::errors::{Error, Result};
use axum::{Json, extract::State, http::StatusCode};

#[utoipa::path(
    post,
    path = "/orders",
    tag = "orders",
    summary = "Create order",
    responses(
        (status = 201, description = "Order created with default status and total", body = OrderResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[tracing::instrument(skip_all)]
pub async fn create_order(State(state): State<AppState>) -> Result<(StatusCode, Json<OrderResponse>)> {
    // No input: any request body is ignored and the row takes its schema
    // defaults.
    let mut conn = state.db.acquire().await.map_err(|e| Error::Database(e.into()))?;
    let mut repo = Orders::new(&mut conn);

    let order = repo.create().await?.ok_or(Error::InsertFailed { entity: "order" })?;

    tracing::info!(order_id = order.id, "Created order");
    Ok((StatusCode::CREATED, Json(OrderResponse::from(order))))
}
