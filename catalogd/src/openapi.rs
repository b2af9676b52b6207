//! OpenAPI documentation for the catalog API.
//!
//! Served by `utoipa-scalar` at `/docs` (see [`crate::build_router`]).

use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "catalogd",
        description = "Catalog and ordering REST API: categories, items, item-category associations, and orders"
    ),
    paths(
        api::handlers::categories::create_category,
        api::handlers::categories::list_categories,
        api::handlers::categories::update_category,
        api::handlers::categories::delete_category,
        api::handlers::items::create_item,
        api::handlers::items::list_items,
        api::handlers::items::get_item,
        api::handlers::items::update_item,
        api::handlers::items::delete_item,
        api::handlers::item_categories::add_item_to_category,
        api::handlers::item_categories::get_items_by_category,
        api::handlers::orders::create_order,
    ),
    tags(
        (name = "categories", description = "Category management"),
        (name = "items", description = "Item management"),
        (name = "item-categories", description = "Item-category associations"),
        (name = "orders", description = "Order creation")
    )
)]
pub struct ApiDoc;
