//! End-to-end API tests: full router against a real database.
//!
//! Each test gets its own `#[sqlx::test]` pool and drives the HTTP surface
//! through `axum_test::TestServer`, asserting the exact status codes and
//! error bodies of the public contract.

use crate::config::{Config, DatabaseConfig};
use crate::{Application, api::models::categories::CategoryResponse, api::models::items::ItemResponse};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database: DatabaseConfig {
            url: String::new(), // unused; the pool is injected
            max_connections: 1,
            min_connections: 1,
        },
    }
}

async fn test_server(pool: PgPool) -> TestServer {
    Application::new_with_pool(test_config(), pool)
        .await
        .expect("Failed to create application")
        .into_test_server()
}

#[sqlx::test]
#[test_log::test]
async fn test_create_category_returns_201_with_created_fields(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.post("/categories").json(&json!({"name": "Drinks"})).await;
    assert_eq!(response.status_code(), 201);

    let category: CategoryResponse = response.json();
    assert_eq!(category.name, "Drinks");
    assert!(category.id >= 1);

    // Timestamp serializes in ISO-8601 extended format.
    let raw: Value = response.json();
    let created_at = raw["created_at"].as_str().expect("created_at should be a string");
    assert!(created_at.contains('T'), "unexpected timestamp format: {created_at}");
}

#[sqlx::test]
#[test_log::test]
async fn test_create_category_trims_the_name(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.post("/categories").json(&json!({"name": "  Drinks  "})).await;
    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<Value>()["name"], json!("Drinks"));
}

#[sqlx::test]
#[test_log::test]
async fn test_create_category_rejects_each_malformed_body_with_its_own_message(pool: PgPool) {
    let server = test_server(pool).await;

    let cases: &[(&str, &str)] = &[
        ("", "Request body is required"),
        ("{not json", "Invalid JSON format"),
        (r#"{}"#, "Name field is required and must be of type string"),
        (r#"{"name": 42}"#, "Name field is required and must be of type string"),
        (r#"{"name": ""}"#, "Name field must not be empty"),
        (r#"{"name": "   "}"#, "Name field must not be empty"),
    ];

    for (body, expected) in cases {
        let response = server.post("/categories").text(*body).await;
        assert_eq!(response.status_code(), 400, "body: {body:?}");
        assert_eq!(response.json::<Value>(), json!({"error": expected}), "body: {body:?}");
    }
}

#[sqlx::test]
#[test_log::test]
async fn test_list_categories_returns_only_active_rows(pool: PgPool) {
    let server = test_server(pool).await;

    server.post("/categories").json(&json!({"name": "Drinks"})).await;
    let doomed: CategoryResponse = server
        .post("/categories")
        .json(&json!({"name": "Old menu"}))
        .await
        .json();
    server.delete(&format!("/categories/{}", doomed.id)).await;

    let response = server.get("/categories").await;
    assert_eq!(response.status_code(), 200);
    let categories: Vec<CategoryResponse> = response.json();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].name, "Drinks");
}

#[sqlx::test]
#[test_log::test]
async fn test_update_category_renames_and_returns_id_and_name_only(pool: PgPool) {
    let server = test_server(pool).await;

    let created: CategoryResponse = server.post("/categories").json(&json!({"name": "Drniks"})).await.json();

    let response = server
        .patch(&format!("/categories/{}", created.id))
        .json(&json!({"name": "Drinks"}))
        .await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>(), json!({"id": created.id, "name": "Drinks"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_update_rejects_empty_name_with_the_documented_message(pool: PgPool) {
    let server = test_server(pool).await;

    let created: CategoryResponse = server.post("/categories").json(&json!({"name": "Drinks"})).await.json();

    let response = server
        .patch(&format!("/categories/{}", created.id))
        .json(&json!({"name": ""}))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": "Name field must not be empty"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_update_never_resurrects_a_soft_deleted_category(pool: PgPool) {
    let server = test_server(pool.clone()).await;

    let created: CategoryResponse = server.post("/categories").json(&json!({"name": "Seasonal"})).await.json();
    assert_eq!(server.delete(&format!("/categories/{}", created.id)).await.status_code(), 204);

    let response = server
        .patch(&format!("/categories/{}", created.id))
        .json(&json!({"name": "Changed"}))
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": format!("Active Category with ID {} not found", created.id)})
    );

    // The stored row is untouched.
    let name: String = sqlx::query_scalar("SELECT name FROM categories WHERE id = $1")
        .bind(created.id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(name, "Seasonal");
}

#[sqlx::test]
#[test_log::test]
async fn test_delete_missing_category_returns_404(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.delete("/categories/999").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>(), json!({"error": "Category with ID 999 not found"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_delete_category_twice_succeeds(pool: PgPool) {
    let server = test_server(pool).await;

    let created: CategoryResponse = server.post("/categories").json(&json!({"name": "Drinks"})).await.json();

    assert_eq!(server.delete(&format!("/categories/{}", created.id)).await.status_code(), 204);
    // Delete matches by id alone: re-deleting an already-deleted row succeeds.
    assert_eq!(server.delete(&format!("/categories/{}", created.id)).await.status_code(), 204);
}

#[sqlx::test]
#[test_log::test]
async fn test_item_lifecycle_create_get_replace_delete(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server
        .post("/items")
        .json(&json!({"name": "Cola", "price": 2.5, "description": "330ml can"}))
        .await;
    assert_eq!(response.status_code(), 201);
    let item: ItemResponse = response.json();
    let raw: Value = response.json();
    // Prices serialize as plain numbers.
    assert_eq!(raw["price"], json!(2.5));

    let fetched = server.get(&format!("/items/{}", item.id)).await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(fetched.json::<Value>()["description"], json!("330ml can"));

    // Full replace: description omitted means description gone.
    let updated = server
        .put(&format!("/items/{}", item.id))
        .json(&json!({"name": "Diet Cola", "price": 2.75}))
        .await;
    assert_eq!(updated.status_code(), 200);
    assert_eq!(
        updated.json::<Value>(),
        json!({"id": item.id, "name": "Diet Cola", "price": 2.75, "description": null})
    );

    assert_eq!(server.delete(&format!("/items/{}", item.id)).await.status_code(), 204);

    let gone = server.get(&format!("/items/{}", item.id)).await;
    assert_eq!(gone.status_code(), 404);
    assert_eq!(
        gone.json::<Value>(),
        json!({"error": format!("Active Item with ID {} not found", item.id)})
    );
}

#[sqlx::test]
#[test_log::test]
async fn test_item_price_rules_reject_with_specific_messages(pool: PgPool) {
    let server = test_server(pool).await;

    let cases: &[(Value, &str)] = &[
        (json!({"name": "Cola"}), "Price is required"),
        (json!({"name": "Cola", "price": "2.50"}), "Price must be a number"),
        (json!({"name": "Cola", "price": 2.505}), "Price has to be to two decimal points"),
        (json!({"name": "Cola", "price": -1}), "Price cannot be negative"),
    ];

    for (body, expected) in cases {
        let response = server.post("/items").json(body).await;
        assert_eq!(response.status_code(), 400, "body: {body}");
        assert_eq!(response.json::<Value>(), json!({"error": expected}), "body: {body}");
    }

    // Boundary: exactly two decimal places and zero are both fine.
    for body in [json!({"name": "Cola", "price": 19.99}), json!({"name": "Water", "price": 0})] {
        let response = server.post("/items").json(&body).await;
        assert_eq!(response.status_code(), 201, "body: {body}");
    }
}

#[sqlx::test]
#[test_log::test]
async fn test_non_integer_path_id_returns_400(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.get("/items/twelve").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>(), json!({"error": "ID must be an integer"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_add_item_to_category_happy_path_and_duplicate(pool: PgPool) {
    let server = test_server(pool).await;

    let category: CategoryResponse = server.post("/categories").json(&json!({"name": "Drinks"})).await.json();
    let item: ItemResponse = server
        .post("/items")
        .json(&json!({"name": "Cola", "price": 2.5}))
        .await
        .json();

    let response = server
        .post(&format!("/categories/{}/items", category.id))
        .add_query_param("itemID", item.id)
        .await;
    assert_eq!(response.status_code(), 201);
    assert_eq!(
        response.json::<Value>(),
        json!({"message": format!("Successfully added Item at ID {} to Category at ID {}", item.id, category.id)})
    );

    // Second attempt: client error naming both ids, and the table retains
    // exactly one row for the pair.
    let duplicate = server
        .post(&format!("/categories/{}/items", category.id))
        .add_query_param("itemID", item.id)
        .await;
    assert_eq!(duplicate.status_code(), 400);
    assert_eq!(
        duplicate.json::<Value>(),
        json!({"error": format!("Item at ID {} is already added to Category with ID {}", item.id, category.id)})
    );
}

#[sqlx::test]
#[test_log::test]
async fn test_association_error_names_the_item_when_both_ids_are_unknown(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.post("/categories/999/items").add_query_param("itemID", 888).await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>(), json!({"error": "No Active items found at ID: 888"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_association_requires_the_item_id_query_parameter(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.post("/categories/1/items").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(
        response.json::<Value>(),
        json!({"error": "Invalid or missing ID in path. Must use query string parameter labeled itemID"})
    );
}

#[sqlx::test]
#[test_log::test]
async fn test_get_items_by_category_lists_active_items_by_name(pool: PgPool) {
    let server = test_server(pool).await;

    let category: CategoryResponse = server.post("/categories").json(&json!({"name": "Drinks"})).await.json();
    let cola: ItemResponse = server.post("/items").json(&json!({"name": "Cola", "price": 2.5})).await.json();
    let ale: ItemResponse = server.post("/items").json(&json!({"name": "Ale", "price": 4.0})).await.json();

    for item_id in [cola.id, ale.id] {
        server
            .post(&format!("/categories/{}/items", category.id))
            .add_query_param("itemID", item_id)
            .await;
    }
    server.delete(&format!("/items/{}", cola.id)).await;

    let response = server.get(&format!("/categories/{}/items", category.id)).await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(
        response.json::<Value>(),
        json!([{"id": ale.id, "name": "Ale", "price": 4.0}])
    );
}

#[sqlx::test]
#[test_log::test]
async fn test_get_items_by_unknown_category_returns_404(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server.get("/categories/424242/items").await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>(), json!({"error": "No Active categories found at ID: 424242"}));
}

#[sqlx::test]
#[test_log::test]
async fn test_create_order_ignores_any_body_and_applies_defaults(pool: PgPool) {
    let server = test_server(pool).await;

    let response = server
        .post("/orders")
        .json(&json!({"total": 999, "status": "shipped", "junk": true}))
        .await;
    assert_eq!(response.status_code(), 201);

    let order: Value = response.json();
    assert_eq!(order["status"], json!("pending"));
    assert_eq!(order["total"], json!(0.0));
    assert!(order["id"].is_i64());
    assert!(order["created_at"].is_string());
}
