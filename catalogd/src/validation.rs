//! Request payload and identifier validation.
//!
//! Everything here is pure and synchronous: requests fail fast before any
//! pooled connection is acquired, and each rule is unit-testable without a
//! database. Payloads are inspected at the `serde_json::Value` level so every
//! failure cause gets its own message instead of a generic deserialization
//! error.

use crate::api::models::{categories::CategoryCreate, items::ItemCreate};
use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::Value;

/// Parse and validate a category request body.
pub fn category_payload(body: &str) -> Result<CategoryCreate> {
    let value = parse_body(body)?;
    let name = require_name(&value)?;

    Ok(CategoryCreate { name })
}

/// Parse and validate an item request body.
///
/// `description` is optional; `null` and absent both map to `None`.
pub fn item_payload(body: &str) -> Result<ItemCreate> {
    let value = parse_body(body)?;
    let name = require_name(&value)?;
    let price = require_price(&value)?;
    let description = match value.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(Error::validation("Description must be of type string")),
    };

    Ok(ItemCreate { name, price, description })
}

/// Extract and validate the `id` path parameter.
pub fn path_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return Err(Error::validation("Invalid or missing path ID"));
    }

    raw.parse::<i64>().map_err(|_| Error::validation("ID must be an integer"))
}

/// Extract and validate the `itemID` query string parameter.
pub fn item_id_query(raw: Option<&str>) -> Result<i64> {
    let raw = raw.unwrap_or("");
    if raw.is_empty() {
        return Err(Error::validation(
            "Invalid or missing ID in path. Must use query string parameter labeled itemID",
        ));
    }

    raw.parse::<i64>().map_err(|_| Error::validation("ID must be an integer"))
}

fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Err(Error::validation("Request body is required"));
    }

    serde_json::from_str(body).map_err(|_| Error::validation("Invalid JSON format"))
}

fn require_name(value: &Value) -> Result<String> {
    let name = match value.get("name") {
        Some(Value::String(s)) => s,
        _ => return Err(Error::validation("Name field is required and must be of type string")),
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(Error::validation("Name field must not be empty"));
    }

    Ok(name.to_string())
}

fn require_price(value: &Value) -> Result<Decimal> {
    let raw = match value.get("price") {
        None | Some(Value::Null) => return Err(Error::validation("Price is required")),
        Some(v) => v,
    };

    let price = match raw.as_f64() {
        Some(p) => p,
        None => return Err(Error::validation("Price must be a number")),
    };

    // More than two significant fractional digits: the value differs from
    // itself rounded to two decimal places.
    let rounded = (price * 100.0).round() / 100.0;
    if price != rounded {
        return Err(Error::validation("Price has to be to two decimal points"));
    }

    if price < 0.0 {
        return Err(Error::validation("Price cannot be negative"));
    }

    Decimal::from_f64(price)
        .map(|d| d.round_dp(2))
        .ok_or_else(|| Error::validation("Price must be a number"))
}
