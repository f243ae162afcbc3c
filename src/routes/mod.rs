//! CRUD route handlers for organizations, items and pricing rules

pub mod items;
pub mod organizations;
pub mod pricing_rules;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::AppState;

/// Router for the CRUD surface
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/organization",
            get(organizations::list)
                .post(organizations::create)
                .put(organizations::update),
        )
        .route("/organization/:name", get(organizations::by_name))
        .route("/item", get(items::list).post(items::create).put(items::update))
        .route("/item/:id", get(items::by_id))
        .route(
            "/pricing",
            get(pricing_rules::list).post(pricing_rules::create),
        )
        // GET takes an organization id, PUT a pricing rule id
        .route(
            "/pricing/:id",
            get(pricing_rules::by_organization).put(pricing_rules::update),
        )
        .with_state(state)
}

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn saved(message: &str, id_field: &str, id: i32) -> Json<Value> {
    let mut body = serde_json::Map::new();
    body.insert("message".to_string(), json!(message));
    body.insert(id_field.to_string(), json!(id));
    Json(Value::Object(body))
}

fn updated() -> Json<Value> {
    Json(json!({ "message": "Successfully updated" }))
}

/// Trimmed, non-empty value of an optional parameter
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_id(field: &str, raw: &str) -> Result<i32, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("{} '{}' is not a valid integer", field, raw)))
}

/// Map a unique violation raised by a concurrent write to a conflict
fn conflict_on_unique(err: AppError, message: impl Into<String>) -> AppError {
    match err {
        AppError::Database(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            AppError::Conflict(message.into())
        }
        other => other,
    }
}
