//! Item route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::ItemType;
use crate::AppState;

use super::{conflict_on_unique, non_blank, parse_id, saved, updated};

const ITEM_EXISTS_MESSAGE: &str = "Item with given type and description already exist.";

/// JSON body for item creation
#[derive(Debug, Default, Deserialize)]
pub struct CreateItemRequest {
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
}

/// Query parameters for item updates
#[derive(Debug, Default, Deserialize)]
pub struct UpdateItemParams {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub description: Option<String>,
}

fn parse_item_type(raw: &str) -> Result<ItemType> {
    raw.parse().map_err(|e: crate::models::ParseItemTypeError| {
        AppError::BadRequest(e.to_string())
    })
}

/// List all items
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let items = db::list_items(&state.db).await?;
    Ok(Json(json!({ "items": items })))
}

/// Item by id
pub async fn by_id(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Value>> {
    let id = parse_id("id", &id)?;
    let item = db::get_item(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("item with id {} does not exist", id)))?;
    Ok(Json(json!({ "item": [item] })))
}

/// Create an item from `{type, description}`
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateItemRequest>,
) -> Result<Json<Value>> {
    let (Some(item_type), Some(description)) = (
        non_blank(body.item_type.as_deref()),
        non_blank(body.description.as_deref()),
    ) else {
        return Err(AppError::BadRequest("Missing required body".to_string()));
    };
    let item_type = parse_item_type(item_type)?;

    if db::find_item_id(&state.db, item_type, description)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(ITEM_EXISTS_MESSAGE.to_string()));
    }

    let id = db::insert_item(&state.db, item_type, description)
        .await
        .map_err(|e| conflict_on_unique(e, ITEM_EXISTS_MESSAGE))?;

    tracing::info!(item_id = id, item_type = %item_type, "Item created");
    Ok(saved("Successfully saved.", "item_id", id))
}

/// Update type and/or description of an item from `?id=&type=&description=`
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<UpdateItemParams>,
) -> Result<Json<Value>> {
    let id = non_blank(params.id.as_deref()).ok_or(AppError::MissingParameters)?;
    let item_type = non_blank(params.item_type.as_deref());
    let description = non_blank(params.description.as_deref());
    if item_type.is_none() && description.is_none() {
        return Err(AppError::MissingParameters);
    }

    let id = parse_id("id", id)?;
    let item_type = item_type.map(parse_item_type).transpose()?;

    let found = db::update_item(&state.db, id, item_type, description)
        .await
        .map_err(|e| conflict_on_unique(e, ITEM_EXISTS_MESSAGE))?;
    if !found {
        return Err(AppError::NotFound(format!("item with id {} does not exist", id)));
    }

    tracing::info!(item_id = id, "Item updated");
    Ok(updated())
}
