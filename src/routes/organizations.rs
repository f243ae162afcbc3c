//! Organization route handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::{AppError, Result};
use crate::AppState;

use super::{conflict_on_unique, non_blank, parse_id, saved, updated};

/// Query parameters for organization writes
#[derive(Debug, Default, Deserialize)]
pub struct OrganizationParams {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// List all organizations
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let organizations = db::list_organizations(&state.db).await?;
    Ok(Json(json!({ "organizations": organizations })))
}

/// Organization id by name
pub async fn by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>> {
    let ids = db::find_organization_ids_by_name(&state.db, &name).await?;
    if ids.is_empty() {
        return Err(AppError::NotFound(format!(
            "organization with name {} does not exist",
            name
        )));
    }
    Ok(Json(json!({ "organization": ids })))
}

/// Create an organization from `?name=`
pub async fn create(
    State(state): State<AppState>,
    Query(params): Query<OrganizationParams>,
) -> Result<Json<Value>> {
    let name = non_blank(params.name.as_deref()).ok_or(AppError::MissingParameters)?;

    let duplicate = || {
        format!(
            "Organization with name '{}' already exist.Try using some different name",
            name
        )
    };

    if !db::find_organization_ids_by_name(&state.db, name)
        .await?
        .is_empty()
    {
        return Err(AppError::Conflict(duplicate()));
    }

    let id = db::insert_organization(&state.db, name)
        .await
        .map_err(|e| conflict_on_unique(e, duplicate()))?;

    tracing::info!(organization_id = id, name, "Organization created");
    Ok(saved("Successfully saved organization.", "organization_id", id))
}

/// Rename an organization from `?id=&name=`
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<OrganizationParams>,
) -> Result<Json<Value>> {
    let (Some(id), Some(name)) = (
        non_blank(params.id.as_deref()),
        non_blank(params.name.as_deref()),
    ) else {
        return Err(AppError::MissingParameters);
    };
    let id = parse_id("id", id)?;

    let found = db::update_organization_name(&state.db, id, name)
        .await
        .map_err(|e| {
            conflict_on_unique(e, format!("Organization with name '{}' already exist.", name))
        })?;
    if !found {
        return Err(AppError::NotFound(format!(
            "organization with id {} does not exist",
            id
        )));
    }

    tracing::info!(organization_id = id, name, "Organization renamed");
    Ok(updated())
}
