//! Pricing rule route handlers

use std::str::FromStr;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewPricingRule, PricingRuleChanges};
use crate::AppState;

use super::{conflict_on_unique, non_blank, parse_id, saved, updated};

const RULE_EXISTS_MESSAGE: &str = "Pricing model for given organization_id,item_id and zone already exist.Atleast one of the three must be different.";

/// JSON body for pricing rule creation.
///
/// Decimals are accepted as JSON numbers or strings.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePricingRequest {
    pub organization_id: Option<i32>,
    pub item_id: Option<i32>,
    pub zone: Option<String>,
    pub base_distance_in_km: Option<Decimal>,
    pub km_price: Option<Decimal>,
    pub fix_price: Option<Decimal>,
}

impl CreatePricingRequest {
    pub fn validate(self) -> Result<NewPricingRule> {
        let zone = non_blank(self.zone.as_deref()).map(str::to_string);
        let (
            Some(organization_id),
            Some(item_id),
            Some(zone),
            Some(base_distance_in_km),
            Some(km_price),
            Some(fix_price),
        ) = (
            self.organization_id,
            self.item_id,
            zone,
            self.base_distance_in_km,
            self.km_price,
            self.fix_price,
        )
        else {
            return Err(AppError::BadRequest("Missing required body".to_string()));
        };

        Ok(NewPricingRule {
            organization_id,
            item_id,
            zone,
            base_distance_in_km: non_negative("base_distance_in_km", base_distance_in_km)?,
            km_price: non_negative("km_price", km_price)?,
            fix_price: non_negative("fix_price", fix_price)?,
        })
    }
}

/// Query parameters for a partial pricing rule update
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePricingParams {
    pub organization_id: Option<String>,
    pub item_id: Option<String>,
    pub zone: Option<String>,
    pub base_distance_in_km: Option<String>,
    pub km_price: Option<String>,
    pub fix_price: Option<String>,
}

impl UpdatePricingParams {
    pub fn validate(&self) -> Result<PricingRuleChanges> {
        let changes = PricingRuleChanges {
            organization_id: non_blank(self.organization_id.as_deref())
                .map(|v| parse_id("organization_id", v))
                .transpose()?,
            item_id: non_blank(self.item_id.as_deref())
                .map(|v| parse_id("item_id", v))
                .transpose()?,
            zone: non_blank(self.zone.as_deref()).map(str::to_string),
            base_distance_in_km: parse_amount("base_distance_in_km", &self.base_distance_in_km)?,
            km_price: parse_amount("km_price", &self.km_price)?,
            fix_price: parse_amount("fix_price", &self.fix_price)?,
        };

        if changes.is_empty() {
            return Err(AppError::BadRequest("Missing required parameters.".to_string()));
        }
        Ok(changes)
    }
}

fn non_negative(field: &str, value: Decimal) -> Result<Decimal> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::BadRequest(format!("{} must not be negative", field)));
    }
    Ok(value)
}

fn parse_amount(field: &str, raw: &Option<String>) -> Result<Option<Decimal>> {
    non_blank(raw.as_deref())
        .map(|v| {
            Decimal::from_str(v)
                .map_err(|_| AppError::BadRequest(format!("{} '{}' is not a valid number", field, v)))
                .and_then(|d| non_negative(field, d))
        })
        .transpose()
}

/// List all pricing rules
pub async fn list(State(state): State<AppState>) -> Result<Json<Value>> {
    let rules = db::list_pricing_rules(&state.db).await?;
    Ok(Json(json!({ "pricing": rules })))
}

/// Pricing rules of one organization
pub async fn by_organization(
    State(state): State<AppState>,
    Path(organization_id): Path<String>,
) -> Result<Json<Value>> {
    let id = parse_id("organization_id", &organization_id)?;
    let rules = db::list_pricing_rules_for_organization(&state.db, id).await?;
    if rules.is_empty() {
        return Err(AppError::NotFound(format!(
            "pricing with organization_id '{}' does not exist",
            id
        )));
    }
    Ok(Json(json!({ "pricing": rules })))
}

/// Create a pricing rule.
///
/// Only (organization, item, zone) is checked for uniqueness.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreatePricingRequest>,
) -> Result<Json<Value>> {
    let rule = body.validate()?;

    if db::find_pricing_rule_id(&state.db, rule.organization_id, rule.item_id, &rule.zone)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict(RULE_EXISTS_MESSAGE.to_string()));
    }

    if !db::organization_exists(&state.db, rule.organization_id).await? {
        return Err(AppError::NotFound(format!(
            "organization_id '{}' does not exist",
            rule.organization_id
        )));
    }

    if db::get_item(&state.db, rule.item_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "item_id '{}' does not exist",
            rule.item_id
        )));
    }

    let id = db::insert_pricing_rule(&state.db, &rule)
        .await
        .map_err(|e| conflict_on_unique(e, RULE_EXISTS_MESSAGE))?;

    tracing::info!(
        pricing_id = id,
        organization_id = rule.organization_id,
        item_id = rule.item_id,
        zone = %rule.zone,
        "Pricing rule created"
    );
    Ok(saved("Successfully saved.", "pricing_id", id))
}

/// Overwrite any subset of a pricing rule's fields
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<UpdatePricingParams>,
) -> Result<Json<Value>> {
    let id = parse_id("id", &id)?;
    let changes = params.validate()?;
    let not_found = || AppError::NotFound(format!("pricing with id '{}' does not exist", id));

    let mut rule = db::get_pricing_rule(&state.db, id)
        .await?
        .ok_or_else(not_found)?;

    changes.apply_to(&mut rule);

    let found = db::update_pricing_rule(&state.db, &rule)
        .await
        .map_err(|e| match e {
            AppError::Database(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                AppError::BadRequest(
                    "organization_id or item_id does not reference an existing record"
                        .to_string(),
                )
            }
            other => conflict_on_unique(other, RULE_EXISTS_MESSAGE),
        })?;
    if !found {
        return Err(not_found());
    }

    tracing::info!(pricing_id = id, "Pricing rule updated");
    Ok(updated())
}
