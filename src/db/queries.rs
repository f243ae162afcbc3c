//! Database queries for organizations, items and pricing rules

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{
    Item, ItemType, NewPricingRule, Organization, OrganizationId, PricingRule,
};

// ==================== organizations ====================

/// Get all organizations ordered by id
pub async fn list_organizations(pool: &PgPool) -> Result<Vec<Organization>> {
    let organizations = sqlx::query_as::<_, Organization>(
        r#"
        SELECT id, name
        FROM organization
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(organizations)
}

/// Get the ids of organizations carrying the given name
pub async fn find_organization_ids_by_name(
    pool: &PgPool,
    name: &str,
) -> Result<Vec<OrganizationId>> {
    let ids = sqlx::query_as::<_, OrganizationId>(
        r#"
        SELECT id
        FROM organization
        WHERE name = $1
        "#,
    )
    .bind(name)
    .fetch_all(pool)
    .await?;

    Ok(ids)
}

/// Check whether an organization with the given id exists
pub async fn organization_exists(pool: &PgPool, id: i32) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (SELECT 1 FROM organization WHERE id = $1)
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Insert an organization and return its id
pub async fn insert_organization(pool: &PgPool, name: &str) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO organization (name)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Rename an organization. `false` when no organization has this id
pub async fn update_organization_name(pool: &PgPool, id: i32, name: &str) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE organization
        SET name = $1
        WHERE id = $2
        "#,
    )
    .bind(name)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== items ====================

/// Get all items ordered by id
pub async fn list_items(pool: &PgPool) -> Result<Vec<Item>> {
    let items = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, type, description
        FROM item
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(items)
}

/// Get an item by id
pub async fn get_item(pool: &PgPool, id: i32) -> Result<Option<Item>> {
    let item = sqlx::query_as::<_, Item>(
        r#"
        SELECT id, type, description
        FROM item
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(item)
}

/// Find the id of the item with this exact type and description
pub async fn find_item_id(
    pool: &PgPool,
    item_type: ItemType,
    description: &str,
) -> Result<Option<i32>> {
    let id: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT id
        FROM item
        WHERE type = $1 AND description = $2
        "#,
    )
    .bind(item_type.as_str())
    .bind(description)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

/// Insert an item and return its id
pub async fn insert_item(pool: &PgPool, item_type: ItemType, description: &str) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO item (type, description)
        VALUES ($1, $2)
        RETURNING id
        "#,
    )
    .bind(item_type.as_str())
    .bind(description)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Update the type and/or description of an item. `false` when it is missing
pub async fn update_item(
    pool: &PgPool,
    id: i32,
    item_type: Option<ItemType>,
    description: Option<&str>,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE item
        SET type = COALESCE($1, type),
            description = COALESCE($2, description)
        WHERE id = $3
        "#,
    )
    .bind(item_type.map(|t| t.as_str()))
    .bind(description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// ==================== pricing rules ====================

/// Get all pricing rules
pub async fn list_pricing_rules(pool: &PgPool) -> Result<Vec<PricingRule>> {
    let rules = sqlx::query_as::<_, PricingRule>(
        r#"
        SELECT id, organization_id, item_id, zone, base_distance_in_km, km_price, fix_price
        FROM pricing
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rules)
}

/// Get all pricing rules of one organization
pub async fn list_pricing_rules_for_organization(
    pool: &PgPool,
    organization_id: i32,
) -> Result<Vec<PricingRule>> {
    let rules = sqlx::query_as::<_, PricingRule>(
        r#"
        SELECT id, organization_id, item_id, zone, base_distance_in_km, km_price, fix_price
        FROM pricing
        WHERE organization_id = $1
        ORDER BY id
        "#,
    )
    .bind(organization_id)
    .fetch_all(pool)
    .await?;

    Ok(rules)
}

/// Get a pricing rule by id
pub async fn get_pricing_rule(pool: &PgPool, id: i32) -> Result<Option<PricingRule>> {
    let rule = sqlx::query_as::<_, PricingRule>(
        r#"
        SELECT id, organization_id, item_id, zone, base_distance_in_km, km_price, fix_price
        FROM pricing
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rule)
}

/// Find the id of the rule for this (organization, item, zone)
pub async fn find_pricing_rule_id(
    pool: &PgPool,
    organization_id: i32,
    item_id: i32,
    zone: &str,
) -> Result<Option<i32>> {
    let id: Option<i32> = sqlx::query_scalar(
        r#"
        SELECT id
        FROM pricing
        WHERE organization_id = $1 AND item_id = $2 AND zone = $3
        "#,
    )
    .bind(organization_id)
    .bind(item_id)
    .bind(zone)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}

/// Insert a pricing rule and return its id
pub async fn insert_pricing_rule(pool: &PgPool, rule: &NewPricingRule) -> Result<i32> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO pricing (organization_id, item_id, zone, base_distance_in_km, km_price, fix_price)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id
        "#,
    )
    .bind(rule.organization_id)
    .bind(rule.item_id)
    .bind(&rule.zone)
    .bind(rule.base_distance_in_km)
    .bind(rule.km_price)
    .bind(rule.fix_price)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Overwrite every column of an existing pricing rule
pub async fn update_pricing_rule(pool: &PgPool, rule: &PricingRule) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE pricing
        SET organization_id = $1,
            item_id = $2,
            zone = $3,
            base_distance_in_km = $4,
            km_price = $5,
            fix_price = $6
        WHERE id = $7
        "#,
    )
    .bind(rule.organization_id)
    .bind(rule.item_id)
    .bind(&rule.zone)
    .bind(rule.base_distance_in_km)
    .bind(rule.km_price)
    .bind(rule.fix_price)
    .bind(rule.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
