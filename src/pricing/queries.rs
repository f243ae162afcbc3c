//! Database queries backing the pricing rule store.
//!
//! Errors are returned as raw `sqlx::Error` so the resolver can report them
//! as storage faults without going through the HTTP error type.

use sqlx::PgPool;

use crate::models::{Item, ItemType, PricingRule};

/// Candidate rules for an (organization, zone) pair, in insertion order
pub async fn find_rules_by_organization_and_zone(
    pool: &PgPool,
    organization_id: i32,
    zone: &str,
) -> Result<Vec<PricingRule>, sqlx::Error> {
    sqlx::query_as::<_, PricingRule>(
        r#"
        SELECT id, organization_id, item_id, zone, base_distance_in_km, km_price, fix_price
        FROM pricing
        WHERE zone = $1
          AND organization_id = $2
        ORDER BY id
        "#,
    )
    .bind(zone)
    .bind(organization_id)
    .fetch_all(pool)
    .await
}

/// Item by id, only when its type also matches
pub async fn find_item_by_id_and_type(
    pool: &PgPool,
    item_id: i32,
    item_type: ItemType,
) -> Result<Option<Item>, sqlx::Error> {
    sqlx::query_as::<_, Item>(
        r#"
        SELECT id, type, description
        FROM item
        WHERE id = $1
          AND type = $2
        "#,
    )
    .bind(item_id)
    .bind(item_type.as_str())
    .fetch_optional(pool)
    .await
}
