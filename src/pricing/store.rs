//! Read-only access to pricing rules and items.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{Item, ItemType, PricingRule};

use super::queries;

/// Narrow query interface the resolver depends on.
///
/// Implementations return storage faults unchanged; nothing is retried here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingStore: Send + Sync {
    /// Candidate rules for an (organization, zone) pair in retrieval order
    async fn find_rules_by_organization_and_zone(
        &self,
        organization_id: i32,
        zone: &str,
    ) -> Result<Vec<PricingRule>, sqlx::Error>;

    /// The item with this id, or `None` if it is missing or has another type
    async fn find_item_by_id_and_type(
        &self,
        item_id: i32,
        item_type: ItemType,
    ) -> Result<Option<Item>, sqlx::Error>;
}

/// PostgreSQL implementation of [`PricingStore`]
#[derive(Clone)]
pub struct PgPricingStore {
    pool: PgPool,
}

impl PgPricingStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingStore for PgPricingStore {
    async fn find_rules_by_organization_and_zone(
        &self,
        organization_id: i32,
        zone: &str,
    ) -> Result<Vec<PricingRule>, sqlx::Error> {
        queries::find_rules_by_organization_and_zone(&self.pool, organization_id, zone).await
    }

    async fn find_item_by_id_and_type(
        &self,
        item_id: i32,
        item_type: ItemType,
    ) -> Result<Option<Item>, sqlx::Error> {
        queries::find_item_by_id_and_type(&self.pool, item_id, item_type).await
    }
}
