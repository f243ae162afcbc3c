//! Pricing rule resolution.
//!
//! Picks the rule for a price query out of the candidates stored for the
//! (organization, zone) pair and applies the fare formula to it.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::models::{ItemType, PricingRule};

use super::calculators::price_for_rule;
use super::store::PricingStore;

/// Number of candidate rules a well-formed (organization, zone) pair can hold,
/// one per item type.
pub const MAX_CANDIDATE_RULES: usize = 2;

/// Outcome of a failed price resolution
#[derive(Debug, thiserror::Error)]
pub enum PricingError {
    /// No rule for the organization and zone matches the requested item type
    #[error("no pricing rule matches the given organization, zone and item type")]
    NotFound,

    /// The fare for this distance does not fit in a decimal
    #[error("price for total_distance {0} is out of range")]
    OutOfRange(Decimal),

    /// The backing store failed
    #[error("pricing store failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// A validated price query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceQuery {
    pub zone: String,
    pub organization_id: i32,
    pub item_type: ItemType,
    pub total_distance: Decimal,
}

/// Resolves prices against a [`PricingStore`]
pub struct PricingService<S: PricingStore> {
    store: Arc<S>,
}

impl<S: PricingStore> Clone for PricingService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PricingStore> PricingService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Compute the delivery price for a query.
    ///
    /// Candidates are scanned in retrieval order and the first whose item has
    /// the requested type wins. Only the first [`MAX_CANDIDATE_RULES`]
    /// candidates are considered.
    pub async fn resolve_price(&self, query: &PriceQuery) -> Result<Decimal, PricingError> {
        let rule = self
            .resolve_rule(query.organization_id, &query.zone, query.item_type)
            .await?;

        let price = price_for_rule(&rule, query.total_distance)
            .ok_or(PricingError::OutOfRange(query.total_distance))?;
        tracing::debug!(
            rule_id = rule.id,
            total_distance = %query.total_distance,
            price = %price,
            "Price resolved"
        );
        Ok(price)
    }

    /// Select the pricing rule for an (organization, zone, item type)
    pub async fn resolve_rule(
        &self,
        organization_id: i32,
        zone: &str,
        item_type: ItemType,
    ) -> Result<PricingRule, PricingError> {
        let candidates = self
            .store
            .find_rules_by_organization_and_zone(organization_id, zone)
            .await?;

        tracing::debug!(
            organization_id,
            zone,
            candidates = candidates.len(),
            "Candidate pricing rules loaded"
        );

        if candidates.len() > MAX_CANDIDATE_RULES {
            tracing::warn!(
                organization_id,
                zone,
                candidates = candidates.len(),
                "More pricing rules than item types for one organization and zone, only the first {} are considered",
                MAX_CANDIDATE_RULES
            );
        }

        for rule in candidates.into_iter().take(MAX_CANDIDATE_RULES) {
            if self
                .store
                .find_item_by_id_and_type(rule.item_id, item_type)
                .await?
                .is_some()
            {
                return Ok(rule);
            }
        }

        Err(PricingError::NotFound)
    }
}
