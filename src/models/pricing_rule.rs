//! Pricing rules, one per (organization, item, zone)

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Pricing rule from the `pricing` table
#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct PricingRule {
    pub id: i32,
    pub organization_id: i32,
    pub item_id: i32,
    pub zone: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_distance_in_km: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub km_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fix_price: Decimal,
}

/// Values for a pricing rule about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPricingRule {
    pub organization_id: i32,
    pub item_id: i32,
    pub zone: String,
    pub base_distance_in_km: Decimal,
    pub km_price: Decimal,
    pub fix_price: Decimal,
}

/// Partial update of a pricing rule. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingRuleChanges {
    pub organization_id: Option<i32>,
    pub item_id: Option<i32>,
    pub zone: Option<String>,
    pub base_distance_in_km: Option<Decimal>,
    pub km_price: Option<Decimal>,
    pub fix_price: Option<Decimal>,
}

impl PricingRuleChanges {
    pub fn is_empty(&self) -> bool {
        self.organization_id.is_none()
            && self.item_id.is_none()
            && self.zone.is_none()
            && self.base_distance_in_km.is_none()
            && self.km_price.is_none()
            && self.fix_price.is_none()
    }

    /// Apply the changes to an in-memory rule
    pub fn apply_to(&self, rule: &mut PricingRule) {
        if let Some(organization_id) = self.organization_id {
            rule.organization_id = organization_id;
        }
        if let Some(item_id) = self.item_id {
            rule.item_id = item_id;
        }
        if let Some(zone) = &self.zone {
            rule.zone = zone.clone();
        }
        if let Some(base) = self.base_distance_in_km {
            rule.base_distance_in_km = base;
        }
        if let Some(km_price) = self.km_price {
            rule.km_price = km_price;
        }
        if let Some(fix_price) = self.fix_price {
            rule.fix_price = fix_price;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rule() -> PricingRule {
        PricingRule {
            id: 1,
            organization_id: 1,
            item_id: 1,
            zone: "central".to_string(),
            base_distance_in_km: dec!(5),
            km_price: dec!(1.5),
            fix_price: dec!(10),
        }
    }

    #[test]
    fn test_empty_changes() {
        assert!(PricingRuleChanges::default().is_empty());
        let changes = PricingRuleChanges {
            zone: Some("north".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut r = rule();
        PricingRuleChanges {
            km_price: Some(dec!(2.25)),
            zone: Some("north".to_string()),
            ..Default::default()
        }
        .apply_to(&mut r);

        assert_eq!(r.km_price, dec!(2.25));
        assert_eq!(r.zone, "north");
        assert_eq!(r.fix_price, dec!(10));
        assert_eq!(r.base_distance_in_km, dec!(5));
        assert_eq!(r.organization_id, 1);
    }

    #[test]
    fn test_decimals_serialize_as_strings() {
        let json = serde_json::to_value(rule()).unwrap();
        assert_eq!(json["km_price"], "1.5");
        assert_eq!(json["zone"], "central");
    }
}
