//! Typed records for the three persisted tables.

pub mod item;
pub mod organization;
pub mod pricing_rule;

pub use item::{Item, ItemType, ParseItemTypeError};
pub use organization::{Organization, OrganizationId};
pub use pricing_rule::{NewPricingRule, PricingRule, PricingRuleChanges};
