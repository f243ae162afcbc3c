//! Pricing engine module.
//!
//! Resolves the pricing rule for a delivery and computes its price.

pub mod calculators;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod store;

// Re-export commonly used items
pub use calculators::{calculate_price, round_to_cents};
pub use routes::router;
pub use services::{PriceQuery, PricingError, PricingService};
pub use store::{PgPricingStore, PricingStore};
