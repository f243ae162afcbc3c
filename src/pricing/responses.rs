//! Response DTOs for the price calculation endpoint.

use rust_decimal::Decimal;
use serde::Serialize;

/// Computed delivery price, serialized as a JSON number
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PriceResponse {
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}
