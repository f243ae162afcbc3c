//! Request DTOs for the price calculation endpoint.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::models::ItemType;

use super::services::PriceQuery;

/// Raw query string of `GET /calculate`.
///
/// Every field is kept as text so that absence and malformed values can be
/// reported separately.
#[derive(Debug, Default, Deserialize)]
pub struct CalculatePriceParams {
    pub zone: Option<String>,
    pub organization_id: Option<String>,
    pub item_type: Option<String>,
    pub total_distance: Option<String>,
}

/// Trimmed, non-empty parameter value.
///
/// Zones are stored trimmed by `POST /pricing`, so a zone is trimmed here too
/// before it is matched exactly against the stored text.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CalculatePriceParams {
    /// Check presence and shape of all four parameters
    pub fn validate(&self) -> Result<PriceQuery, AppError> {
        let (Some(zone), Some(organization_id), Some(item_type), Some(total_distance)) = (
            present(&self.zone),
            present(&self.organization_id),
            present(&self.item_type),
            present(&self.total_distance),
        ) else {
            return Err(AppError::MissingParameters);
        };

        let organization_id = organization_id.parse::<i32>().map_err(|_| {
            AppError::BadRequest(format!(
                "organization_id '{}' is not a valid integer",
                organization_id
            ))
        })?;

        let item_type = item_type
            .parse::<ItemType>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let total_distance = parse_distance(total_distance)?;

        Ok(PriceQuery {
            zone: zone.to_string(),
            organization_id,
            item_type,
            total_distance,
        })
    }
}

fn parse_distance(raw: &str) -> Result<Decimal, AppError> {
    let distance = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| {
            AppError::BadRequest(format!("total_distance '{}' is not a valid number", raw))
        })?;

    if distance.is_sign_negative() && !distance.is_zero() {
        return Err(AppError::BadRequest(
            "total_distance must not be negative".to_string(),
        ));
    }

    Ok(distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(zone: &str, org: &str, item_type: &str, distance: &str) -> CalculatePriceParams {
        CalculatePriceParams {
            zone: Some(zone.to_string()),
            organization_id: Some(org.to_string()),
            item_type: Some(item_type.to_string()),
            total_distance: Some(distance.to_string()),
        }
    }

    #[test]
    fn test_valid_query() {
        let query = params("central", "1", "non-perishable", "12.5")
            .validate()
            .unwrap();
        assert_eq!(query.zone, "central");
        assert_eq!(query.organization_id, 1);
        assert_eq!(query.item_type, ItemType::NonPerishable);
        assert_eq!(query.total_distance, dec!(12.5));
    }

    #[test]
    fn test_missing_or_blank_parameters() {
        let err = CalculatePriceParams::default().validate().unwrap_err();
        assert!(matches!(err, AppError::MissingParameters));

        let mut p = params("central", "1", "perishable", "3");
        p.total_distance = None;
        assert!(matches!(p.validate().unwrap_err(), AppError::MissingParameters));

        let p = params("  ", "1", "perishable", "3");
        assert!(matches!(p.validate().unwrap_err(), AppError::MissingParameters));
    }

    #[test]
    fn test_malformed_parameters() {
        for p in [
            params("central", "one", "perishable", "3"),
            params("central", "1", "frozen", "3"),
            params("central", "1", "perishable", "far"),
            params("central", "1", "perishable", "-2"),
        ] {
            assert!(matches!(p.validate().unwrap_err(), AppError::BadRequest(_)));
        }
    }

    #[test]
    fn test_zone_is_trimmed_but_case_kept() {
        let query = params(" Central ", "1", "perishable", "3").validate().unwrap();
        assert_eq!(query.zone, "Central");
    }

    #[test]
    fn test_zero_distance_is_valid() {
        let query = params("central", "1", "perishable", "0").validate().unwrap();
        assert_eq!(query.total_distance, Decimal::ZERO);
    }

    #[test]
    fn test_scientific_distance() {
        let query = params("central", "1", "perishable", "1.2e1").validate().unwrap();
        assert_eq!(query.total_distance, dec!(12));
    }
}
