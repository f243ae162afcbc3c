//! HTTP routes for price calculation

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;

use super::requests::CalculatePriceParams;
use super::responses::PriceResponse;
use super::services::PricingService;
use super::store::PricingStore;

/// Router exposing `GET /calculate`
pub fn router<S: PricingStore + 'static>(service: PricingService<S>) -> Router {
    Router::new()
        .route("/calculate", get(calculate_price::<S>))
        .with_state(service)
}

/// Price for the given zone, organization, item type and distance
async fn calculate_price<S: PricingStore + 'static>(
    State(service): State<PricingService<S>>,
    Query(params): Query<CalculatePriceParams>,
) -> Result<Json<PriceResponse>> {
    let query = params.validate()?;
    let price = service.resolve_price(&query).await?;
    Ok(Json(PriceResponse { price }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Item, ItemType, PricingRule};
    use crate::pricing::store::MockPricingStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use rust_decimal_macros::dec;
    use serde_json::{json, Value};
    use tower::ServiceExt; // For oneshot()

    async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn single_rule_store() -> MockPricingStore {
        let mut store = MockPricingStore::new();
        store
            .expect_find_rules_by_organization_and_zone()
            .returning(|organization_id, zone| {
                Ok(vec![PricingRule {
                    id: 1,
                    organization_id,
                    item_id: 1,
                    zone: zone.to_string(),
                    base_distance_in_km: dec!(5),
                    km_price: dec!(1.5),
                    fix_price: dec!(10),
                }])
            });
        store
            .expect_find_item_by_id_and_type()
            .returning(|id, item_type| {
                Ok((item_type == ItemType::Perishable).then(|| Item {
                    id,
                    item_type,
                    description: "fish".to_string(),
                }))
            });
        store
    }

    #[tokio::test]
    async fn test_calculate_returns_price() {
        let app = router(PricingService::new(single_rule_store()));
        let (status, body) = send(
            app,
            "/calculate?zone=central&organization_id=1&item_type=perishable&total_distance=12",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "price": 20.5 }));
    }

    #[tokio::test]
    async fn test_calculate_unmatched_type_is_bad_request() {
        let app = router(PricingService::new(single_rule_store()));
        let (status, body) = send(
            app,
            "/calculate?zone=central&organization_id=1&item_type=non-perishable&total_distance=12",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "pricing structure for given parameters does not exist"
        );
    }

    #[tokio::test]
    async fn test_calculate_missing_parameters_never_reaches_store() {
        let mut store = MockPricingStore::new();
        store.expect_find_rules_by_organization_and_zone().never();
        store.expect_find_item_by_id_and_type().never();

        let app = router(PricingService::new(store));
        let (status, body) =
            send(app, "/calculate?zone=central&organization_id=1&item_type=perishable").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required query parameters.");
    }

    #[tokio::test]
    async fn test_calculate_storage_fault_is_server_error() {
        let mut store = MockPricingStore::new();
        store
            .expect_find_rules_by_organization_and_zone()
            .returning(|_, _| Err(sqlx::Error::PoolTimedOut));

        let app = router(PricingService::new(store));
        let (status, body) = send(
            app,
            "/calculate?zone=central&organization_id=1&item_type=perishable&total_distance=1",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error");
    }

    #[tokio::test]
    async fn test_calculate_overflowing_distance_is_bad_request() {
        let app = router(PricingService::new(single_rule_store()));
        let (status, body) = send(
            app,
            "/calculate?zone=central&organization_id=1&item_type=perishable&total_distance=79228162514264337593543950335",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "price for total_distance 79228162514264337593543950335 is out of range"
        );
    }
}
