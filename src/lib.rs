//! Dynamic delivery pricing service.
//!
//! Organizations register pricing rules per zone and item type; the
//! `/calculate` endpoint resolves the matching rule and prices a delivery
//! by distance.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod pricing;
pub mod routes;

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::pricing::{PgPricingStore, PricingService};

/// Shared state of the CRUD handlers
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let pricing_service = PricingService::new(PgPricingStore::new(state.db.clone()));

    Router::new()
        .route("/health", get(routes::health))
        .merge(routes::router(state))
        .merge(pricing::router(pricing_service))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
