pub mod price_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_middleware;
use crate::state::{AppState, PricingState};

/// Router completo de la API de vehículos
pub fn create_vehicles_app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(vehicles_health))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}

/// Router completo del servicio de pricing.
/// `/services/price` se mantiene como alias de `/price`.
pub fn create_pricing_app(state: PricingState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(pricing_health))
        .merge(price_routes::create_price_router())
        .nest("/services", price_routes::create_price_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware(cors_origins))
        .with_state(state)
}

async fn vehicles_health() -> Json<serde_json::Value> {
    health("vehicles-api")
}

async fn pricing_health() -> Json<serde_json::Value> {
    health("pricing-service")
}

fn health(service: &str) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": service,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
