use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::price_dto::{PriceQuery, PriceResponse};
use crate::services::parse_vehicle_id;
use crate::state::PricingState;
use crate::utils::errors::AppError;

pub fn create_price_router() -> Router<PricingState> {
    Router::new().route("/price", get(get_price))
}

/// GET /price?vehicleId={id}
async fn get_price(
    State(state): State<PricingState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<PriceResponse>, AppError> {
    let vehicle_id = parse_vehicle_id(query.vehicle_id.as_deref())?;
    let price = state.pricing_service.get_price(vehicle_id).await?;
    Ok(Json(price.into()))
}
