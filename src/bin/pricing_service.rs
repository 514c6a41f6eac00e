use anyhow::Result;
use dotenvy::dotenv;
use tracing::info;

use vehicles_api::config::PricingConfig;
use vehicles_api::routes::create_pricing_app;
use vehicles_api::server::{init_tracing, serve};
use vehicles_api::services::{PriceRange, PricingService};
use vehicles_api::state::PricingState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_tracing();

    info!("💰 Pricing Service");
    info!("================================================");

    let config = PricingConfig::from_env()?;
    let range = PriceRange::new(config.price_min, config.price_max)?;

    let app = create_pricing_app(
        PricingState::new(PricingService::new(range)),
        &config.cors_origins,
    );

    info!("🔍 Endpoints disponibles:");
    info!("   GET /health - Health check");
    info!("   GET /price?vehicleId={{id}} - Precio de un vehículo");
    info!("   GET /services/price?vehicleId={{id}} - Alias");

    serve(config.server_addr()?, app).await
}
