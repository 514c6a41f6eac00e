use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

use vehicles_api::clients::{
    build_http_client, HttpPriceClient, LocationClient, MapboxLocationClient, MapsClient,
};
use vehicles_api::config::EnvironmentConfig;
use vehicles_api::database;
use vehicles_api::repositories::{InMemoryVehicleRepository, PgVehicleRepository, VehicleRepository};
use vehicles_api::routes::create_vehicles_app;
use vehicles_api::server::{init_tracing, serve};
use vehicles_api::services::VehicleService;
use vehicles_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    init_tracing();

    info!("🚗 Vehicles API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;

    // Almacenamiento: PostgreSQL si hay DATABASE_URL, memoria si no
    let repository: Arc<dyn VehicleRepository> = match &config.database {
        Some(db_config) => {
            let pool = database::connect(db_config).await?;
            Arc::new(PgVehicleRepository::new(pool))
        }
        None => {
            warn!("⚠️ DATABASE_URL no definida: usando almacenamiento en memoria");
            Arc::new(InMemoryVehicleRepository::new())
        }
    };

    // Colaboradores externos con timeout acotado
    let http_client = build_http_client(config.collaborator_timeout)?;
    let price_client = Arc::new(HttpPriceClient::new(&config.pricing_url, http_client.clone()));
    info!("💰 Pricing service: {}", config.pricing_url);

    let location_client: Arc<dyn LocationClient> = match &config.mapbox_token {
        Some(token) => {
            info!("🗺️ Direcciones vía Mapbox reverse geocoding");
            Arc::new(MapboxLocationClient::new(token.clone(), http_client))
        }
        None => {
            info!("🗺️ Maps service: {}", config.maps_url);
            Arc::new(MapsClient::new(&config.maps_url, http_client))
        }
    };

    let service = VehicleService::new(repository, price_client, location_client);
    let app = create_vehicles_app(AppState::new(service), &config.cors_origins);

    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /vehicles - Listar vehículos");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   PUT    /vehicles/:id - Actualizar vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");

    serve(config.server_addr()?, app).await
}
