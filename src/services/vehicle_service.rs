//! Servicio de vehículos
//!
//! Combina el repositorio con los clientes de precio y de ubicación.
//! Las lecturas siempre vuelven a consultar precio y dirección; las
//! escrituras devuelven el registro almacenado sin enriquecer.

use std::sync::Arc;

use tracing::{debug, info};

use crate::clients::{LocationClient, PriceClient};
use crate::models::{EnrichedVehicle, Vehicle, VehicleData, VehicleId};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct VehicleService {
    repository: Arc<dyn VehicleRepository>,
    price_client: Arc<dyn PriceClient>,
    location_client: Arc<dyn LocationClient>,
}

impl VehicleService {
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        price_client: Arc<dyn PriceClient>,
        location_client: Arc<dyn LocationClient>,
    ) -> Self {
        Self {
            repository,
            price_client,
            location_client,
        }
    }

    /// Todos los vehículos, cada uno con su precio y dirección actuales
    pub async fn list(&self) -> AppResult<Vec<EnrichedVehicle>> {
        let vehicles = self.repository.find_all().await?;
        debug!("🚗 Enriqueciendo {} vehículos", vehicles.len());

        let mut enriched = Vec::with_capacity(vehicles.len());
        for vehicle in vehicles {
            enriched.push(self.enrich(vehicle).await?);
        }

        Ok(enriched)
    }

    pub async fn find_by_id(&self, id: VehicleId) -> AppResult<EnrichedVehicle> {
        let vehicle = self.find_stored(id).await?;
        self.enrich(vehicle).await
    }

    /// Crea el vehículo si `id` es `None`; si no, actualiza detalles,
    /// ubicación y estado del registro existente.
    pub async fn save(&self, id: Option<VehicleId>, data: VehicleData) -> AppResult<Vehicle> {
        match id {
            None => {
                let created = self.repository.create(data).await?;
                info!("✅ Vehículo {} creado: {}", created.id, created.display());
                Ok(created)
            }
            Some(id) => {
                let mut existing = self.find_stored(id).await?;
                existing.merge(data);

                let updated = self.repository.update(&existing).await?;
                info!("✅ Vehículo {} actualizado", updated.id);
                Ok(updated)
            }
        }
    }

    pub async fn delete(&self, id: VehicleId) -> AppResult<()> {
        let vehicle = self.find_stored(id).await?;

        if !self.repository.delete(vehicle.id).await? {
            return Err(not_found_error("Vehicle", id));
        }

        info!("🗑️ Vehículo {} eliminado", id);
        Ok(())
    }

    async fn find_stored(&self, id: VehicleId) -> AppResult<Vehicle> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))
    }

    async fn enrich(&self, vehicle: Vehicle) -> AppResult<EnrichedVehicle> {
        let (price, address) = tokio::try_join!(
            self.price_client.get_price(vehicle.id),
            self.location_client.resolve(&vehicle.location),
        )?;

        Ok(EnrichedVehicle {
            vehicle,
            price,
            address,
        })
    }
}
