use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::VehicleRepository;
use crate::models::{Vehicle, VehicleData, VehicleId};
use crate::utils::errors::{not_found_error, AppResult};

/// Almacenamiento en memoria con ids autoincrementales.
///
/// Los ids nunca se reutilizan, aunque el vehículo se haya borrado.
#[derive(Default, Clone)]
pub struct InMemoryVehicleRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let guard = self.inner.read().await;

        Ok(guard.vehicles.values().cloned().collect())
    }

    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>> {
        let guard = self.inner.read().await;

        Ok(guard.vehicles.get(&id).cloned())
    }

    async fn create(&self, data: VehicleData) -> AppResult<Vehicle> {
        let mut guard = self.inner.write().await;

        Ok(guard.insert(data))
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let mut guard = self.inner.write().await;

        let stored = guard
            .vehicles
            .get_mut(&vehicle.id)
            .ok_or_else(|| not_found_error("Vehicle", vehicle.id))?;

        stored.condition = vehicle.condition;
        stored.details = vehicle.details.clone();
        stored.location = vehicle.location;
        stored.modified_at = Utc::now();

        Ok(stored.clone())
    }

    async fn delete(&self, id: VehicleId) -> AppResult<bool> {
        let mut guard = self.inner.write().await;

        Ok(guard.vehicles.remove(&id).is_some())
    }
}

#[derive(Default)]
struct Inner {
    vehicles: BTreeMap<VehicleId, Vehicle>,
    last_id: VehicleId,
}

impl Inner {
    fn insert(&mut self, data: VehicleData) -> Vehicle {
        self.last_id += 1;
        let now = Utc::now();

        let vehicle = Vehicle {
            id: self.last_id,
            condition: data.condition,
            details: data.details,
            location: data.location,
            created_at: now,
            modified_at: now,
        };
        self.vehicles.insert(vehicle.id, vehicle.clone());

        vehicle
    }
}
