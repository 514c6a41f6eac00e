//! Repositorios
//!
//! Acceso al almacenamiento de vehículos. `VehicleRepository` es el contrato
//! que usa el servicio; hay una implementación PostgreSQL (sqlx) y otra en
//! memoria para desarrollo local y tests.

pub mod memory_vehicle_repository;
pub mod vehicle_repository;

use async_trait::async_trait;

use crate::models::{Vehicle, VehicleData, VehicleId};
use crate::utils::errors::AppResult;

pub use memory_vehicle_repository::InMemoryVehicleRepository;
pub use vehicle_repository::PgVehicleRepository;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>>;

    /// Inserta un registro nuevo; el id lo asigna el almacenamiento.
    async fn create(&self, data: VehicleData) -> AppResult<Vehicle>;

    /// Persiste los campos mutables de un vehículo existente.
    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle>;

    /// Devuelve `false` si no había registro con ese id.
    async fn delete(&self, id: VehicleId) -> AppResult<bool>;
}
