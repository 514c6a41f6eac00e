use std::sync::Arc;

use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse};
use crate::models::VehicleId;
use crate::services::VehicleService;
use crate::utils::errors::AppError;

pub struct VehicleController {
    service: Arc<VehicleService>,
}

impl VehicleController {
    pub fn new(service: Arc<VehicleService>) -> Self {
        Self { service }
    }

    pub async fn create(&self, request: VehicleRequest) -> Result<VehicleResponse, AppError> {
        let vehicle = self.service.save(None, request.into()).await?;
        Ok(vehicle.into())
    }

    pub async fn get_by_id(&self, id: VehicleId) -> Result<VehicleResponse, AppError> {
        let vehicle = self.service.find_by_id(id).await?;
        Ok(vehicle.into())
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.service.list().await?;
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: VehicleId,
        request: VehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        let vehicle = self.service.save(Some(id), request.into()).await?;
        Ok(vehicle.into())
    }

    pub async fn delete(&self, id: VehicleId) -> Result<(), AppError> {
        self.service.delete(id).await
    }
}
