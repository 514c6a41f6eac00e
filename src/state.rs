//! Shared application state
//!
//! Este módulo define el estado compartido que se pasa a través de los
//! routers de Axum: uno para la API de vehículos y otro para pricing.

use std::sync::Arc;

use crate::services::{PricingService, VehicleService};

#[derive(Clone)]
pub struct AppState {
    pub vehicle_service: Arc<VehicleService>,
}

impl AppState {
    pub fn new(vehicle_service: VehicleService) -> Self {
        Self {
            vehicle_service: Arc::new(vehicle_service),
        }
    }
}

#[derive(Clone)]
pub struct PricingState {
    pub pricing_service: Arc<PricingService>,
}

impl PricingState {
    pub fn new(pricing_service: PricingService) -> Self {
        Self {
            pricing_service: Arc::new(pricing_service),
        }
    }
}
