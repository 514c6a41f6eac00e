//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación:
//! el orquestador de vehículos y el servicio de pricing.

pub mod pricing_service;
pub mod vehicle_service;

pub use pricing_service::{parse_vehicle_id, PriceRange, PricingService};
pub use vehicle_service::VehicleService;
