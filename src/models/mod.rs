//! Modelos del sistema
//!
//! Este módulo contiene los modelos de dominio: vehículos y precios.

pub mod price;
pub mod vehicle;

pub use price::Price;
pub use vehicle::{Address, Condition, Coordinates, Details, EnrichedVehicle, Vehicle, VehicleData, VehicleId};
