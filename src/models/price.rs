//! Modelo de Price
//!
//! Precio memorizado por el servicio de pricing para un vehículo.

use rust_decimal::Decimal;
use serde::Serialize;

use super::vehicle::VehicleId;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    pub vehicle_id: VehicleId,
    pub currency: String,
    pub amount: Decimal,
}

impl Price {
    pub fn new(vehicle_id: VehicleId, amount: Decimal) -> Self {
        Self {
            vehicle_id,
            currency: DEFAULT_CURRENCY.to_string(),
            amount,
        }
    }

    /// Monto con exactamente dos decimales ("12345.60")
    pub fn formatted_amount(&self) -> String {
        format!("{:.2}", self.amount)
    }
}
