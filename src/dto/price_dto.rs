use serde::{Deserialize, Serialize};

use crate::models::{Price, VehicleId};

// Query del endpoint de precio. Se recibe como texto para validar a mano
// y devolver un 400 coherente con el resto de errores.
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    #[serde(rename = "vehicleId")]
    pub vehicle_id: Option<String>,
}

// Response de precio
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub id: VehicleId,
    pub currency: String,
    pub price: String,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            id: price.vehicle_id,
            price: price.formatted_amount(),
            currency: price.currency,
        }
    }
}
