use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{Address, Condition, Coordinates, Details, EnrichedVehicle, Vehicle, VehicleData, VehicleId};
use crate::utils::validation::{validate_coordinates, validate_not_empty};

// Request para crear o actualizar un vehículo.
// `id` y `price` del body se ignoran: el id va en la ruta y el precio no se persiste.
#[derive(Debug, Deserialize, Validate)]
pub struct VehicleRequest {
    #[serde(default)]
    pub condition: Condition,
    #[validate]
    pub details: DetailsRequest,
    #[validate]
    pub location: LocationRequest,
}

#[derive(Debug, Deserialize, Validate)]
pub struct DetailsRequest {
    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub make: String,

    #[validate(custom = "validate_not_empty", length(max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 50))]
    pub body: Option<String>,

    #[validate(range(min = 1, max = 9))]
    pub number_of_doors: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub fuel_type: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub engine: Option<String>,

    #[validate(range(min = 0))]
    pub mileage: Option<i32>,

    #[validate(range(min = 1886, max = 2100))]
    pub year: Option<i32>,

    #[validate(range(min = 1886, max = 2100))]
    pub production_year: Option<i32>,

    #[validate(length(min = 1, max = 50))]
    pub color: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_location"))]
pub struct LocationRequest {
    pub lat: f64,
    pub lon: f64,
}

fn validate_location(location: &LocationRequest) -> Result<(), ValidationError> {
    validate_coordinates(location.lat, location.lon)
}

impl From<DetailsRequest> for Details {
    fn from(request: DetailsRequest) -> Self {
        Self {
            make: request.make.trim().to_string(),
            model: request.model.trim().to_string(),
            body: request.body,
            number_of_doors: request.number_of_doors,
            fuel_type: request.fuel_type,
            engine: request.engine,
            mileage: request.mileage,
            year: request.year,
            production_year: request.production_year,
            color: request.color,
        }
    }
}

impl From<VehicleRequest> for VehicleData {
    fn from(request: VehicleRequest) -> Self {
        Self {
            condition: request.condition,
            details: request.details.into(),
            location: Coordinates::new(request.location.lat, request.location.lon),
        }
    }
}

// Ubicación en la respuesta: coordenadas y, en lecturas, la dirección resuelta
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LocationResponse {
    pub lat: f64,
    pub lon: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl LocationResponse {
    fn new(location: Coordinates, address: Option<Address>) -> Self {
        let address = address.unwrap_or_default();
        Self {
            lat: location.lat,
            lon: location.lon,
            address: Some(address.address).filter(|a| !a.is_empty()),
            city: address.city,
            state: address.state,
            zip: address.zip,
        }
    }
}

// Response de vehículo
#[derive(Debug, Serialize, Deserialize)]
pub struct VehicleResponse {
    pub id: VehicleId,
    pub condition: Condition,
    pub display: String,
    pub details: Details,
    pub location: LocationResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl VehicleResponse {
    fn build(vehicle: Vehicle, price: Option<String>, address: Option<Address>) -> Self {
        Self {
            id: vehicle.id,
            condition: vehicle.condition,
            display: vehicle.display(),
            location: LocationResponse::new(vehicle.location, address),
            details: vehicle.details,
            price,
            created_at: vehicle.created_at,
            modified_at: vehicle.modified_at,
        }
    }
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self::build(vehicle, None, None)
    }
}

impl From<EnrichedVehicle> for VehicleResponse {
    fn from(enriched: EnrichedVehicle) -> Self {
        Self::build(enriched.vehicle, Some(enriched.price), Some(enriched.address))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_minimal_request_defaults_to_used() {
        let request: VehicleRequest = serde_json::from_value(json!({
            "details": { "make": "Chevrolet", "model": "Volt" },
            "location": { "lat": 40.0, "lon": -75.0 }
        }))
        .unwrap();

        assert!(request.validate().is_ok());

        let data = VehicleData::from(request);
        assert_eq!(data.condition, Condition::Used);
        assert_eq!(data.details.make, "Chevrolet");
        assert_eq!(data.location, Coordinates::new(40.0, -75.0));
    }

    #[test]
    fn test_invalid_requests_fail_validation() {
        let blank_make: VehicleRequest = serde_json::from_value(json!({
            "details": { "make": "  ", "model": "Volt" },
            "location": { "lat": 40.0, "lon": -75.0 }
        }))
        .unwrap();
        assert!(blank_make.validate().is_err());

        let bad_latitude: VehicleRequest = serde_json::from_value(json!({
            "condition": "NEW",
            "details": { "make": "Chevrolet", "model": "Volt" },
            "location": { "lat": 120.0, "lon": -75.0 }
        }))
        .unwrap();
        assert!(bad_latitude.validate().is_err());
    }

    #[test]
    fn test_unenriched_response_has_no_price() {
        let now = Utc::now();
        let vehicle = Vehicle {
            id: 1,
            condition: Condition::New,
            details: Details::new("Chevrolet", "Volt"),
            location: Coordinates::new(40.0, -75.0),
            created_at: now,
            modified_at: now,
        };

        let body = serde_json::to_value(VehicleResponse::from(vehicle)).unwrap();

        assert!(body.get("price").is_none());
        assert!(body["location"].get("address").is_none());
        assert_eq!(body["condition"], "NEW");
        assert_eq!(body["display"], "Chevrolet Volt");
    }
}
