//! Clients - HTTP Clients for External APIs
//!
//! This module contains the collaborators the vehicle service consumes:
//! the pricing service and the location (maps) lookup.

pub mod mapbox_client;
pub mod maps_client;
pub mod price_client;

use std::time::Duration;

use async_trait::async_trait;

use crate::models::{Address, Coordinates, VehicleId};
use crate::utils::errors::AppResult;

pub use mapbox_client::MapboxLocationClient;
pub use maps_client::MapsClient;
pub use price_client::HttpPriceClient;

/// Resolves the current price of a vehicle.
#[async_trait]
pub trait PriceClient: Send + Sync {
    /// Price as a string with two fractional digits.
    async fn get_price(&self, vehicle_id: VehicleId) -> AppResult<String>;
}

/// Resolves a coordinate pair into a street address.
#[async_trait]
pub trait LocationClient: Send + Sync {
    async fn resolve(&self, location: &Coordinates) -> AppResult<Address>;
}

/// Shared reqwest client with a bounded per-request timeout
pub fn build_http_client(timeout: Duration) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("VehiclesApi/", env!("CARGO_PKG_VERSION")))
        .build()
}
