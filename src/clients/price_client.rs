use async_trait::async_trait;
use serde::Deserialize;

use super::PriceClient;
use crate::models::VehicleId;
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct PriceServiceResponse {
    id: VehicleId,
    price: String,
}

/// Cliente del microservicio de pricing: `GET {base_url}/price?vehicleId={id}`
#[derive(Clone)]
pub struct HttpPriceClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPriceClient {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl PriceClient for HttpPriceClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> AppResult<String> {
        let url = format!("{}/price", self.base_url);
        log::debug!("💰 Consultando precio del vehículo {} en {}", vehicle_id, url);

        let response = self
            .client
            .get(&url)
            .query(&[("vehicleId", vehicle_id)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Pricing service respondió {} para el vehículo {}", status, vehicle_id);
            return Err(AppError::ExternalApi(format!(
                "Pricing service answered {} for vehicle {}",
                status, vehicle_id
            )));
        }

        let body: PriceServiceResponse = response.json().await?;
        if body.id != vehicle_id {
            return Err(AppError::ExternalApi(format!(
                "Pricing service returned price for vehicle {} instead of {}",
                body.id, vehicle_id
            )));
        }

        Ok(body.price)
    }
}
