use async_trait::async_trait;
use serde::Deserialize;

use super::LocationClient;
use crate::models::{Address, Coordinates};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug, Deserialize)]
struct MapsResponse {
    address: String,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
}

/// Cliente del microservicio de mapas: `GET {base_url}/maps?lat=..&lon=..`
#[derive(Clone)]
pub struct MapsClient {
    base_url: String,
    client: reqwest::Client,
}

impl MapsClient {
    pub fn new(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }
}

#[async_trait]
impl LocationClient for MapsClient {
    async fn resolve(&self, location: &Coordinates) -> AppResult<Address> {
        let url = format!("{}/maps", self.base_url);
        log::debug!("🗺️ Resolviendo dirección para ({}, {})", location.lat, location.lon);

        let response = self
            .client
            .get(&url)
            .query(&[("lat", location.lat), ("lon", location.lon)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Maps service respondió {}", status);
            return Err(AppError::ExternalApi(format!("Maps service answered {}", status)));
        }

        let body: MapsResponse = response.json().await?;

        Ok(Address {
            address: body.address,
            city: body.city,
            state: body.state,
            zip: body.zip,
        })
    }
}
