use async_trait::async_trait;
use serde::Deserialize;

use super::LocationClient;
use crate::models::{Address, Coordinates};
use crate::utils::errors::{AppError, AppResult};

pub const MAPBOX_API_URL: &str = "https://api.mapbox.com";

#[derive(Debug, Deserialize)]
struct MapboxGeocodingResponse {
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    properties: MapboxProperties,
}

#[derive(Debug, Deserialize)]
struct MapboxProperties {
    name: Option<String>,
    full_address: Option<String>,
    #[serde(default)]
    context: MapboxContext,
}

#[derive(Debug, Default, Deserialize)]
struct MapboxContext {
    address: Option<MapboxContextItem>,
    postcode: Option<MapboxContextItem>,
    place: Option<MapboxContextItem>,
    region: Option<MapboxContextItem>,
}

#[derive(Debug, Deserialize)]
struct MapboxContextItem {
    name: String,
    region_code: Option<String>,
}

/// Geocodificación inversa con la API v6 de Mapbox
pub struct MapboxLocationClient {
    base_url: String,
    mapbox_token: String,
    client: reqwest::Client,
}

impl MapboxLocationClient {
    pub fn new(mapbox_token: String, client: reqwest::Client) -> Self {
        Self::with_base_url(MAPBOX_API_URL, mapbox_token, client)
    }

    pub fn with_base_url(base_url: impl Into<String>, mapbox_token: String, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mapbox_token,
            client,
        }
    }
}

#[async_trait]
impl LocationClient for MapboxLocationClient {
    async fn resolve(&self, location: &Coordinates) -> AppResult<Address> {
        log::info!("🗺️ Reverse geocoding ({}, {})", location.lat, location.lon);

        let url = format!(
            "{}/search/geocode/v6/reverse?longitude={}&latitude={}&access_token={}&limit=1",
            self.base_url,
            location.lon,
            location.lat,
            urlencoding::encode(&self.mapbox_token)
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::error!("❌ Reverse geocoding failed with status {}", status);
            return Err(AppError::ExternalApi(format!("Reverse geocoding failed: {}", status)));
        }

        let mapbox_response: MapboxGeocodingResponse = response.json().await?;

        address_from_response(mapbox_response).ok_or_else(|| {
            log::warn!("⚠️ No address found for ({}, {})", location.lat, location.lon);
            AppError::ExternalApi(format!(
                "No address found for ({}, {})",
                location.lat, location.lon
            ))
        })
    }
}

// Primera feature: la más relevante
fn address_from_response(response: MapboxGeocodingResponse) -> Option<Address> {
    let properties = response.features.into_iter().next()?.properties;
    let context = properties.context;

    let street = context
        .address
        .map(|item| item.name)
        .or(properties.name)
        .or(properties.full_address)?;

    Some(Address {
        address: street,
        city: context.place.map(|item| item.name),
        state: context.region.map(|item| item.region_code.unwrap_or(item.name)),
        zip: context.postcode.map(|item| item.name),
    })
}
