#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use vehicles_api::clients::{LocationClient, PriceClient};
use vehicles_api::models::{Address, Coordinates, VehicleId};
use vehicles_api::repositories::InMemoryVehicleRepository;
use vehicles_api::routes::create_vehicles_app;
use vehicles_api::services::{PricingService, VehicleService};
use vehicles_api::state::AppState;
use vehicles_api::utils::errors::{AppError, AppResult};

/// Cliente de precios que llama al servicio de pricing en proceso
pub struct InProcessPriceClient {
    pub pricing: Arc<PricingService>,
}

#[async_trait]
impl PriceClient for InProcessPriceClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> AppResult<String> {
        Ok(self.pricing.get_price(vehicle_id).await?.formatted_amount())
    }
}

pub struct StubLocationClient;

#[async_trait]
impl LocationClient for StubLocationClient {
    async fn resolve(&self, _location: &Coordinates) -> AppResult<Address> {
        Ok(Address {
            address: "1600 Market Street".to_string(),
            city: Some("Philadelphia".to_string()),
            state: Some("PA".to_string()),
            zip: Some("19103".to_string()),
        })
    }
}

pub struct DownLocationClient;

#[async_trait]
impl LocationClient for DownLocationClient {
    async fn resolve(&self, _location: &Coordinates) -> AppResult<Address> {
        Err(AppError::ExternalApi("maps service unreachable".to_string()))
    }
}

/// API de vehículos sobre almacenamiento en memoria y colaboradores locales
pub fn vehicles_app() -> Router {
    vehicles_app_with(Arc::new(StubLocationClient))
}

pub fn vehicles_app_with(location_client: Arc<dyn LocationClient>) -> Router {
    let price_client = Arc::new(InProcessPriceClient {
        pricing: Arc::new(PricingService::default()),
    });
    let service = VehicleService::new(
        Arc::new(InMemoryVehicleRepository::new()),
        price_client,
        location_client,
    );
    create_vehicles_app(AppState::new(service), &[])
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Levanta `app` en un puerto libre de localhost y devuelve su URL base
pub async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

pub fn is_two_decimal_amount(value: &str) -> bool {
    match value.split_once('.') {
        Some((units, cents)) => {
            !units.is_empty()
                && units.chars().all(|c| c.is_ascii_digit())
                && cents.len() == 2
                && cents.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}
