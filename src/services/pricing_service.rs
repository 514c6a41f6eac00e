//! Servicio de pricing
//!
//! Mantiene en memoria el precio de cada vehículo. La primera consulta de un id
//! genera un precio aleatorio dentro del rango configurado; las siguientes
//! devuelven siempre el mismo valor mientras viva el proceso.

use std::collections::HashMap;

use rand::Rng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::{Price, VehicleId};
use crate::utils::errors::{bad_request_error, AppError, AppResult};

/// Rango cerrado de generación, en centavos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min_cents: i64,
    max_cents: i64,
}

impl PriceRange {
    pub fn new(min: Decimal, max: Decimal) -> AppResult<Self> {
        let to_cents = |value: Decimal| {
            value
                .checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|cents| cents.round().to_i64())
                .ok_or_else(|| AppError::Internal(format!("Price bound {} out of range", value)))
        };

        let min_cents = to_cents(min)?;
        let max_cents = to_cents(max)?;

        if min_cents <= 0 || min_cents > max_cents {
            return Err(AppError::Internal(format!(
                "Invalid price range {} ..= {}",
                min, max
            )));
        }

        Ok(Self { min_cents, max_cents })
    }

    pub fn min(&self) -> Decimal {
        Decimal::new(self.min_cents, 2)
    }

    pub fn max(&self) -> Decimal {
        Decimal::new(self.max_cents, 2)
    }

    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min() && amount <= self.max()
    }

    fn sample(&self) -> Decimal {
        let cents = rand::thread_rng().gen_range(self.min_cents..=self.max_cents);
        Decimal::new(cents, 2)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min_cents: 1_000_000,
            max_cents: 4_000_000,
        }
    }
}

pub struct PricingService {
    prices: RwLock<HashMap<VehicleId, Price>>,
    range: PriceRange,
}

impl PricingService {
    pub fn new(range: PriceRange) -> Self {
        info!("💰 Pricing service listo, rango {} - {}", range.min(), range.max());
        Self {
            prices: RwLock::new(HashMap::new()),
            range,
        }
    }

    pub fn range(&self) -> PriceRange {
        self.range
    }

    /// Precio del vehículo, generado y memorizado en la primera consulta
    pub async fn get_price(&self, vehicle_id: VehicleId) -> AppResult<Price> {
        if vehicle_id <= 0 {
            return Err(bad_request_error("vehicleId must be a positive integer"));
        }

        if let Some(price) = self.prices.read().await.get(&vehicle_id) {
            debug!("📥 Precio memorizado para vehículo {}", vehicle_id);
            return Ok(price.clone());
        }

        // Otro request pudo generar el precio entre ambos locks: la entrada decide.
        let mut prices = self.prices.write().await;
        let range = self.range;
        let price = prices
            .entry(vehicle_id)
            .or_insert_with(|| {
                let price = Price::new(vehicle_id, range.sample());
                info!("🎲 Precio generado para vehículo {}: {}", vehicle_id, price.formatted_amount());
                price
            })
            .clone();

        Ok(price)
    }

    pub async fn tracked_vehicles(&self) -> usize {
        self.prices.read().await.len()
    }
}

impl Default for PricingService {
    fn default() -> Self {
        Self::new(PriceRange::default())
    }
}

/// Valida el parámetro `vehicleId` recibido por query string
pub fn parse_vehicle_id(raw: Option<&str>) -> AppResult<VehicleId> {
    let raw = raw
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| bad_request_error("Missing required parameter 'vehicleId'"))?;

    match raw.parse::<VehicleId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "Invalid vehicleId '{}': must be a positive integer",
            raw
        ))),
    }
}
