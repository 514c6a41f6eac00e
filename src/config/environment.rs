//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración de ambos binarios a partir de
//! variables de entorno (cargadas también desde `.env` con dotenvy).
//! Los valores inválidos son errores de arranque, nunca panics.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use rust_decimal::Decimal;

use super::database::DatabaseConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_PRICING_PORT: u16 = 8082;
pub const DEFAULT_PRICING_URL: &str = "http://localhost:8082";
pub const DEFAULT_MAPS_URL: &str = "http://localhost:9191";
pub const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 5;

/// Lectura de una variable: `None` si no está definida o está vacía
fn lookup_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup_var(lookup, key) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow!("{} must be valid ('{}'): {}", key, raw, e)),
        None => Ok(default),
    }
}

fn parse_list<F>(lookup: &F, key: &str) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup_var(lookup, key)
        .map(|raw| {
            raw.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", host, port))
}

/// Configuración de la API de vehículos
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub database: Option<DatabaseConfig>,
    pub pricing_url: String,
    pub maps_url: String,
    pub mapbox_token: Option<String>,
    pub collaborator_timeout: Duration,
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = parse_var(
            &lookup,
            "COLLABORATOR_TIMEOUT_SECS",
            DEFAULT_COLLABORATOR_TIMEOUT_SECS,
        )?;
        if timeout_secs == 0 {
            return Err(anyhow!("COLLABORATOR_TIMEOUT_SECS must be greater than zero"));
        }

        Ok(Self {
            host: lookup_var(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            cors_origins: parse_list(&lookup, "CORS_ORIGINS"),
            database: DatabaseConfig::from_lookup(&lookup)?,
            pricing_url: lookup_var(&lookup, "PRICING_URL")
                .unwrap_or_else(|| DEFAULT_PRICING_URL.to_string()),
            maps_url: lookup_var(&lookup, "MAPS_URL").unwrap_or_else(|| DEFAULT_MAPS_URL.to_string()),
            mapbox_token: lookup_var(&lookup, "MAPBOX_TOKEN"),
            collaborator_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Dirección de escucha del servidor
    pub fn server_addr(&self) -> Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}

/// Configuración del servicio de pricing
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub price_min: Decimal,
    pub price_max: Decimal,
}

impl PricingConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: lookup_var(&lookup, "HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PRICING_PORT", DEFAULT_PRICING_PORT)?,
            cors_origins: parse_list(&lookup, "CORS_ORIGINS"),
            price_min: parse_var(&lookup, "PRICE_MIN", Decimal::new(10_000_00, 2))?,
            price_max: parse_var(&lookup, "PRICE_MAX", Decimal::new(40_000_00, 2))?,
        })
    }

    pub fn server_addr(&self) -> Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }
}
