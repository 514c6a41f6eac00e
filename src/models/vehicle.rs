//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle del dominio y sus value objects.
//! El precio y la dirección resuelta nunca forman parte del registro
//! persistido: solo existen en `EnrichedVehicle`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identificador numérico asignado por el almacenamiento
pub type VehicleId = i64;

/// Estado del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Condition {
    #[default]
    Used,
    New,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Used => "USED",
            Condition::New => "NEW",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USED" => Ok(Condition::Used),
            "NEW" => Ok(Condition::New),
            other => Err(format!("unknown vehicle condition '{}'", other)),
        }
    }
}

/// Detalles estructurales del vehículo (value object)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Details {
    pub make: String,
    pub model: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub number_of_doors: Option<i32>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
    #[serde(default)]
    pub mileage: Option<i32>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub production_year: Option<i32>,
    #[serde(default)]
    pub color: Option<String>,
}

impl Details {
    pub fn new(make: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            ..Self::default()
        }
    }

    /// Etiqueta legible: "2018 Chevrolet Volt"
    pub fn display_label(&self) -> String {
        match self.year {
            Some(year) => format!("{} {} {}", year, self.make, self.model),
            None => format!("{} {}", self.make, self.model),
        }
    }
}

/// Par de coordenadas
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Dirección resuelta por el servicio de mapas (transitoria)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    pub address: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
}

/// Campos mutables de un vehículo, los únicos que copia un update
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleData {
    pub condition: Condition,
    pub details: Details,
    pub location: Coordinates,
}

/// Vehicle tal como vive en el almacenamiento
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub condition: Condition,
    pub details: Details,
    pub location: Coordinates,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Vehicle {
    /// Copia detalles, ubicación y estado sobre el registro existente
    pub fn merge(&mut self, data: VehicleData) {
        self.condition = data.condition;
        self.details = data.details;
        self.location = data.location;
    }

    pub fn display(&self) -> String {
        self.details.display_label()
    }
}

/// Vehicle con precio y dirección resueltos en el momento de la lectura
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedVehicle {
    pub vehicle: Vehicle,
    pub price: String,
    pub address: Address,
}
