use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;

use super::VehicleRepository;
use crate::models::{Condition, Coordinates, Details, Vehicle, VehicleData, VehicleId};
use crate::utils::errors::{not_found_error, AppError, AppResult};

// Fila de la tabla vehicles. No hay columna de precio ni de dirección.
#[derive(Debug, sqlx::FromRow)]
pub struct VehicleRow {
    pub id: i64,
    pub condition: String,
    pub details: Json<Details>,
    pub lat: f64,
    pub lon: f64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl TryFrom<VehicleRow> for Vehicle {
    type Error = AppError;

    fn try_from(row: VehicleRow) -> Result<Self, Self::Error> {
        let condition = row
            .condition
            .parse::<Condition>()
            .map_err(|e| AppError::Internal(format!("Corrupt vehicle row {}: {}", row.id, e)))?;

        Ok(Vehicle {
            id: row.id,
            condition,
            details: row.details.0,
            location: Coordinates::new(row.lat, row.lon),
            created_at: row.created_at,
            modified_at: row.modified_at,
        })
    }
}

const VEHICLE_COLUMNS: &str = "id, condition, details, lat, lon, created_at, modified_at";

#[derive(Clone)]
pub struct PgVehicleRepository {
    pool: PgPool,
}

impl PgVehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PgVehicleRepository {
    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let rows = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles ORDER BY id",
            VEHICLE_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Vehicle::try_from).collect()
    }

    async fn find_by_id(&self, id: VehicleId) -> AppResult<Option<Vehicle>> {
        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            "SELECT {} FROM vehicles WHERE id = $1",
            VEHICLE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Vehicle::try_from).transpose()
    }

    async fn create(&self, data: VehicleData) -> AppResult<Vehicle> {
        let now = Utc::now();

        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            INSERT INTO vehicles (condition, details, lat, lon, created_at, modified_at)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(data.condition.as_str())
        .bind(Json(&data.details))
        .bind(data.location.lat)
        .bind(data.location.lon)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Vehicle::try_from(row)
    }

    async fn update(&self, vehicle: &Vehicle) -> AppResult<Vehicle> {
        let row = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"
            UPDATE vehicles
            SET condition = $2, details = $3, lat = $4, lon = $5, modified_at = $6
            WHERE id = $1
            RETURNING {}
            "#,
            VEHICLE_COLUMNS
        ))
        .bind(vehicle.id)
        .bind(vehicle.condition.as_str())
        .bind(Json(&vehicle.details))
        .bind(vehicle.location.lat)
        .bind(vehicle.location.lon)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Vehicle::try_from(row),
            // Borrado entre la lectura y la escritura
            None => Err(not_found_error("Vehicle", vehicle.id)),
        }
    }

    async fn delete(&self, id: VehicleId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn volt_details() -> Details {
        Details {
            year: Some(2018),
            mileage: Some(32280),
            color: Some("white".to_string()),
            ..Details::new("Chevrolet", "Volt")
        }
    }

    fn row(condition: &str, details: serde_json::Value) -> VehicleRow {
        let now = Utc::now();
        VehicleRow {
            id: 7,
            condition: condition.to_string(),
            details: Json(serde_json::from_value(details).unwrap()),
            lat: 40.730610,
            lon: -73.935242,
            created_at: now,
            modified_at: now,
        }
    }

    #[test]
    fn test_row_maps_into_vehicle() {
        let stored = serde_json::to_value(volt_details()).unwrap();
        let vehicle = Vehicle::try_from(row("NEW", stored)).unwrap();

        assert_eq!(vehicle.id, 7);
        assert_eq!(vehicle.condition, Condition::New);
        assert_eq!(vehicle.details, volt_details());
        assert_eq!(vehicle.location, Coordinates::new(40.730610, -73.935242));
        assert_eq!(vehicle.display(), "2018 Chevrolet Volt");
    }

    #[test]
    fn test_row_with_unknown_condition_is_internal_error() {
        let stored = serde_json::json!({ "make": "Chevrolet", "model": "Volt" });
        let result = Vehicle::try_from(row("SALVAGE", stored));

        assert!(matches!(result, Err(AppError::Internal(_))));
    }
}
