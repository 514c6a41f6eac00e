//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y el extractor `ValidatedJson` que deserializa y valida el body.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use super::errors::AppError;

/// Body JSON deserializado y validado.
///
/// Cualquier fallo (JSON mal formado, tipos incorrectos o reglas de
/// validación) se devuelve como `AppError` con status 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de coordenadas GPS
pub fn validate_coordinates(lat: f64, lon: f64) -> Result<(), ValidationError> {
    if !(-90.0..=90.0).contains(&lat) {
        let mut error = ValidationError::new("latitude");
        error.add_param("value".into(), &lat);
        error.add_param("range".into(), &"-90.0 to 90.0".to_string());
        return Err(error);
    }

    if !(-180.0..=180.0).contains(&lon) {
        let mut error = ValidationError::new("longitude");
        error.add_param("value".into(), &lon);
        error.add_param("range".into(), &"-180.0 to 180.0".to_string());
        return Err(error);
    }

    Ok(())
}
