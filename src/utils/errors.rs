//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("External API timeout: {0}")]
    ExternalApiTimeout(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::ExternalApiTimeout(e.to_string())
        } else {
            AppError::ExternalApi(e.to_string())
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: String,
}

impl AppError {
    /// Código HTTP asociado a cada variante
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ExternalApi(_) => StatusCode::BAD_GATEWAY,
            AppError::ExternalApiTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ {}", self);
        } else {
            warn!("⚠️ {}", self);
        }

        let error_response = match self {
            AppError::Database(_) => ErrorResponse {
                error: "Database Error".to_string(),
                message: "An error occurred while accessing the database".to_string(),
                details: None,
                code: "DB_ERROR".to_string(),
            },

            AppError::Validation(e) => ErrorResponse {
                error: "Validation Error".to_string(),
                message: "The provided data is invalid".to_string(),
                details: serde_json::to_value(&e).ok(),
                code: "VALIDATION_ERROR".to_string(),
            },

            AppError::NotFound(msg) => ErrorResponse {
                error: "Not Found".to_string(),
                message: msg,
                details: None,
                code: "NOT_FOUND".to_string(),
            },

            AppError::BadRequest(msg) => ErrorResponse {
                error: "Bad Request".to_string(),
                message: msg,
                details: None,
                code: "BAD_REQUEST".to_string(),
            },

            AppError::ExternalApi(_) => ErrorResponse {
                error: "External API Error".to_string(),
                message: "An error occurred while communicating with external service".to_string(),
                details: None,
                code: "EXTERNAL_API_ERROR".to_string(),
            },

            AppError::ExternalApiTimeout(_) => ErrorResponse {
                error: "External API Timeout".to_string(),
                message: "An external service did not answer in time".to_string(),
                details: None,
                code: "EXTERNAL_API_TIMEOUT".to_string(),
            },

            AppError::Internal(_) => ErrorResponse {
                error: "Internal Server Error".to_string(),
                message: "An unexpected error occurred".to_string(),
                details: None,
                code: "INTERNAL_ERROR".to_string(),
            },
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: impl std::fmt::Display) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(not_found_error("Vehicle", 7).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(bad_request_error("nope").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::ExternalApi("down".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::ExternalApiTimeout("slow".into()).status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_not_leaked() {
        let response = AppError::Internal("secret connection string".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(!text.contains("secret"));
        assert!(text.contains("INTERNAL_ERROR"));
    }

    #[test]
    fn test_not_found_message() {
        let err = not_found_error("Vehicle", 42);
        assert_eq!(err.to_string(), "Not found: Vehicle with id '42' not found");
    }
}
