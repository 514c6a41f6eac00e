use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{VehicleRequest, VehicleResponse};
use crate::models::VehicleId;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

// Un id no numérico se trata como input inválido (400), no como 404
fn vehicle_id(path: Result<Path<VehicleId>, PathRejection>) -> Result<VehicleId, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}

async fn create_vehicle(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<impl IntoResponse, AppError> {
    let controller = VehicleController::new(state.vehicle_service.clone());
    let response = controller.create(request).await?;
    let location = format!("/vehicles/{}", response.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

async fn get_vehicle(
    State(state): State<AppState>,
    path: Result<Path<VehicleId>, PathRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let id = vehicle_id(path)?;
    let controller = VehicleController::new(state.vehicle_service.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.vehicle_service.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    path: Result<Path<VehicleId>, PathRejection>,
    ValidatedJson(request): ValidatedJson<VehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let id = vehicle_id(path)?;
    let controller = VehicleController::new(state.vehicle_service.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    path: Result<Path<VehicleId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = vehicle_id(path)?;
    let controller = VehicleController::new(state.vehicle_service.clone());
    controller.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
