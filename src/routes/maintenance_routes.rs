use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::maintenance_controller::MaintenanceController;
use crate::dto::dashboard_dto::VehicleFilterQuery;
use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::dto::ApiResponse;
use crate::models::MaintenanceJob;
use crate::services::{MaintenanceCompletion, MaintenanceOutcome};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_maintenance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_job).get(list_jobs))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
        .route("/:id/complete", post(complete_job))
}

async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceOutcome>>, AppError> {
    let response = MaintenanceController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaintenanceJob>, AppError> {
    let response = MaintenanceController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_jobs(
    State(state): State<AppState>,
    Query(query): Query<VehicleFilterQuery>,
) -> Result<Json<Vec<MaintenanceJob>>, AppError> {
    let response = MaintenanceController::new(&state).list(query.vehicle_id).await?;
    Ok(Json(response))
}

async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaintenanceRequest>,
) -> Result<Json<ApiResponse<MaintenanceOutcome>>, AppError> {
    let response = MaintenanceController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn complete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MaintenanceCompletion>>, AppError> {
    let response = MaintenanceController::new(&state).complete(id).await?;
    Ok(Json(response))
}

async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = MaintenanceController::new(&state).delete(id).await?;
    Ok(Json(response))
}
