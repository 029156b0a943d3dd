use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::fuel_controller::FuelController;
use crate::dto::dashboard_dto::VehicleFilterQuery;
use crate::dto::fuel_dto::{CreateFuelRequest, UpdateFuelRequest};
use crate::dto::ApiResponse;
use crate::models::FuelRecord;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_record).get(list_records))
        .route("/:id", get(get_record).put(update_record).delete(delete_record))
}

async fn create_record(
    State(state): State<AppState>,
    Json(request): Json<CreateFuelRequest>,
) -> Result<Json<ApiResponse<FuelRecord>>, AppError> {
    let response = FuelController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FuelRecord>, AppError> {
    let response = FuelController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_records(
    State(state): State<AppState>,
    Query(query): Query<VehicleFilterQuery>,
) -> Result<Json<Vec<FuelRecord>>, AppError> {
    let response = FuelController::new(&state).list(query.vehicle_id).await?;
    Ok(Json(response))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelRequest>,
) -> Result<Json<ApiResponse<FuelRecord>>, AppError> {
    let response = FuelController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = FuelController::new(&state).delete(id).await?;
    Ok(Json(response))
}
