use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::trip_controller::TripController;
use crate::dto::dashboard_dto::VehicleFilterQuery;
use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest, UpdateTripRequest};
use crate::dto::ApiResponse;
use crate::models::Trip;
use crate::services::{TripCompletion, TripOutcome};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_trip).get(list_trips))
        .route("/:id", get(get_trip).put(update_trip).delete(delete_trip))
        .route("/:id/complete", post(complete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<Json<ApiResponse<TripOutcome>>, AppError> {
    let response = TripController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Trip>, AppError> {
    let response = TripController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<VehicleFilterQuery>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let response = TripController::new(&state).list(query.vehicle_id).await?;
    Ok(Json(response))
}

async fn update_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTripRequest>,
) -> Result<Json<ApiResponse<TripOutcome>>, AppError> {
    let response = TripController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CompleteTripRequest>,
) -> Result<Json<ApiResponse<TripCompletion>>, AppError> {
    let response = TripController::new(&state).complete(id, request).await?;
    Ok(Json(response))
}

async fn delete_trip(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = TripController::new(&state).delete(id).await?;
    Ok(Json(response))
}
