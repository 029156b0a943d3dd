use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::insurance_controller::InsuranceController;
use crate::dto::dashboard_dto::VehicleFilterQuery;
use crate::dto::insurance_dto::{
    CancelPolicyRequest, CreateClaimRequest, CreatePolicyRequest, UpdateClaimRequest, UpdatePolicyRequest,
};
use crate::dto::ApiResponse;
use crate::models::analytics::ClaimGroup;
use crate::models::InsurancePolicy;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_insurance_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_policy).get(list_policies))
        .route("/:id", get(get_policy).put(update_policy).delete(delete_policy))
        .route("/:id/cancel", put(set_cancelled))
        .route("/:id/claims", post(add_claim))
        .route("/:id/claims/summary", get(claims_summary))
        .route("/:id/claims/:claim_id", put(update_claim))
}

async fn create_policy(
    State(state): State<AppState>,
    Json(request): Json<CreatePolicyRequest>,
) -> Result<Json<ApiResponse<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InsurancePolicy>, AppError> {
    let response = InsuranceController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_policies(
    State(state): State<AppState>,
    Query(query): Query<VehicleFilterQuery>,
) -> Result<Json<Vec<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state).list(query.vehicle_id).await?;
    Ok(Json(response))
}

async fn update_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdatePolicyRequest>,
) -> Result<Json<ApiResponse<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn set_cancelled(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CancelPolicyRequest>,
) -> Result<Json<ApiResponse<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state).set_cancelled(id, request).await?;
    Ok(Json(response))
}

async fn delete_policy(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = InsuranceController::new(&state).delete(id).await?;
    Ok(Json(response))
}

async fn add_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<Json<ApiResponse<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state).add_claim(id, request).await?;
    Ok(Json(response))
}

async fn update_claim(
    State(state): State<AppState>,
    Path((id, claim_id)): Path<(Uuid, Uuid)>,
    Json(request): Json<UpdateClaimRequest>,
) -> Result<Json<ApiResponse<InsurancePolicy>>, AppError> {
    let response = InsuranceController::new(&state)
        .update_claim(id, claim_id, request)
        .await?;
    Ok(Json(response))
}

async fn claims_summary(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ClaimGroup>>, AppError> {
    let response = InsuranceController::new(&state).claims_summary(id).await?;
    Ok(Json(response))
}
