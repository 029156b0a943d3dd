use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::admin_controller::AdminController;
use crate::dto::dashboard_dto::{CostQuery, ExpirationQuery};
use crate::dto::ApiResponse;
use crate::models::analytics::{CostSummary, ExpirationSummary};
use crate::services::RefreshReport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router() -> Router<AppState> {
    Router::new().route("/refresh/:entity", post(refresh_statuses))
}

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/expirations", get(expirations))
        .route("/costs", get(costs))
}

async fn refresh_statuses(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> Result<Json<ApiResponse<RefreshReport>>, AppError> {
    let response = AdminController::new(&state).refresh(&entity).await?;
    Ok(Json(response))
}

async fn expirations(
    State(state): State<AppState>,
    Query(query): Query<ExpirationQuery>,
) -> Result<Json<ExpirationSummary>, AppError> {
    let response = AdminController::new(&state).expirations(query).await?;
    Ok(Json(response))
}

async fn costs(
    State(state): State<AppState>,
    Query(query): Query<CostQuery>,
) -> Result<Json<CostSummary>, AppError> {
    let response = AdminController::new(&state).costs(query).await?;
    Ok(Json(response))
}
