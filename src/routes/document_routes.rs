use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::document_controller::DocumentController;
use crate::dto::document_dto::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::ApiResponse;
use crate::models::ComplianceDocument;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_document_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_document).get(list_documents))
        .route("/:id", get(get_document).put(update_document).delete(delete_document))
}

async fn create_document(
    State(state): State<AppState>,
    Json(request): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<ComplianceDocument>>, AppError> {
    let response = DocumentController::new(&state).create(request).await?;
    Ok(Json(response))
}

async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ComplianceDocument>, AppError> {
    let response = DocumentController::new(&state).get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_documents(State(state): State<AppState>) -> Result<Json<Vec<ComplianceDocument>>, AppError> {
    let response = DocumentController::new(&state).list().await?;
    Ok(Json(response))
}

async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateDocumentRequest>,
) -> Result<Json<ApiResponse<ComplianceDocument>>, AppError> {
    let response = DocumentController::new(&state).update(id, request).await?;
    Ok(Json(response))
}

async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let response = DocumentController::new(&state).delete(id).await?;
    Ok(Json(response))
}
