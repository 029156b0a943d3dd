use uuid::Uuid;
use validator::Validate;

use crate::dto::document_dto::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::ApiResponse;
use crate::models::ComplianceDocument;
use crate::repositories::RecordFilter;
use crate::services::RecordService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct DocumentController {
    records: RecordService,
}

impl DocumentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            records: state.records(),
        }
    }

    pub async fn create(&self, request: CreateDocumentRequest) -> AppResult<ApiResponse<ComplianceDocument>> {
        request.validate()?;
        let doc = request.into_model(self.records.now());
        let doc = self.records.save(doc).await?;
        Ok(ApiResponse::success_with_message(doc, "Documento registrado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<ComplianceDocument> {
        self.records.get(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<ComplianceDocument>> {
        self.records.list(&RecordFilter::all()).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDocumentRequest,
    ) -> AppResult<ApiResponse<ComplianceDocument>> {
        request.validate()?;
        let mut doc: ComplianceDocument = self.records.get(id).await?;
        request.apply_to(&mut doc);
        let doc = self.records.save(doc).await?;
        Ok(ApiResponse::success_with_message(doc, "Documento actualizado exitosamente"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.records.delete::<ComplianceDocument>(id).await?;
        Ok(ApiResponse::message("Documento eliminado exitosamente"))
    }
}
