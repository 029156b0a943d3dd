use uuid::Uuid;
use validator::Validate;

use crate::dto::maintenance_dto::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::dto::ApiResponse;
use crate::models::MaintenanceJob;
use crate::repositories::RecordFilter;
use crate::services::{MaintenanceCompletion, MaintenanceOutcome, MaintenanceService, RecordService};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct MaintenanceController {
    records: RecordService,
    service: MaintenanceService,
}

impl MaintenanceController {
    pub fn new(state: &AppState) -> Self {
        let records = state.records();
        Self {
            service: MaintenanceService::new(records.clone()),
            records,
        }
    }

    pub async fn create(&self, request: CreateMaintenanceRequest) -> AppResult<ApiResponse<MaintenanceOutcome>> {
        request.validate()?;
        let job = request.into_model(self.records.now());
        let outcome = self.service.create_job(job).await?;
        Ok(ApiResponse::success_with_message(outcome, "Mantenimiento registrado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<MaintenanceJob> {
        self.records.get(id).await
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> AppResult<Vec<MaintenanceJob>> {
        let filter = vehicle_id.map(RecordFilter::for_vehicle).unwrap_or_default();
        self.records.list(&filter).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateMaintenanceRequest,
    ) -> AppResult<ApiResponse<MaintenanceOutcome>> {
        request.validate()?;
        let mut job: MaintenanceJob = self.records.get(id).await?;
        request.apply_to(&mut job);
        let outcome = self.service.update_job(job).await?;
        Ok(ApiResponse::success_with_message(outcome, "Mantenimiento actualizado exitosamente"))
    }

    pub async fn complete(&self, id: Uuid) -> AppResult<ApiResponse<MaintenanceCompletion>> {
        let completion = self.service.complete_maintenance_job(id).await?;
        Ok(ApiResponse::success_with_message(completion, "Mantenimiento completado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.records.delete::<MaintenanceJob>(id).await?;
        Ok(ApiResponse::message("Mantenimiento eliminado exitosamente"))
    }
}
