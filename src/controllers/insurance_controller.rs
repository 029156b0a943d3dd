use uuid::Uuid;
use validator::Validate;

use crate::dto::insurance_dto::{
    CancelPolicyRequest, CreateClaimRequest, CreatePolicyRequest, UpdateClaimRequest, UpdatePolicyRequest,
};
use crate::dto::ApiResponse;
use crate::models::analytics::ClaimGroup;
use crate::models::InsurancePolicy;
use crate::repositories::RecordFilter;
use crate::services::{DashboardService, InsuranceService, RecordService};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct InsuranceController {
    records: RecordService,
    service: InsuranceService,
}

impl InsuranceController {
    pub fn new(state: &AppState) -> Self {
        let records = state.records();
        Self {
            service: InsuranceService::new(records.clone()),
            records,
        }
    }

    pub async fn create(&self, request: CreatePolicyRequest) -> AppResult<ApiResponse<InsurancePolicy>> {
        request.validate()?;
        let policy = request.into_model(self.records.now());
        let policy = self.service.create_policy(policy).await?;
        Ok(ApiResponse::success_with_message(policy, "Póliza creada exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<InsurancePolicy> {
        self.records.get(id).await
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> AppResult<Vec<InsurancePolicy>> {
        let filter = vehicle_id.map(RecordFilter::for_vehicle).unwrap_or_default();
        self.records.list(&filter).await
    }

    pub async fn update(&self, id: Uuid, request: UpdatePolicyRequest) -> AppResult<ApiResponse<InsurancePolicy>> {
        request.validate()?;
        let mut policy: InsurancePolicy = self.records.get(id).await?;
        request.apply_to(&mut policy);
        let policy = self.service.update_policy(policy).await?;
        Ok(ApiResponse::success_with_message(policy, "Póliza actualizada exitosamente"))
    }

    pub async fn set_cancelled(
        &self,
        id: Uuid,
        request: CancelPolicyRequest,
    ) -> AppResult<ApiResponse<InsurancePolicy>> {
        let policy = self.service.set_cancelled(id, request.cancelled).await?;
        Ok(ApiResponse::success(policy))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.records.delete::<InsurancePolicy>(id).await?;
        Ok(ApiResponse::message("Póliza eliminada exitosamente"))
    }

    pub async fn add_claim(&self, id: Uuid, request: CreateClaimRequest) -> AppResult<ApiResponse<InsurancePolicy>> {
        request.validate()?;
        let policy = self.service.add_claim(id, request.into_model()).await?;
        Ok(ApiResponse::success_with_message(policy, "Siniestro declarado exitosamente"))
    }

    pub async fn update_claim(
        &self,
        id: Uuid,
        claim_id: Uuid,
        request: UpdateClaimRequest,
    ) -> AppResult<ApiResponse<InsurancePolicy>> {
        request.validate()?;
        let policy = self
            .service
            .update_claim(id, claim_id, |claim| request.apply_to(claim))
            .await?;
        Ok(ApiResponse::success(policy))
    }

    pub async fn claims_summary(&self, id: Uuid) -> AppResult<Vec<ClaimGroup>> {
        DashboardService::new(self.records.clone()).claims_breakdown(id).await
    }
}
