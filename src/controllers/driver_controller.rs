use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::{CreateDriverRequest, UpdateDriverRequest};
use crate::dto::ApiResponse;
use crate::models::Driver;
use crate::repositories::RecordFilter;
use crate::services::{AssignmentService, RecordService};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct DriverController {
    records: RecordService,
}

impl DriverController {
    pub fn new(state: &AppState) -> Self {
        Self {
            records: state.records(),
        }
    }

    pub async fn create(&self, request: CreateDriverRequest) -> AppResult<ApiResponse<Driver>> {
        request.validate()?;
        let driver = request.into_model(self.records.now());
        let driver = self.records.save(driver).await?;
        Ok(ApiResponse::success_with_message(driver, "Conductor creado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Driver> {
        self.records.get(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Driver>> {
        self.records.list(&RecordFilter::all()).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateDriverRequest) -> AppResult<ApiResponse<Driver>> {
        request.validate()?;
        let mut driver: Driver = self.records.get(id).await?;
        request.apply_to(&mut driver);
        let driver = self.records.save(driver).await?;
        Ok(ApiResponse::success_with_message(driver, "Conductor actualizado exitosamente"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        AssignmentService::new(self.records.clone()).delete_driver(id).await?;
        Ok(ApiResponse::message("Conductor eliminado exitosamente"))
    }
}
