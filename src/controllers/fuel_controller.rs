use uuid::Uuid;
use validator::Validate;

use crate::dto::fuel_dto::{CreateFuelRequest, UpdateFuelRequest};
use crate::dto::ApiResponse;
use crate::models::{FuelRecord, Vehicle};
use crate::repositories::RecordFilter;
use crate::services::RecordService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct FuelController {
    records: RecordService,
}

impl FuelController {
    pub fn new(state: &AppState) -> Self {
        Self {
            records: state.records(),
        }
    }

    pub async fn create(&self, request: CreateFuelRequest) -> AppResult<ApiResponse<FuelRecord>> {
        request.validate()?;
        self.records.get::<Vehicle>(request.vehicle_id).await?;

        let record = request.into_model(self.records.now());
        let record = self.records.save(record).await?;
        Ok(ApiResponse::success_with_message(record, "Repostaje registrado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<FuelRecord> {
        self.records.get(id).await
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> AppResult<Vec<FuelRecord>> {
        let filter = vehicle_id.map(RecordFilter::for_vehicle).unwrap_or_default();
        self.records.list(&filter).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateFuelRequest) -> AppResult<ApiResponse<FuelRecord>> {
        request.validate()?;
        let mut record: FuelRecord = self.records.get(id).await?;
        request.apply_to(&mut record);
        let record = self.records.save(record).await?;
        Ok(ApiResponse::success(record))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.records.delete::<FuelRecord>(id).await?;
        Ok(ApiResponse::message("Repostaje eliminado exitosamente"))
    }
}
