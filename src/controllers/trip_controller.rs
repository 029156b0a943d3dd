use uuid::Uuid;
use validator::Validate;

use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest, UpdateTripRequest};
use crate::dto::ApiResponse;
use crate::models::Trip;
use crate::repositories::RecordFilter;
use crate::services::{RecordService, TripCompletion, TripOutcome, TripService};
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct TripController {
    records: RecordService,
    service: TripService,
}

impl TripController {
    pub fn new(state: &AppState) -> Self {
        let records = state.records();
        Self {
            service: TripService::new(records.clone()),
            records,
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> AppResult<ApiResponse<TripOutcome>> {
        request.validate()?;
        let trip = request.into_model(self.records.now());
        let outcome = self.service.create_trip(trip).await?;
        Ok(ApiResponse::success_with_message(outcome, "Viaje creado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Trip> {
        self.records.get(id).await
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> AppResult<Vec<Trip>> {
        let filter = vehicle_id.map(RecordFilter::for_vehicle).unwrap_or_default();
        self.records.list(&filter).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateTripRequest) -> AppResult<ApiResponse<TripOutcome>> {
        request.validate()?;
        let mut trip: Trip = self.records.get(id).await?;
        request.apply_to(&mut trip);
        let outcome = self.service.update_trip(trip).await?;
        Ok(ApiResponse::success_with_message(outcome, "Viaje actualizado exitosamente"))
    }

    pub async fn complete(&self, id: Uuid, request: CompleteTripRequest) -> AppResult<ApiResponse<TripCompletion>> {
        request.validate()?;
        let completion = self.service.complete_trip(id, request.odometer_end).await?;
        Ok(ApiResponse::success_with_message(completion, "Viaje completado"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.records.delete::<Trip>(id).await?;
        Ok(ApiResponse::message("Viaje eliminado exitosamente"))
    }
}
