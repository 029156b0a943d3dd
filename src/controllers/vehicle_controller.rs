use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{AssignDriverRequest, CreateVehicleRequest, UpdateVehicleRequest};
use crate::dto::ApiResponse;
use crate::models::Vehicle;
use crate::repositories::RecordFilter;
use crate::services::{Assignment, AssignmentService, RecordService, Release};
use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    records: RecordService,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            records: state.records(),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<ApiResponse<Vehicle>> {
        request.validate()?;

        // Verificar que la matrícula no exista
        self.ensure_unique_plate(&request.license_plate, None).await?;

        let vehicle = request.into_model(self.records.now());
        let vehicle = self.records.save(vehicle).await?;

        Ok(ApiResponse::success_with_message(vehicle, "Vehículo creado exitosamente"))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Vehicle> {
        self.records.get(id).await
    }

    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        self.records.list(&RecordFilter::all()).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateVehicleRequest) -> AppResult<ApiResponse<Vehicle>> {
        request.validate()?;
        let mut vehicle: Vehicle = self.records.get(id).await?;

        if let Some(plate) = request.license_plate.as_deref() {
            self.ensure_unique_plate(plate, Some(id)).await?;
        }
        request.apply_to(&mut vehicle);
        let vehicle = self.records.save(vehicle).await?;

        Ok(ApiResponse::success_with_message(vehicle, "Vehículo actualizado exitosamente"))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        AssignmentService::new(self.records.clone()).delete_vehicle(id).await?;
        Ok(ApiResponse::message("Vehículo eliminado exitosamente"))
    }

    pub async fn assign_driver(&self, id: Uuid, request: AssignDriverRequest) -> AppResult<ApiResponse<Assignment>> {
        let assignment = AssignmentService::new(self.records.clone())
            .assign_driver_to_vehicle(id, request.driver_id)
            .await?;
        Ok(ApiResponse::success_with_message(assignment, "Conductor asignado exitosamente"))
    }

    pub async fn release_driver(&self, id: Uuid) -> AppResult<ApiResponse<Release>> {
        let release = AssignmentService::new(self.records.clone()).release_driver(id).await?;
        Ok(ApiResponse::success(release))
    }

    async fn ensure_unique_plate(&self, plate: &str, exclude: Option<Uuid>) -> AppResult<()> {
        let wanted = normalize_plate(plate);
        let vehicles: Vec<Vehicle> = self.records.list(&RecordFilter::all()).await?;
        let taken = vehicles
            .iter()
            .any(|v| Some(v.id) != exclude && normalize_plate(&v.license_plate) == wanted);
        if taken {
            return Err(AppError::Conflict(format!("License plate {} is already registered", plate)));
        }
        Ok(())
    }
}

fn normalize_plate(plate: &str) -> String {
    plate
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plate() {
        assert_eq!(normalize_plate("ab-123 cd"), "AB123CD");
        assert_eq!(normalize_plate("AB123CD"), normalize_plate("ab 123-cd"));
    }
}
