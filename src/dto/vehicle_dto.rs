use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Vehicle, VehicleStatus};
use crate::utils::validation::{validate_license_plate, validate_not_blank};

// Request para crear un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    pub fuel_type: Option<String>,
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
}

impl CreateVehicleRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> Vehicle {
        let mut vehicle = Vehicle::new(
            self.license_plate,
            self.fuel_type.unwrap_or_else(|| "diesel".to_string()),
            self.odometer.unwrap_or(0),
            now,
        );
        vehicle.brand = self.brand;
        vehicle.model = self.model;
        vehicle.year = self.year;
        vehicle
    }
}

// Request para actualizar un vehículo. El conductor asignado solo cambia
// por las rutas de asignación.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(custom = "validate_license_plate")]
    pub license_plate: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    #[validate(range(min = 1900, max = 2100))]
    pub year: Option<i32>,
    #[validate(custom = "validate_not_blank")]
    pub fuel_type: Option<String>,
    pub status: Option<VehicleStatus>,
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
}

impl UpdateVehicleRequest {
    pub fn apply_to(self, vehicle: &mut Vehicle) {
        if let Some(plate) = self.license_plate {
            vehicle.license_plate = plate;
        }
        if self.brand.is_some() {
            vehicle.brand = self.brand;
        }
        if self.model.is_some() {
            vehicle.model = self.model;
        }
        if self.year.is_some() {
            vehicle.year = self.year;
        }
        if let Some(fuel_type) = self.fuel_type {
            vehicle.fuel_type = fuel_type;
        }
        if let Some(status) = self.status {
            vehicle.status = status;
        }
        if let Some(odometer) = self.odometer {
            vehicle.odometer = odometer;
        }
    }
}

// Request para asignar un conductor
#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub driver_id: Uuid,
}
