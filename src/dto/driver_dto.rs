use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::{Driver, DriverStatus};
use crate::utils::validation::validate_not_blank;

// Request para crear un conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(custom = "validate_not_blank")]
    pub first_name: String,
    #[validate(custom = "validate_not_blank")]
    pub last_name: String,
    #[validate(custom = "validate_not_blank")]
    pub license_number: String,
    pub license_expiration_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<DriverStatus>,
}

impl CreateDriverRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> Driver {
        let mut driver = Driver::new(self.first_name, self.last_name, self.license_number, now);
        driver.license_expiration_date = self.license_expiration_date;
        driver.phone = self.phone;
        driver.email = self.email;
        driver.status = self.status.unwrap_or_default();
        driver
    }
}

// Request para actualizar un conductor; el vehículo asignado no se toca aquí
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(custom = "validate_not_blank")]
    pub first_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub last_name: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub license_number: Option<String>,
    pub license_expiration_date: Option<DateTime<Utc>>,
    pub phone: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub status: Option<DriverStatus>,
}

impl UpdateDriverRequest {
    pub fn apply_to(self, driver: &mut Driver) {
        if let Some(first_name) = self.first_name {
            driver.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            driver.last_name = last_name;
        }
        if let Some(license_number) = self.license_number {
            driver.license_number = license_number;
        }
        if self.license_expiration_date.is_some() {
            driver.license_expiration_date = self.license_expiration_date;
        }
        if self.phone.is_some() {
            driver.phone = self.phone;
        }
        if self.email.is_some() {
            driver.email = self.email;
        }
        if let Some(status) = self.status {
            driver.status = status;
        }
    }
}
