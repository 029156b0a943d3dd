use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{MaintenanceJob, WorkStatus};
use crate::utils::validation::{validate_non_negative_amount, validate_not_blank};

// Request para programar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMaintenanceRequest {
    pub vehicle_id: Uuid,
    #[validate(custom = "validate_not_blank")]
    pub maintenance_type: String,
    pub description: Option<String>,
    pub status: Option<WorkStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub odometer_at_service: i64,
    #[validate(range(min = 0))]
    pub next_service_odometer: Option<i64>,
    #[validate(custom = "validate_non_negative_amount")]
    pub cost: Option<Decimal>,
    pub provider: Option<String>,
}

impl CreateMaintenanceRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> MaintenanceJob {
        let mut job = MaintenanceJob::new(self.vehicle_id, self.maintenance_type, self.odometer_at_service, now);
        job.description = self.description;
        job.status = self.status.unwrap_or_default();
        job.scheduled_date = self.scheduled_date;
        job.completed_date = self.completed_date;
        job.next_service_odometer = self.next_service_odometer;
        job.cost = self.cost;
        job.provider = self.provider;
        job
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMaintenanceRequest {
    #[validate(custom = "validate_not_blank")]
    pub maintenance_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<WorkStatus>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub odometer_at_service: Option<i64>,
    #[validate(range(min = 0))]
    pub next_service_odometer: Option<i64>,
    #[validate(custom = "validate_non_negative_amount")]
    pub cost: Option<Decimal>,
    pub provider: Option<String>,
}

impl UpdateMaintenanceRequest {
    pub fn apply_to(self, job: &mut MaintenanceJob) {
        if let Some(maintenance_type) = self.maintenance_type {
            job.maintenance_type = maintenance_type;
        }
        if self.description.is_some() {
            job.description = self.description;
        }
        if let Some(status) = self.status {
            job.status = status;
        }
        if self.scheduled_date.is_some() {
            job.scheduled_date = self.scheduled_date;
        }
        if self.completed_date.is_some() {
            job.completed_date = self.completed_date;
        }
        if let Some(odometer) = self.odometer_at_service {
            job.odometer_at_service = odometer;
        }
        if self.next_service_odometer.is_some() {
            job.next_service_odometer = self.next_service_odometer;
        }
        if self.cost.is_some() {
            job.cost = self.cost;
        }
        if self.provider.is_some() {
            job.provider = self.provider;
        }
    }
}
