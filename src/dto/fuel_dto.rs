use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::FuelRecord;
use crate::utils::validation::validate_non_negative_amount;

// Request para registrar un repostaje; `total_cost` se deriva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelRequest {
    pub vehicle_id: Uuid,
    pub date: Option<DateTime<Utc>>,
    #[validate(custom = "validate_non_negative_amount")]
    pub liters: Decimal,
    #[validate(custom = "validate_non_negative_amount")]
    pub price_per_liter: Decimal,
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
    pub station: Option<String>,
}

impl CreateFuelRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> FuelRecord {
        let mut record = FuelRecord::new(
            self.vehicle_id,
            self.date.unwrap_or(now),
            self.liters,
            self.price_per_liter,
            now,
        );
        record.odometer = self.odometer;
        record.station = self.station;
        record
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuelRequest {
    pub date: Option<DateTime<Utc>>,
    #[validate(custom = "validate_non_negative_amount")]
    pub liters: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub price_per_liter: Option<Decimal>,
    #[validate(range(min = 0))]
    pub odometer: Option<i64>,
    pub station: Option<String>,
}

impl UpdateFuelRequest {
    pub fn apply_to(self, record: &mut FuelRecord) {
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(liters) = self.liters {
            record.liters = liters;
        }
        if let Some(price) = self.price_per_liter {
            record.price_per_liter = price;
        }
        if self.odometer.is_some() {
            record.odometer = self.odometer;
        }
        if self.station.is_some() {
            record.station = self.station;
        }
    }
}
