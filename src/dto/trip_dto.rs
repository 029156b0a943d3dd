use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Trip, WorkStatus};
use crate::utils::validation::{validate_date_order, validate_non_negative_amount, validate_not_blank};

// Request para crear un viaje. `distance` y `total_cost` no se aceptan:
// se derivan al guardar.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_create_trip_dates"))]
pub struct CreateTripRequest {
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    #[validate(custom = "validate_not_blank")]
    pub origin: String,
    #[validate(custom = "validate_not_blank")]
    pub destination: String,
    pub purpose: Option<String>,
    pub status: Option<WorkStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub odometer_start: i64,
    #[validate(range(min = 0))]
    pub odometer_end: Option<i64>,
    #[validate(custom = "validate_non_negative_amount")]
    pub toll_fees: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub parking_fees: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub other_fees: Option<Decimal>,
}

fn validate_create_trip_dates(request: &CreateTripRequest) -> Result<(), ValidationError> {
    match (request.start_date, request.end_date) {
        (Some(start), Some(end)) => validate_date_order(start, end),
        _ => Ok(()),
    }
}

impl CreateTripRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> Trip {
        let mut trip = Trip::new(self.vehicle_id, self.origin, self.destination, self.odometer_start, now);
        trip.driver_id = self.driver_id;
        trip.purpose = self.purpose;
        trip.status = self.status.unwrap_or_default();
        if let Some(start) = self.start_date {
            trip.start_date = start;
        }
        trip.end_date = self.end_date;
        trip.odometer_end = self.odometer_end;
        trip.toll_fees = self.toll_fees;
        trip.parking_fees = self.parking_fees;
        trip.other_fees = self.other_fees;
        trip
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTripRequest {
    pub driver_id: Option<Uuid>,
    #[validate(custom = "validate_not_blank")]
    pub origin: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub destination: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<WorkStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[validate(range(min = 0))]
    pub odometer_start: Option<i64>,
    #[validate(range(min = 0))]
    pub odometer_end: Option<i64>,
    #[validate(custom = "validate_non_negative_amount")]
    pub toll_fees: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub parking_fees: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub other_fees: Option<Decimal>,
}

impl UpdateTripRequest {
    pub fn apply_to(self, trip: &mut Trip) {
        if self.driver_id.is_some() {
            trip.driver_id = self.driver_id;
        }
        if let Some(origin) = self.origin {
            trip.origin = origin;
        }
        if let Some(destination) = self.destination {
            trip.destination = destination;
        }
        if self.purpose.is_some() {
            trip.purpose = self.purpose;
        }
        if let Some(status) = self.status {
            trip.status = status;
        }
        if let Some(start) = self.start_date {
            trip.start_date = start;
        }
        if self.end_date.is_some() {
            trip.end_date = self.end_date;
        }
        if let Some(odometer_start) = self.odometer_start {
            trip.odometer_start = odometer_start;
        }
        if self.odometer_end.is_some() {
            trip.odometer_end = self.odometer_end;
        }
        if self.toll_fees.is_some() {
            trip.toll_fees = self.toll_fees;
        }
        if self.parking_fees.is_some() {
            trip.parking_fees = self.parking_fees;
        }
        if self.other_fees.is_some() {
            trip.other_fees = self.other_fees;
        }
    }
}

// Request para completar un viaje
#[derive(Debug, Deserialize, Validate)]
pub struct CompleteTripRequest {
    #[validate(range(min = 0))]
    pub odometer_end: i64,
}
