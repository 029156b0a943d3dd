//! Modelo de viajes
//!
//! `distance` y `total_cost` son campos derivados: se recalculan en cada
//! guardado a partir de los odómetros y de los gastos.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{work_status::WorkStatus, EntityKind, Record};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub driver_id: Option<Uuid>,
    pub origin: String,
    pub destination: String,
    pub purpose: Option<String>,
    pub status: WorkStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub odometer_start: i64,
    pub odometer_end: Option<i64>,
    pub distance: Option<i64>,
    pub toll_fees: Option<Decimal>,
    pub parking_fees: Option<Decimal>,
    pub other_fees: Option<Decimal>,
    pub total_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    pub fn new(
        vehicle_id: Uuid,
        origin: impl Into<String>,
        destination: impl Into<String>,
        odometer_start: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            driver_id: None,
            origin: origin.into(),
            destination: destination.into(),
            purpose: None,
            status: WorkStatus::Planned,
            start_date: now,
            end_date: None,
            odometer_start,
            odometer_end: None,
            distance: None,
            toll_fees: None,
            parking_fees: None,
            other_fees: None,
            total_cost: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fees(&self) -> [Option<Decimal>; 3] {
        [self.toll_fees, self.parking_fees, self.other_fees]
    }
}

impl Record for Trip {
    const KIND: EntityKind = EntityKind::Trip;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
