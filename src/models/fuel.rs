//! Modelo de repostajes

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EntityKind, Record};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FuelRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub date: DateTime<Utc>,
    pub liters: Decimal,
    pub price_per_liter: Decimal,
    /// Derivado: litros × precio
    pub total_cost: Decimal,
    pub odometer: Option<i64>,
    pub station: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FuelRecord {
    pub fn new(
        vehicle_id: Uuid,
        date: DateTime<Utc>,
        liters: Decimal,
        price_per_liter: Decimal,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            date,
            liters,
            price_per_liter,
            total_cost: liters * price_per_liter,
            odometer: None,
            station: None,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Record for FuelRecord {
    const KIND: EntityKind = EntityKind::Fuel;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
