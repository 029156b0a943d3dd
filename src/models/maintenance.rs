//! Modelo de trabajos de mantenimiento

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{work_status::WorkStatus, EntityKind, Record};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaintenanceJob {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub maintenance_type: String,
    pub description: Option<String>,
    pub status: WorkStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub odometer_at_service: i64,
    pub next_service_odometer: Option<i64>,
    pub cost: Option<Decimal>,
    pub provider: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceJob {
    pub fn new(
        vehicle_id: Uuid,
        maintenance_type: impl Into<String>,
        odometer_at_service: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            maintenance_type: maintenance_type.into(),
            description: None,
            status: WorkStatus::Planned,
            scheduled_date: None,
            completed_date: None,
            odometer_at_service,
            next_service_odometer: None,
            cost: None,
            provider: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Fecha usada para imputar el coste en los resúmenes
    pub fn cost_date(&self) -> DateTime<Utc> {
        self.completed_date
            .or(self.scheduled_date)
            .unwrap_or(self.created_at)
    }
}

impl Record for MaintenanceJob {
    const KIND: EntityKind = EntityKind::Maintenance;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
