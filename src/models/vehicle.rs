//! Modelo de Vehicle
//!
//! El estado del vehículo no se deriva de fechas: es efecto de las reglas
//! de consistencia (asignación, viajes, mantenimientos) y de ediciones
//! explícitas del administrador.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{EntityKind, Record};

/// Estado operativo del vehículo
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    InService,
    InMaintenance,
    OutOfService,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::InService => "in_service",
            VehicleStatus::InMaintenance => "in_maintenance",
            VehicleStatus::OutOfService => "out_of_service",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: Uuid,
    pub license_plate: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub fuel_type: String,
    pub status: VehicleStatus,
    /// Kilometraje actual
    pub odometer: i64,
    pub assigned_driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    pub fn new(
        license_plate: impl Into<String>,
        fuel_type: impl Into<String>,
        odometer: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            license_plate: license_plate.into(),
            brand: None,
            model: None,
            year: None,
            fuel_type: fuel_type.into(),
            status: VehicleStatus::Available,
            odometer,
            assigned_driver_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Libera el conductor asignado; si el vehículo estaba en servicio
    /// por esa asignación vuelve a quedar disponible.
    pub fn release_driver(&mut self) {
        self.assigned_driver_id = None;
        if self.status == VehicleStatus::InService {
            self.status = VehicleStatus::Available;
        }
    }
}

impl Record for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
