//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos de la flota. Cada
//! registro se persiste como documento completo, identificado por su
//! tipo (`EntityKind`) y su `id`.

pub mod analytics;
pub mod document;
pub mod driver;
pub mod fuel;
pub mod insurance;
pub mod maintenance;
pub mod trip;
pub mod vehicle;
pub mod work_status;

use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub use document::{ComplianceDocument, DocumentKind, DocumentStatus};
pub use driver::{Driver, DriverStatus};
pub use fuel::FuelRecord;
pub use insurance::{Claim, ClaimStatus, InsurancePolicy, InsuranceStatus};
pub use maintenance::MaintenanceJob;
pub use trip::Trip;
pub use vehicle::{Vehicle, VehicleStatus};
pub use work_status::WorkStatus;

/// Tipos de registro persistidos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vehicle,
    Driver,
    Document,
    Insurance,
    Maintenance,
    Trip,
    Fuel,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicle",
            EntityKind::Driver => "driver",
            EntityKind::Document => "document",
            EntityKind::Insurance => "insurance",
            EntityKind::Maintenance => "maintenance",
            EntityKind::Trip => "trip",
            EntityKind::Fuel => "fuel",
        }
    }

    /// Nombre legible para mensajes de error
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Driver => "Driver",
            EntityKind::Document => "Document",
            EntityKind::Insurance => "Insurance policy",
            EntityKind::Maintenance => "Maintenance job",
            EntityKind::Trip => "Trip",
            EntityKind::Fuel => "Fuel record",
        }
    }

    /// Tipos cuyo estado se deriva de fechas
    pub fn has_temporal_status(&self) -> bool {
        matches!(self, EntityKind::Document | EntityKind::Insurance)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "vehicle" | "vehicles" => Ok(EntityKind::Vehicle),
            "driver" | "drivers" => Ok(EntityKind::Driver),
            "document" | "documents" => Ok(EntityKind::Document),
            "insurance" | "insurances" | "policy" | "policies" => Ok(EntityKind::Insurance),
            "maintenance" => Ok(EntityKind::Maintenance),
            "trip" | "trips" => Ok(EntityKind::Trip),
            "fuel" => Ok(EntityKind::Fuel),
            other => Err(format!("unknown entity type '{}'", other)),
        }
    }
}

/// Registro persistible como documento completo
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;

    /// Marca la fecha de última modificación
    fn touch(&mut self, now: DateTime<Utc>);
}
