//! Modelos de Analytics
//!
//! Este módulo contiene los modelos de salida de las métricas derivadas
//! consumidas por los dashboards.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ClaimStatus, EntityKind};

/// Agregado de siniestros por estado
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClaimGroup {
    pub status: ClaimStatus,
    pub count: usize,
    pub total_damage: Decimal,
    pub total_indemnified: Decimal,
}

/// Conteo de documentos por estado derivado
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentStatusCounts {
    pub valid: usize,
    pub expiring: usize,
    pub expired: usize,
}

/// Conteo de pólizas; `expiring` son pólizas válidas dentro de la ventana
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PolicyStatusCounts {
    pub valid: usize,
    pub expiring: usize,
    pub expired: usize,
    pub suspended: usize,
    pub cancelled: usize,
}

/// Registro próximo a expirar (o ya expirado)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpirationAlert {
    pub entity: EntityKind,
    pub id: Uuid,
    pub label: String,
    pub expiration_date: DateTime<Utc>,
    pub days_until_expiration: i64,
    pub status: String,
}

/// Resumen de expiraciones para dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpirationSummary {
    pub generated_at: DateTime<Utc>,
    pub window_days: i64,
    pub documents: DocumentStatusCounts,
    pub policies: PolicyStatusCounts,
    pub alerts: Vec<ExpirationAlert>,
}

/// Rango de fechas inclusivo; un extremo ausente no limita
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn contains(&self, date: DateTime<Utc>) -> bool {
        self.from.map_or(true, |from| date >= from) && self.to.map_or(true, |to| date <= to)
    }
}

/// Costes agregados
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CostBreakdown {
    pub maintenance: Decimal,
    pub fuel: Decimal,
    pub trips: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleCostBreakdown {
    pub vehicle_id: Uuid,
    pub costs: CostBreakdown,
}

/// Resumen de costes para dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostSummary {
    pub range: DateRange,
    pub totals: CostBreakdown,
    pub per_vehicle: Vec<VehicleCostBreakdown>,
}
