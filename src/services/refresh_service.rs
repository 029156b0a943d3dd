//! Barrido de refresco de estados
//!
//! Recorre todos los registros con fecha de expiración de un tipo y los
//! vuelve a guardar por el camino normal, corrigiendo estados que han
//! quedado obsoletos solo por el paso del tiempo. Un fallo en un registro
//! no detiene el barrido.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use super::{record_service::RecordService, recompute::Recompute};
use crate::models::{ComplianceDocument, EntityKind, InsurancePolicy, Record};
use crate::repositories::RecordFilter;
use crate::utils::errors::{AppError, AppResult};

/// Registro que no pudo refrescarse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SweepFailure {
    pub id: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshReport {
    pub entity: EntityKind,
    /// Registros procesados, hayan cambiado o no
    pub attempted: usize,
    pub failed: Vec<SweepFailure>,
}

impl RefreshReport {
    pub fn succeeded(&self) -> usize {
        self.attempted - self.failed.len()
    }

    pub fn is_partial_failure(&self) -> bool {
        !self.failed.is_empty()
    }
}

pub struct RefreshService {
    records: RecordService,
}

impl RefreshService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn refresh_all_statuses(&self, entity: EntityKind) -> AppResult<RefreshReport> {
        match entity {
            EntityKind::Document => self.sweep::<ComplianceDocument>().await,
            EntityKind::Insurance => self.sweep::<InsurancePolicy>().await,
            other => Err(AppError::BadRequest(format!(
                "'{}' has no date-derived status to refresh",
                other
            ))),
        }
    }

    async fn sweep<T: Record + Recompute>(&self) -> AppResult<RefreshReport> {
        let raw = self
            .records
            .repository()
            .find_all_raw(T::KIND, &RecordFilter::with_field("expiration_date"))
            .await?;

        info!("🔄 Refrescando estados de {} ({} registros)", T::KIND, raw.len());

        let attempted = raw.len();
        let mut failed = Vec::new();

        for body in raw {
            let id = record_id(&body);
            if let Err(e) = self.refresh_one::<T>(body).await {
                warn!("⚠️ No se pudo refrescar {} {}: {}", T::KIND, id, e);
                failed.push(SweepFailure {
                    id,
                    error: e.to_string(),
                });
            }
        }

        let report = RefreshReport {
            entity: T::KIND,
            attempted,
            failed,
        };

        info!(
            "✅ Barrido de {} terminado: {} procesados, {} fallidos",
            T::KIND,
            report.attempted,
            report.failed.len()
        );
        Ok(report)
    }

    async fn refresh_one<T: Record + Recompute>(&self, body: Value) -> AppResult<()> {
        let record: T = serde_json::from_value(body)?;
        self.records.save(record).await?;
        Ok(())
    }
}

fn record_id(body: &Value) -> String {
    body.get("id")
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, DocumentStatus};
    use crate::repositories::Repository;
    use crate::utils::FixedClock;
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_sweep_corrects_drift() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(start));
        let records = RecordService::new(Repository::in_memory(), clock.clone());

        let doc = records
            .save(
                ComplianceDocument::new("Vignette Crit'Air", DocumentKind::Vehicle, start)
                    .with_expiration(start + Duration::days(45)),
            )
            .await
            .unwrap();
        assert_eq!(doc.status, DocumentStatus::Valid);

        // Sin ediciones, solo pasa el tiempo
        clock.advance(Duration::days(20));
        let service = RefreshService::new(records.clone());
        let report = service.refresh_all_statuses(EntityKind::Document).await.unwrap();

        assert_eq!(report.attempted, 1);
        assert!(!report.is_partial_failure());
        let stored: ComplianceDocument = records.get(doc.id).await.unwrap();
        assert_eq!(stored.status, DocumentStatus::Expiring);
    }

    #[tokio::test]
    async fn test_sweep_skips_documents_without_expiration() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let records = RecordService::new(Repository::in_memory(), Arc::new(FixedClock::new(now)));
        records
            .save(ComplianceDocument::new("Facture", DocumentKind::Other, now))
            .await
            .unwrap();

        let report = RefreshService::new(records)
            .refresh_all_statuses(EntityKind::Document)
            .await
            .unwrap();
        assert_eq!(report.attempted, 0);
    }

    #[tokio::test]
    async fn test_sweep_rejects_non_temporal_entity() {
        let records = RecordService::new(Repository::in_memory(), Arc::new(FixedClock::new(Utc::now())));
        let result = RefreshService::new(records)
            .refresh_all_statuses(EntityKind::Trip)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
