//! Dashboards de expiraciones, siniestros y costes
//!
//! Solo lectura: los estados se derivan en memoria contra el reloj actual,
//! nunca se escriben desde aquí.

use futures::try_join;
use tracing::debug;
use uuid::Uuid;

use super::metrics;
use super::record_service::RecordService;
use crate::models::analytics::{ClaimGroup, CostSummary, DateRange, ExpirationSummary};
use crate::models::{ComplianceDocument, FuelRecord, InsurancePolicy, MaintenanceJob, Trip, Vehicle};
use crate::repositories::RecordFilter;
use crate::utils::errors::{bad_request_error, AppResult};

pub struct DashboardService {
    records: RecordService,
}

impl DashboardService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn expiration_summary(&self, window_days: i64) -> AppResult<ExpirationSummary> {
        if window_days < 0 {
            return Err(bad_request_error("window_days must be zero or positive"));
        }

        let all = RecordFilter::all();
        let (documents, policies) = try_join!(
            self.records.list::<ComplianceDocument>(&all),
            self.records.list::<InsurancePolicy>(&all),
        )?;
        let now = self.records.now();

        debug!(
            "📊 Resumen de expiraciones: {} documentos, {} pólizas, ventana {} días",
            documents.len(),
            policies.len(),
            window_days
        );

        Ok(ExpirationSummary {
            generated_at: now,
            window_days,
            documents: metrics::count_documents(&documents, now),
            policies: metrics::count_policies(&policies, now, window_days),
            alerts: metrics::expiration_alerts(&documents, &policies, now, window_days),
        })
    }

    pub async fn claims_breakdown(&self, policy_id: Uuid) -> AppResult<Vec<ClaimGroup>> {
        let policy = self.records.get::<InsurancePolicy>(policy_id).await?;
        Ok(metrics::aggregate_claims(&policy.claims))
    }

    /// Costes en el rango; con `vehicle_id` solo cuenta ese vehículo
    pub async fn cost_summary(&self, range: DateRange, vehicle_id: Option<Uuid>) -> AppResult<CostSummary> {
        if let (Some(from), Some(to)) = (range.from, range.to) {
            if from > to {
                return Err(bad_request_error("'from' must not be after 'to'"));
            }
        }

        let filter = match vehicle_id {
            Some(id) => {
                self.records.get::<Vehicle>(id).await?;
                RecordFilter::for_vehicle(id)
            }
            None => RecordFilter::all(),
        };

        let (jobs, fuel, trips) = try_join!(
            self.records.list::<MaintenanceJob>(&filter),
            self.records.list::<FuelRecord>(&filter),
            self.records.list::<Trip>(&filter),
        )?;

        Ok(CostSummary {
            range,
            totals: metrics::rollup_costs(&jobs, &fuel, &trips, &range),
            per_vehicle: metrics::rollup_costs_by_vehicle(&jobs, &fuel, &trips, &range),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, EntityKind};
    use crate::repositories::Repository;
    use crate::utils::FixedClock;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_summary_uses_current_clock_not_stored_status() {
        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let clock = Arc::new(FixedClock::new(start));
        let records = RecordService::new(Repository::in_memory(), clock.clone());

        let doc = records
            .save(
                ComplianceDocument::new("Carte grise", DocumentKind::Vehicle, start)
                    .with_expiration(start + Duration::days(40)),
            )
            .await
            .unwrap();

        clock.advance(Duration::days(15));
        let summary = DashboardService::new(records.clone())
            .expiration_summary(30)
            .await
            .unwrap();

        assert_eq!(summary.documents.expiring, 1);
        assert_eq!(summary.alerts.len(), 1);
        assert_eq!(summary.alerts[0].entity, EntityKind::Document);
        assert_eq!(summary.alerts[0].days_until_expiration, 25);

        // El registro almacenado no se modifica
        let stored: ComplianceDocument = records.get(doc.id).await.unwrap();
        assert_eq!(stored.updated_at, start);
    }

    #[tokio::test]
    async fn test_cost_summary_for_single_vehicle() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let records = RecordService::new(Repository::in_memory(), Arc::new(FixedClock::new(now)));
        let v1 = records.save(Vehicle::new("AB-123-CD", "diesel", 1000, now)).await.unwrap();
        let v2 = records.save(Vehicle::new("EF-456-GH", "essence", 500, now)).await.unwrap();

        records
            .save(FuelRecord::new(v1.id, now, Decimal::from(30), Decimal::from(2), now))
            .await
            .unwrap();
        records
            .save(FuelRecord::new(v2.id, now, Decimal::from(10), Decimal::from(2), now))
            .await
            .unwrap();

        let service = DashboardService::new(records);
        let all = service.cost_summary(DateRange::default(), None).await.unwrap();
        assert_eq!(all.totals.fuel, Decimal::from(80));
        assert_eq!(all.per_vehicle.len(), 2);

        let single = service.cost_summary(DateRange::default(), Some(v1.id)).await.unwrap();
        assert_eq!(single.totals.total, Decimal::from(60));
        assert_eq!(single.per_vehicle.len(), 1);
    }

    #[tokio::test]
    async fn test_cost_summary_rejects_inverted_range() {
        let now = Utc::now();
        let records = RecordService::new(Repository::in_memory(), Arc::new(FixedClock::new(now)));
        let range = DateRange {
            from: Some(now),
            to: Some(now - Duration::days(1)),
        };
        let result = DashboardService::new(records).cost_summary(range, None).await;
        assert!(result.is_err());
    }
}
