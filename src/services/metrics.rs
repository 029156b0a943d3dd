//! Métricas derivadas para dashboards
//!
//! Agregaciones puras sobre datos ya cargados. Un importe ausente cuenta
//! como cero.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use uuid::Uuid;

use super::recompute::recompute_status;
use super::status_rules::days_until_expiration;
use crate::models::analytics::{
    ClaimGroup, CostBreakdown, DateRange, DocumentStatusCounts, ExpirationAlert, PolicyStatusCounts,
    VehicleCostBreakdown,
};
use crate::models::{
    Claim, ComplianceDocument, DocumentStatus, EntityKind, FuelRecord, InsurancePolicy, InsuranceStatus,
    MaintenanceJob, Trip, WorkStatus,
};

/// Agrupa los siniestros por estado, sumando daños e indemnizaciones
pub fn aggregate_claims(claims: &[Claim]) -> Vec<ClaimGroup> {
    let mut groups: BTreeMap<_, ClaimGroup> = BTreeMap::new();
    for claim in claims {
        let group = groups.entry(claim.status).or_insert_with(|| ClaimGroup {
            status: claim.status,
            count: 0,
            total_damage: Decimal::ZERO,
            total_indemnified: Decimal::ZERO,
        });
        group.count += 1;
        group.total_damage += claim.damage_amount.unwrap_or_default();
        group.total_indemnified += claim.indemnified_amount.unwrap_or_default();
    }
    groups.into_values().collect()
}

/// Estados derivados de nuevo contra `now` antes de contar
pub fn count_documents(documents: &[ComplianceDocument], now: DateTime<Utc>) -> DocumentStatusCounts {
    let mut counts = DocumentStatusCounts::default();
    for doc in documents {
        match recompute_status(doc.clone(), now).status {
            DocumentStatus::Valid => counts.valid += 1,
            DocumentStatus::Expiring => counts.expiring += 1,
            DocumentStatus::Expired => counts.expired += 1,
        }
    }
    counts
}

/// Una póliza válida que expira dentro de `window_days` cuenta como `expiring`
pub fn count_policies(policies: &[InsurancePolicy], now: DateTime<Utc>, window_days: i64) -> PolicyStatusCounts {
    let mut counts = PolicyStatusCounts::default();
    for policy in policies {
        match recompute_status(policy.clone(), now).status {
            InsuranceStatus::Valid if days_until_expiration(policy.expiration_date, now) <= window_days => {
                counts.expiring += 1
            }
            InsuranceStatus::Valid => counts.valid += 1,
            InsuranceStatus::Expired => counts.expired += 1,
            InsuranceStatus::Suspended => counts.suspended += 1,
            InsuranceStatus::Cancelled => counts.cancelled += 1,
        }
    }
    counts
}

/// Registros que expiran en `window_days` o menos (incluye los ya
/// expirados), ordenados del más urgente al menos urgente.
pub fn expiration_alerts(
    documents: &[ComplianceDocument],
    policies: &[InsurancePolicy],
    now: DateTime<Utc>,
    window_days: i64,
) -> Vec<ExpirationAlert> {
    let doc_alerts = documents.iter().filter_map(|doc| {
        let expiration = doc.expiration_date?;
        let days = days_until_expiration(expiration, now);
        (days <= window_days).then(|| ExpirationAlert {
            entity: EntityKind::Document,
            id: doc.id,
            label: doc.title.clone(),
            expiration_date: expiration,
            days_until_expiration: days,
            status: recompute_status(doc.clone(), now).status.to_string(),
        })
    });

    let policy_alerts = policies.iter().filter_map(|policy| {
        let status = recompute_status(policy.clone(), now).status;
        let days = days_until_expiration(policy.expiration_date, now);
        (status != InsuranceStatus::Cancelled && days <= window_days).then(|| ExpirationAlert {
            entity: EntityKind::Insurance,
            id: policy.id,
            label: format!("{} {}", policy.insurer, policy.policy_number),
            expiration_date: policy.expiration_date,
            days_until_expiration: days,
            status: status.to_string(),
        })
    });

    let mut alerts: Vec<ExpirationAlert> = doc_alerts.chain(policy_alerts).collect();
    alerts.sort_by_key(|a| (a.days_until_expiration, a.expiration_date));
    alerts
}

/// Suma costes de mantenimiento, combustible y viajes dentro del rango
pub fn rollup_costs(
    jobs: &[MaintenanceJob],
    fuel: &[FuelRecord],
    trips: &[Trip],
    range: &DateRange,
) -> CostBreakdown {
    let maintenance = jobs
        .iter()
        .filter(|j| j.status != WorkStatus::Cancelled && range.contains(j.cost_date()))
        .map(|j| j.cost.unwrap_or_default())
        .sum();
    let fuel: Decimal = fuel
        .iter()
        .filter(|f| range.contains(f.date))
        .map(|f| f.total_cost)
        .sum();
    let trips: Decimal = trips
        .iter()
        .filter(|t| t.status != WorkStatus::Cancelled && range.contains(t.start_date))
        .map(|t| t.total_cost.unwrap_or_default())
        .sum();

    CostBreakdown {
        maintenance,
        fuel,
        trips,
        total: maintenance + fuel + trips,
    }
}

/// Igual que `rollup_costs`, agrupado por vehículo
pub fn rollup_costs_by_vehicle(
    jobs: &[MaintenanceJob],
    fuel: &[FuelRecord],
    trips: &[Trip],
    range: &DateRange,
) -> Vec<VehicleCostBreakdown> {
    let mut vehicles: BTreeMap<Uuid, (Vec<MaintenanceJob>, Vec<FuelRecord>, Vec<Trip>)> = BTreeMap::new();
    for job in jobs {
        vehicles.entry(job.vehicle_id).or_default().0.push(job.clone());
    }
    for record in fuel {
        vehicles.entry(record.vehicle_id).or_default().1.push(record.clone());
    }
    for trip in trips {
        vehicles.entry(trip.vehicle_id).or_default().2.push(trip.clone());
    }

    vehicles
        .into_iter()
        .map(|(vehicle_id, (jobs, fuel, trips))| VehicleCostBreakdown {
            vehicle_id,
            costs: rollup_costs(&jobs, &fuel, &trips, range),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClaimStatus, DocumentKind};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 10, 0, 0).unwrap()
    }

    fn claim(status: ClaimStatus, damage: Option<i64>, indemnified: Option<i64>) -> Claim {
        let mut claim = Claim::new(now(), "Rayure portière");
        claim.status = status;
        claim.damage_amount = damage.map(Decimal::from);
        claim.indemnified_amount = indemnified.map(Decimal::from);
        claim
    }

    #[test]
    fn test_aggregate_claims_by_status() {
        let claims = vec![
            claim(ClaimStatus::Declared, Some(1200), None),
            claim(ClaimStatus::Accepted, Some(800), Some(650)),
            claim(ClaimStatus::Declared, None, None),
            claim(ClaimStatus::Accepted, Some(300), Some(300)),
        ];

        let groups = aggregate_claims(&claims);
        assert_eq!(groups.len(), 2);

        let declared = &groups[0];
        assert_eq!(declared.status, ClaimStatus::Declared);
        assert_eq!(declared.count, 2);
        assert_eq!(declared.total_damage, Decimal::from(1200));
        assert_eq!(declared.total_indemnified, Decimal::ZERO);

        let accepted = &groups[1];
        assert_eq!(accepted.count, 2);
        assert_eq!(accepted.total_damage, Decimal::from(1100));
        assert_eq!(accepted.total_indemnified, Decimal::from(950));
    }

    #[test]
    fn test_counts_rederive_stale_status() {
        let mut stale = ComplianceDocument::new("Assurance", DocumentKind::Insurance, now())
            .with_expiration(now() - Duration::days(2));
        stale.status = DocumentStatus::Valid;
        let soon = ComplianceDocument::new("Contrôle", DocumentKind::Vehicle, now())
            .with_expiration(now() + Duration::days(12));
        let later = ComplianceDocument::new("Permis", DocumentKind::Driver, now())
            .with_expiration(now() + Duration::days(300));
        let undated = ComplianceDocument::new("Facture", DocumentKind::Other, now());

        let counts = count_documents(&[stale, soon, later, undated], now());
        assert_eq!(counts, DocumentStatusCounts { valid: 2, expiring: 1, expired: 1 });
    }

    #[test]
    fn test_policy_counts_and_alerts() {
        let vehicle = Uuid::new_v4();
        let soon = InsurancePolicy::new(vehicle, "AXA", "P-1", now() - Duration::days(300), now() + Duration::days(20), now());
        let far = InsurancePolicy::new(vehicle, "MAIF", "P-2", now() - Duration::days(10), now() + Duration::days(200), now());
        let expired = InsurancePolicy::new(vehicle, "MMA", "P-3", now() - Duration::days(400), now() - Duration::days(35), now());
        let mut cancelled = InsurancePolicy::new(vehicle, "GMF", "P-4", now() - Duration::days(10), now() + Duration::days(5), now());
        cancelled.status = InsuranceStatus::Cancelled;

        let policies = vec![soon.clone(), far, expired.clone(), cancelled];
        let counts = count_policies(&policies, now(), 30);
        assert_eq!(
            counts,
            PolicyStatusCounts { valid: 1, expiring: 1, expired: 1, suspended: 0, cancelled: 1 }
        );

        let alerts = expiration_alerts(&[], &policies, now(), 30);
        let ids: Vec<Uuid> = alerts.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![expired.id, soon.id]);
        assert_eq!(alerts[0].days_until_expiration, -35);
        assert_eq!(alerts[1].days_until_expiration, 20);
    }

    #[test]
    fn test_cost_rollup_with_missing_fields() {
        let v1 = Uuid::new_v4();
        let v2 = Uuid::new_v4();

        let mut oil = MaintenanceJob::new(v1, "vidange", 40_000, now());
        oil.cost = Some(Decimal::new(18990, 2));
        oil.completed_date = Some(now() - Duration::days(3));
        let unpriced = MaintenanceJob::new(v2, "pneus", 12_000, now());
        let mut cancelled = MaintenanceJob::new(v2, "freins", 12_000, now());
        cancelled.cost = Some(Decimal::from(500));
        cancelled.status = WorkStatus::Cancelled;

        let fill = FuelRecord::new(v2, now() - Duration::days(1), Decimal::from(50), Decimal::new(180, 2), now());
        let old_fill = FuelRecord::new(v1, now() - Duration::days(90), Decimal::from(40), Decimal::from(2), now());

        let mut trip = Trip::new(v1, "Nantes", "Rennes", 40_000, now() - Duration::days(2));
        trip.total_cost = Some(Decimal::new(1450, 2));

        let range = DateRange { from: Some(now() - Duration::days(30)), to: Some(now()) };
        let jobs = [oil, unpriced, cancelled];
        let fuel = [fill, old_fill];
        let trips = [trip];

        let totals = rollup_costs(&jobs, &fuel, &trips, &range);
        assert_eq!(totals.maintenance, Decimal::new(18990, 2));
        assert_eq!(totals.fuel, Decimal::from(90));
        assert_eq!(totals.trips, Decimal::new(1450, 2));
        assert_eq!(totals.total, Decimal::new(29440, 2));

        let per_vehicle = rollup_costs_by_vehicle(&jobs, &fuel, &trips, &range);
        assert_eq!(per_vehicle.len(), 2);
        let first = per_vehicle.iter().find(|v| v.vehicle_id == v1).unwrap();
        assert_eq!(first.costs.total, Decimal::new(20440, 2));
        let second = per_vehicle.iter().find(|v| v.vehicle_id == v2).unwrap();
        assert_eq!(second.costs.total, Decimal::from(90));
    }
}
