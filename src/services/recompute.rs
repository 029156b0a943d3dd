//! Recálculo de campos derivados
//!
//! `Recompute` se ejecuta justo antes de persistir cualquier registro
//! (ver `RecordService::save` y `RecordService::stage`). Solo escribe los
//! campos derivados y no lee del almacenamiento.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::status_rules::{derive_document_status, derive_insurance_status};
use crate::models::{
    ComplianceDocument, Driver, FuelRecord, InsurancePolicy, MaintenanceJob, Trip, Vehicle,
};

pub trait Recompute {
    /// Recalcula los campos derivados; devuelve `true` si alguno cambió
    fn recompute(&mut self, now: DateTime<Utc>) -> bool;
}

/// Aplica el recálculo y devuelve la entidad resultante
pub fn recompute_status<T: Recompute>(mut entity: T, now: DateTime<Utc>) -> T {
    entity.recompute(now);
    entity
}

impl Recompute for ComplianceDocument {
    fn recompute(&mut self, now: DateTime<Utc>) -> bool {
        let Some(expiration) = self.expiration_date else {
            return false;
        };
        let next = derive_document_status(expiration, now);
        let changed = next != self.status;
        self.status = next;
        changed
    }
}

impl Recompute for InsurancePolicy {
    fn recompute(&mut self, now: DateTime<Utc>) -> bool {
        let next = derive_insurance_status(self.start_date, self.expiration_date, self.status, now);
        let changed = next != self.status;
        self.status = next;
        changed
    }
}

impl Recompute for Trip {
    fn recompute(&mut self, _now: DateTime<Utc>) -> bool {
        let distance = self.odometer_end.map(|end| end - self.odometer_start);

        let fees: Vec<Decimal> = self.fees().into_iter().flatten().collect();
        let total_cost = if fees.is_empty() {
            None
        } else {
            Some(fees.into_iter().sum())
        };

        let changed = distance != self.distance || total_cost != self.total_cost;
        self.distance = distance;
        self.total_cost = total_cost;
        changed
    }
}

impl Recompute for FuelRecord {
    fn recompute(&mut self, _now: DateTime<Utc>) -> bool {
        let total = self.liters * self.price_per_liter;
        let changed = total != self.total_cost;
        self.total_cost = total;
        changed
    }
}

// Sin campos derivados propios
impl Recompute for Vehicle {
    fn recompute(&mut self, _now: DateTime<Utc>) -> bool {
        false
    }
}

impl Recompute for Driver {
    fn recompute(&mut self, _now: DateTime<Utc>) -> bool {
        false
    }
}

impl Recompute for MaintenanceJob {
    fn recompute(&mut self, _now: DateTime<Utc>) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentKind, DocumentStatus, InsuranceStatus};
    use chrono::{Duration, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_document_without_expiration_keeps_status() {
        let mut doc = ComplianceDocument::new("Carte grise", DocumentKind::Vehicle, now());
        doc.status = DocumentStatus::Expiring;

        assert!(!doc.recompute(now()));
        assert_eq!(doc.status, DocumentStatus::Expiring);
    }

    #[test]
    fn test_document_recompute_is_idempotent() {
        let doc = ComplianceDocument::new("Contrôle technique", DocumentKind::Vehicle, now())
            .with_expiration(now() + Duration::days(10));

        let mut doc = recompute_status(doc, now());
        assert_eq!(doc.status, DocumentStatus::Expiring);

        let before = doc.clone();
        assert!(!doc.recompute(now()));
        assert_eq!(doc, before);
    }

    #[test]
    fn test_expired_document_ignores_prior_status() {
        let mut doc = ComplianceDocument::new("Permis", DocumentKind::Driver, now())
            .with_expiration(now() - Duration::days(1));
        doc.status = DocumentStatus::Valid;

        assert!(doc.recompute(now()));
        assert_eq!(doc.status, DocumentStatus::Expired);
    }

    #[test]
    fn test_cancelled_policy_untouched() {
        let mut policy = InsurancePolicy::new(
            Uuid::new_v4(),
            "AXA",
            "POL-001",
            now() - Duration::days(500),
            now() - Duration::days(100),
            now(),
        );
        policy.status = InsuranceStatus::Cancelled;

        assert!(!policy.recompute(now()));
        assert_eq!(policy.status, InsuranceStatus::Cancelled);
    }

    #[test]
    fn test_trip_derived_fields() {
        let mut trip = Trip::new(Uuid::new_v4(), "Lyon", "Paris", 10_000, now());
        trip.distance = Some(999);
        trip.total_cost = Some(Decimal::new(1, 0));

        assert!(trip.recompute(now()));
        assert_eq!(trip.distance, None);
        assert_eq!(trip.total_cost, None);

        trip.odometer_end = Some(10_465);
        trip.toll_fees = Some(Decimal::new(3540, 2));
        trip.parking_fees = Some(Decimal::ZERO);
        trip.other_fees = Some(Decimal::new(1200, 2));
        trip.recompute(now());

        assert_eq!(trip.distance, Some(465));
        assert_eq!(trip.total_cost, Some(Decimal::new(4740, 2)));
    }

    #[test]
    fn test_fuel_total_is_derived() {
        let mut fuel = FuelRecord::new(
            Uuid::new_v4(),
            now(),
            Decimal::new(4000, 2),
            Decimal::new(1859, 3),
            now(),
        );
        fuel.total_cost = Decimal::new(1, 0);

        assert!(fuel.recompute(now()));
        assert_eq!(fuel.total_cost, Decimal::new(74360, 3));
    }
}
