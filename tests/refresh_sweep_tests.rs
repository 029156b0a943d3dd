mod common;

use chrono::Duration;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use common::{failing_records, fixed_now};
use fleet_admin::models::{
    ComplianceDocument, DocumentKind, DocumentStatus, EntityKind, InsurancePolicy, InsuranceStatus,
};
use fleet_admin::repositories::{MemoryRecordStore, RecordStore, Repository};
use fleet_admin::services::{RecordService, RefreshService};
use fleet_admin::utils::FixedClock;

#[tokio::test]
async fn test_sweep_continues_past_failed_record() {
    let (records, store, clock) = failing_records();

    let mut ids = Vec::new();
    for (title, days) in [("Carte grise", 40), ("Contrôle technique", 45), ("Assurance", 50)] {
        let doc = records
            .save(
                ComplianceDocument::new(title, DocumentKind::Vehicle, fixed_now())
                    .with_expiration(fixed_now() + Duration::days(days)),
            )
            .await
            .unwrap();
        assert_eq!(doc.status, DocumentStatus::Valid);
        ids.push(doc.id);
    }

    // Tres semanas más tarde los tres deberían estar por expirar
    clock.advance(Duration::days(21));
    store.fail_writes_for(ids[1]);

    let report = RefreshService::new(records.clone())
        .refresh_all_statuses(EntityKind::Document)
        .await
        .unwrap();

    assert_eq!(report.attempted, 3);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].id, ids[1].to_string());
    assert_eq!(report.succeeded(), 2);

    for (i, id) in ids.iter().enumerate() {
        let stored: ComplianceDocument = records.get(*id).await.unwrap();
        let expected = if i == 1 { DocumentStatus::Valid } else { DocumentStatus::Expiring };
        assert_eq!(stored.status, expected, "document {}", i);
    }
}

#[tokio::test]
async fn test_sweep_reports_undecodable_record() {
    let store = Arc::new(MemoryRecordStore::new());
    let records = RecordService::new(
        Repository::new(store.clone()),
        Arc::new(FixedClock::new(fixed_now())),
    );

    let good = records
        .save(
            ComplianceDocument::new("Permis", DocumentKind::Driver, fixed_now())
                .with_expiration(fixed_now() - Duration::days(1)),
        )
        .await
        .unwrap();

    let broken_id = Uuid::new_v4();
    store
        .upsert(
            EntityKind::Document,
            broken_id,
            json!({ "id": broken_id.to_string(), "expiration_date": "pas une date" }),
        )
        .await
        .unwrap();

    let report = RefreshService::new(records.clone())
        .refresh_all_statuses(EntityKind::Document)
        .await
        .unwrap();

    assert_eq!(report.attempted, 2);
    assert!(report.is_partial_failure());
    assert_eq!(report.failed[0].id, broken_id.to_string());

    let stored: ComplianceDocument = records.get(good.id).await.unwrap();
    assert_eq!(stored.status, DocumentStatus::Expired);
}

#[tokio::test]
async fn test_policy_sweep_respects_cancellation() {
    let (records, _, clock) = failing_records();

    let active = records
        .save(InsurancePolicy::new(
            Uuid::new_v4(),
            "MAIF",
            "POL-1",
            fixed_now() - Duration::days(100),
            fixed_now() + Duration::days(5),
            fixed_now(),
        ))
        .await
        .unwrap();

    let mut cancelled = InsurancePolicy::new(
        Uuid::new_v4(),
        "AXA",
        "POL-2",
        fixed_now() - Duration::days(100),
        fixed_now() + Duration::days(5),
        fixed_now(),
    );
    cancelled.status = InsuranceStatus::Cancelled;
    let cancelled = records.save(cancelled).await.unwrap();

    let future = records
        .save(InsurancePolicy::new(
            Uuid::new_v4(),
            "GMF",
            "POL-3",
            fixed_now() + Duration::days(30),
            fixed_now() + Duration::days(395),
            fixed_now(),
        ))
        .await
        .unwrap();
    assert_eq!(future.status, InsuranceStatus::Suspended);

    clock.advance(Duration::days(31));
    let report = RefreshService::new(records.clone())
        .refresh_all_statuses(EntityKind::Insurance)
        .await
        .unwrap();
    assert_eq!(report.attempted, 3);
    assert!(!report.is_partial_failure());

    let active: InsurancePolicy = records.get(active.id).await.unwrap();
    let cancelled: InsurancePolicy = records.get(cancelled.id).await.unwrap();
    let future: InsurancePolicy = records.get(future.id).await.unwrap();
    assert_eq!(active.status, InsuranceStatus::Expired);
    assert_eq!(cancelled.status, InsuranceStatus::Cancelled);
    assert_eq!(future.status, InsuranceStatus::Valid);
}

#[tokio::test]
async fn test_sweep_twice_is_idempotent() {
    let (records, _, _) = failing_records();
    let doc = records
        .save(
            ComplianceDocument::new("Carte carburant", DocumentKind::Other, fixed_now())
                .with_expiration(fixed_now() + Duration::days(3)),
        )
        .await
        .unwrap();

    let service = RefreshService::new(records.clone());
    let first = service.refresh_all_statuses(EntityKind::Document).await.unwrap();
    let second = service.refresh_all_statuses(EntityKind::Document).await.unwrap();
    assert_eq!(first, second);

    let stored: ComplianceDocument = records.get(doc.id).await.unwrap();
    assert_eq!(stored.status, DocumentStatus::Expiring);
}
