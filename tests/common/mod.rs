//! Utilidades compartidas por los tests de integración
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use fleet_admin::models::EntityKind;
use fleet_admin::repositories::{MemoryRecordStore, RecordFilter, RecordStore, Repository, WriteBatch};
use fleet_admin::services::RecordService;
use fleet_admin::utils::errors::{AppError, AppResult};
use fleet_admin::utils::FixedClock;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 2, 9, 0, 0).unwrap()
}

/// Almacén en memoria que falla al escribir los ids marcados
#[derive(Default)]
pub struct FailingStore {
    inner: MemoryRecordStore,
    failing: Mutex<HashSet<Uuid>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes_for(&self, id: Uuid) {
        self.failing.lock().unwrap().insert(id);
    }

    fn is_failing(&self, id: Uuid) -> bool {
        self.failing.lock().unwrap().contains(&id)
    }
}

#[async_trait]
impl RecordStore for FailingStore {
    async fn fetch(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>> {
        self.inner.fetch(kind, id).await
    }

    async fn fetch_all(&self, kind: EntityKind, filter: &RecordFilter) -> AppResult<Vec<Value>> {
        self.inner.fetch_all(kind, filter).await
    }

    async fn upsert(&self, kind: EntityKind, id: Uuid, body: Value) -> AppResult<()> {
        if self.is_failing(id) {
            return Err(AppError::Internal(format!("injected write failure for {}", id)));
        }
        self.inner.upsert(kind, id, body).await
    }

    async fn remove(&self, kind: EntityKind, id: Uuid) -> AppResult<bool> {
        self.inner.remove(kind, id).await
    }

    async fn apply(&self, batch: WriteBatch) -> AppResult<()> {
        if let Some(write) = batch.writes().iter().find(|w| self.is_failing(w.id())) {
            return Err(AppError::Internal(format!("injected batch failure for {}", write.id())));
        }
        self.inner.apply(batch).await
    }
}

/// Servicio de registros sobre un almacén en memoria con reloj fijo
pub fn memory_records() -> (RecordService, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(fixed_now()));
    (RecordService::new(Repository::in_memory(), clock.clone()), clock)
}

/// Igual que `memory_records`, exponiendo el almacén para inyectar fallos
pub fn failing_records() -> (RecordService, Arc<FailingStore>, Arc<FixedClock>) {
    let store = Arc::new(FailingStore::new());
    let clock = Arc::new(FixedClock::new(fixed_now()));
    let records = RecordService::new(Repository::new(store.clone()), clock.clone());
    (records, store, clock)
}
