//! Almacenamiento en memoria
//!
//! Usado en tests y cuando no hay `DATABASE_URL`. Un lote se aplica bajo
//! un único lock de escritura, por lo que nunca se observa a medias.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::record_store::{PendingWrite, RecordFilter, RecordStore, WriteBatch};
use crate::models::EntityKind;
use crate::utils::errors::AppResult;

#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    records: Arc<RwLock<HashMap<(EntityKind, Uuid), Value>>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn fetch(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>> {
        let records = self.records.read().await;
        Ok(records.get(&(kind, id)).cloned())
    }

    async fn fetch_all(&self, kind: EntityKind, filter: &RecordFilter) -> AppResult<Vec<Value>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|((k, _), body)| *k == kind && filter.matches(body))
            .map(|(_, body)| body.clone())
            .collect())
    }

    async fn upsert(&self, kind: EntityKind, id: Uuid, body: Value) -> AppResult<()> {
        let mut records = self.records.write().await;
        records.insert((kind, id), body);
        Ok(())
    }

    async fn remove(&self, kind: EntityKind, id: Uuid) -> AppResult<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(&(kind, id)).is_some())
    }

    async fn apply(&self, batch: WriteBatch) -> AppResult<()> {
        let mut records = self.records.write().await;
        let count = batch.len();
        for write in batch.into_writes() {
            match write {
                PendingWrite::Put { kind, id, body } => {
                    records.insert((kind, id), body);
                }
                PendingWrite::Delete { kind, id } => {
                    records.remove(&(kind, id));
                }
            }
        }
        debug!("💾 Lote aplicado en memoria ({} escrituras)", count);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_upsert_replaces_whole_document() {
        let store = MemoryRecordStore::new();
        let id = Uuid::new_v4();

        store
            .upsert(EntityKind::Vehicle, id, json!({ "id": id, "odometer": 10, "brand": "Renault" }))
            .await
            .unwrap();
        store
            .upsert(EntityKind::Vehicle, id, json!({ "id": id, "odometer": 20 }))
            .await
            .unwrap();

        let body = store.fetch(EntityKind::Vehicle, id).await.unwrap().unwrap();
        assert_eq!(body["odometer"], 20);
        assert!(body.get("brand").is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let store = MemoryRecordStore::new();
        let id = Uuid::new_v4();
        store.upsert(EntityKind::Trip, id, json!({ "id": id })).await.unwrap();

        assert!(store.fetch(EntityKind::Vehicle, id).await.unwrap().is_none());
        assert_eq!(store.fetch_all(EntityKind::Trip, &RecordFilter::all()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_apply_batch_with_delete() {
        let store = MemoryRecordStore::new();
        let keep = Uuid::new_v4();
        let gone = Uuid::new_v4();
        store.upsert(EntityKind::Driver, gone, json!({ "id": gone })).await.unwrap();

        let mut batch = WriteBatch::new();
        batch.push(PendingWrite::Put { kind: EntityKind::Driver, id: keep, body: json!({ "id": keep }) });
        batch.push(PendingWrite::Delete { kind: EntityKind::Driver, id: gone });
        store.apply(batch).await.unwrap();

        assert!(store.fetch(EntityKind::Driver, keep).await.unwrap().is_some());
        assert!(!store.remove(EntityKind::Driver, gone).await.unwrap());
    }
}
