//! Capa de acceso a datos
//!
//! `Repository` es la fachada tipada sobre un `RecordStore`: convierte
//! registros de dominio a documentos JSON y de vuelta.

pub mod memory_store;
pub mod postgres_store;
pub mod record_store;

use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::models::{EntityKind, Record};
use crate::utils::errors::{not_found_error, AppResult};

pub use memory_store::MemoryRecordStore;
pub use postgres_store::PgRecordStore;
pub use record_store::{PendingWrite, RecordFilter, RecordStore, WriteBatch};

#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn RecordStore>,
}

impl Repository {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRecordStore::new()))
    }

    pub async fn find_by_id<T: Record>(&self, id: Uuid) -> AppResult<Option<T>> {
        match self.store.fetch(T::KIND, id).await? {
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
            None => Ok(None),
        }
    }

    /// Como `find_by_id`, pero un id inexistente es `NotFound`
    pub async fn get<T: Record>(&self, id: Uuid) -> AppResult<T> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(T::KIND.label(), &id.to_string()))
    }

    pub async fn find_all<T: Record>(&self, filter: &RecordFilter) -> AppResult<Vec<T>> {
        self.store
            .fetch_all(T::KIND, filter)
            .await?
            .into_iter()
            .map(|body| serde_json::from_value(body).map_err(Into::into))
            .collect()
    }

    /// Documentos sin decodificar, para recorridos tolerantes a registros corruptos
    pub async fn find_all_raw(&self, kind: EntityKind, filter: &RecordFilter) -> AppResult<Vec<Value>> {
        self.store.fetch_all(kind, filter).await
    }

    pub async fn save<T: Record>(&self, record: &T) -> AppResult<()> {
        let body = serde_json::to_value(record)?;
        self.store.upsert(T::KIND, record.id(), body).await
    }

    pub async fn delete<T: Record>(&self, id: Uuid) -> AppResult<()> {
        if self.store.remove(T::KIND, id).await? {
            Ok(())
        } else {
            Err(not_found_error(T::KIND.label(), &id.to_string()))
        }
    }

    pub async fn commit(&self, batch: WriteBatch) -> AppResult<()> {
        if batch.is_empty() {
            return Ok(());
        }
        self.store.apply(batch).await
    }
}

/// Serializa un registro como escritura de lote
pub fn put<T: Record>(record: &T) -> AppResult<PendingWrite> {
    Ok(PendingWrite::Put {
        kind: T::KIND,
        id: record.id(),
        body: serde_json::to_value(record)?,
    })
}

pub fn remove<T: Record>(id: Uuid) -> PendingWrite {
    PendingWrite::Delete { kind: T::KIND, id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Vehicle, VehicleStatus};
    use crate::utils::errors::AppError;
    use chrono::Utc;

    #[tokio::test]
    async fn test_save_and_get_roundtrip() {
        let repo = Repository::in_memory();
        let mut vehicle = Vehicle::new("AB-123-CD", "diesel", 1200, Utc::now());
        vehicle.status = VehicleStatus::InService;
        repo.save(&vehicle).await.unwrap();

        let stored: Vehicle = repo.get(vehicle.id).await.unwrap();
        assert_eq!(stored, vehicle);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = Repository::in_memory();
        let result = repo.get::<Vehicle>(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = repo.delete::<Vehicle>(Uuid::new_v4()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
