//! Camino único de guardado
//!
//! Todo registro pasa por `save` (escritura simple) o por `stage`
//! (escritura dentro de un lote). Ambos recalculan los campos derivados
//! y la fecha de modificación antes de serializar.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::recompute::Recompute;
use crate::models::Record;
use crate::repositories::{self, RecordFilter, Repository, WriteBatch};
use crate::utils::{errors::AppResult, Clock};

#[derive(Clone)]
pub struct RecordService {
    repository: Repository,
    clock: Arc<dyn Clock>,
}

impl RecordService {
    pub fn new(repository: Repository, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Prepara un registro para persistirse: derivados + `updated_at`
    pub fn settle<T: Record + Recompute>(&self, record: &mut T, now: DateTime<Utc>) {
        record.recompute(now);
        record.touch(now);
    }

    pub async fn save<T: Record + Recompute>(&self, mut record: T) -> AppResult<T> {
        let now = self.now();
        self.settle(&mut record, now);
        self.repository.save(&record).await?;
        Ok(record)
    }

    /// Añade el registro al lote tras recalcular sus derivados
    pub fn stage<T: Record + Recompute>(
        &self,
        batch: &mut WriteBatch,
        record: &mut T,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        self.settle(record, now);
        batch.push(repositories::put(record)?);
        Ok(())
    }

    pub async fn get<T: Record>(&self, id: Uuid) -> AppResult<T> {
        self.repository.get(id).await
    }

    pub async fn find_by_id<T: Record>(&self, id: Uuid) -> AppResult<Option<T>> {
        self.repository.find_by_id(id).await
    }

    pub async fn list<T: Record>(&self, filter: &RecordFilter) -> AppResult<Vec<T>> {
        self.repository.find_all(filter).await
    }

    pub async fn delete<T: Record>(&self, id: Uuid) -> AppResult<()> {
        self.repository.delete::<T>(id).await
    }

    pub async fn commit(&self, batch: WriteBatch) -> AppResult<()> {
        self.repository.commit(batch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplianceDocument, DocumentKind, DocumentStatus};
    use crate::utils::FixedClock;
    use chrono::{Duration, TimeZone};

    #[tokio::test]
    async fn test_save_recomputes_client_status() {
        let now = Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap();
        let service = RecordService::new(Repository::in_memory(), Arc::new(FixedClock::new(now)));

        let mut doc = ComplianceDocument::new("Assurance flotte", DocumentKind::Insurance, now - Duration::days(3))
            .with_expiration(now - Duration::days(1));
        doc.status = DocumentStatus::Valid;

        let saved = service.save(doc).await.unwrap();
        assert_eq!(saved.status, DocumentStatus::Expired);
        assert_eq!(saved.updated_at, now);

        let stored: ComplianceDocument = service.get(saved.id).await.unwrap();
        assert_eq!(stored.status, DocumentStatus::Expired);
    }
}
