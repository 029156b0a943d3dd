//! Contrato de almacenamiento de documentos
//!
//! Un `RecordStore` guarda cada registro como un documento JSON completo
//! identificado por `(EntityKind, id)`. Las escrituras de varias entidades
//! se aplican con `apply`, que debe ser todo-o-nada.

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::models::EntityKind;
use crate::utils::errors::AppResult;

/// Filtro simple para `fetch_all`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Solo registros cuyo `vehicle_id` coincide
    pub vehicle_id: Option<Uuid>,
    /// Solo registros donde este campo existe y no es null
    pub present_field: Option<&'static str>,
}

impl RecordFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_vehicle(vehicle_id: Uuid) -> Self {
        Self {
            vehicle_id: Some(vehicle_id),
            present_field: None,
        }
    }

    pub fn with_field(field: &'static str) -> Self {
        Self {
            vehicle_id: None,
            present_field: Some(field),
        }
    }

    /// Evalúa el filtro contra un documento ya cargado
    pub fn matches(&self, body: &Value) -> bool {
        if let Some(vehicle_id) = self.vehicle_id {
            let expected = vehicle_id.to_string();
            if body.get("vehicle_id").and_then(Value::as_str) != Some(expected.as_str()) {
                return false;
            }
        }
        if let Some(field) = self.present_field {
            if body.get(field).map_or(true, Value::is_null) {
                return false;
            }
        }
        true
    }
}

/// Escritura pendiente dentro de un lote
#[derive(Debug, Clone, PartialEq)]
pub enum PendingWrite {
    Put { kind: EntityKind, id: Uuid, body: Value },
    Delete { kind: EntityKind, id: Uuid },
}

impl PendingWrite {
    pub fn id(&self) -> Uuid {
        match self {
            PendingWrite::Put { id, .. } | PendingWrite::Delete { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            PendingWrite::Put { kind, .. } | PendingWrite::Delete { kind, .. } => *kind,
        }
    }
}

/// Lote ordenado de escrituras aplicado de forma atómica
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    writes: Vec<PendingWrite>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, write: PendingWrite) {
        self.writes.push(write);
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    pub fn writes(&self) -> &[PendingWrite] {
        &self.writes
    }

    pub fn into_writes(self) -> Vec<PendingWrite> {
        self.writes
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn fetch(&self, kind: EntityKind, id: Uuid) -> AppResult<Option<Value>>;

    async fn fetch_all(&self, kind: EntityKind, filter: &RecordFilter) -> AppResult<Vec<Value>>;

    /// Inserta o reemplaza el documento completo
    async fn upsert(&self, kind: EntityKind, id: Uuid, body: Value) -> AppResult<()>;

    /// Devuelve `true` si existía
    async fn remove(&self, kind: EntityKind, id: Uuid) -> AppResult<bool>;

    async fn apply(&self, batch: WriteBatch) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_matches() {
        let vehicle_id = Uuid::new_v4();
        let body = json!({ "vehicle_id": vehicle_id.to_string(), "expiration_date": null });

        assert!(RecordFilter::all().matches(&body));
        assert!(RecordFilter::for_vehicle(vehicle_id).matches(&body));
        assert!(!RecordFilter::for_vehicle(Uuid::new_v4()).matches(&body));
        assert!(!RecordFilter::with_field("expiration_date").matches(&body));
        assert!(!RecordFilter::with_field("missing").matches(&body));
    }
}
