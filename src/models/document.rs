//! Modelo de documentos de cumplimiento
//!
//! El `status` de un documento es siempre derivado de su fecha de
//! expiración; nunca se acepta desde el cliente.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{EntityKind, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Vehicle,
    Driver,
    Maintenance,
    Insurance,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Valid,
    Expiring,
    Expired,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Valid => "valid",
            DocumentStatus::Expiring => "expiring",
            DocumentStatus::Expired => "expired",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ComplianceDocument {
    pub id: Uuid,
    pub title: String,
    pub kind: DocumentKind,
    /// Registro propietario (vehículo, conductor, póliza...)
    pub reference_id: Option<Uuid>,
    pub document_number: Option<String>,
    pub issue_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub status: DocumentStatus,
    pub file_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ComplianceDocument {
    pub fn new(title: impl Into<String>, kind: DocumentKind, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            reference_id: None,
            document_number: None,
            issue_date: None,
            expiration_date: None,
            status: DocumentStatus::Valid,
            file_url: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_expiration(mut self, expiration_date: DateTime<Utc>) -> Self {
        self.expiration_date = Some(expiration_date);
        self
    }
}

impl Record for ComplianceDocument {
    const KIND: EntityKind = EntityKind::Document;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
