use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ComplianceDocument, DocumentKind};
use crate::utils::validation::validate_not_blank;

// Request para registrar un documento. No lleva `status`: siempre se deriva
// de `expiration_date`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    #[validate(custom = "validate_not_blank")]
    pub title: String,
    pub kind: DocumentKind,
    pub reference_id: Option<Uuid>,
    pub document_number: Option<String>,
    pub issue_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    #[validate(url)]
    pub file_url: Option<String>,
    pub notes: Option<String>,
}

impl CreateDocumentRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> ComplianceDocument {
        let mut doc = ComplianceDocument::new(self.title, self.kind, now);
        doc.reference_id = self.reference_id;
        doc.document_number = self.document_number;
        doc.issue_date = self.issue_date;
        doc.expiration_date = self.expiration_date;
        doc.file_url = self.file_url;
        doc.notes = self.notes;
        doc
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDocumentRequest {
    #[validate(custom = "validate_not_blank")]
    pub title: Option<String>,
    pub kind: Option<DocumentKind>,
    pub reference_id: Option<Uuid>,
    pub document_number: Option<String>,
    pub issue_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    #[validate(url)]
    pub file_url: Option<String>,
    pub notes: Option<String>,
}

impl UpdateDocumentRequest {
    pub fn apply_to(self, doc: &mut ComplianceDocument) {
        if let Some(title) = self.title {
            doc.title = title;
        }
        if let Some(kind) = self.kind {
            doc.kind = kind;
        }
        if self.reference_id.is_some() {
            doc.reference_id = self.reference_id;
        }
        if self.document_number.is_some() {
            doc.document_number = self.document_number;
        }
        if self.issue_date.is_some() {
            doc.issue_date = self.issue_date;
        }
        if self.expiration_date.is_some() {
            doc.expiration_date = self.expiration_date;
        }
        if self.file_url.is_some() {
            doc.file_url = self.file_url;
        }
        if self.notes.is_some() {
            doc.notes = self.notes;
        }
    }
}
