//! Modelo de pólizas de seguro y siniestros
//!
//! `cancelled` es el único estado que un humano puede forzar; el resto se
//! deriva de `start_date` y `expiration_date`. Los siniestros (`Claim`)
//! tienen su propio estado, fijado por el usuario.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{EntityKind, Record};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum InsuranceStatus {
    #[default]
    Valid,
    Expired,
    Suspended,
    Cancelled,
}

impl InsuranceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsuranceStatus::Valid => "valid",
            InsuranceStatus::Expired => "expired",
            InsuranceStatus::Suspended => "suspended",
            InsuranceStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for InsuranceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    #[default]
    Declared,
    InProgress,
    Accepted,
    Refused,
    Closed,
}

impl ClaimStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Declared => "declared",
            ClaimStatus::InProgress => "in_progress",
            ClaimStatus::Accepted => "accepted",
            ClaimStatus::Refused => "refused",
            ClaimStatus::Closed => "closed",
        }
    }
}

/// Siniestro declarado sobre una póliza
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claim {
    pub id: Uuid,
    pub claim_date: DateTime<Utc>,
    pub description: String,
    pub status: ClaimStatus,
    pub damage_amount: Option<Decimal>,
    pub indemnified_amount: Option<Decimal>,
}

impl Claim {
    pub fn new(claim_date: DateTime<Utc>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            claim_date,
            description: description.into(),
            status: ClaimStatus::Declared,
            damage_amount: None,
            indemnified_amount: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsurancePolicy {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub insurer: String,
    pub policy_number: String,
    pub coverage_type: Option<String>,
    pub premium: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
    pub status: InsuranceStatus,
    #[serde(default)]
    pub claims: Vec<Claim>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InsurancePolicy {
    pub fn new(
        vehicle_id: Uuid,
        insurer: impl Into<String>,
        policy_number: impl Into<String>,
        start_date: DateTime<Utc>,
        expiration_date: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            vehicle_id,
            insurer: insurer.into(),
            policy_number: policy_number.into(),
            coverage_type: None,
            premium: None,
            start_date,
            expiration_date,
            status: InsuranceStatus::Valid,
            claims: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn claim_mut(&mut self, claim_id: Uuid) -> Option<&mut Claim> {
        self.claims.iter_mut().find(|c| c.id == claim_id)
    }
}

impl Record for InsurancePolicy {
    const KIND: EntityKind = EntityKind::Insurance;

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
