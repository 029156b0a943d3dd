//! Pólizas de seguro y siniestros
//!
//! Las modificaciones parciales (añadir un siniestro, cambiar su estado)
//! reescriben la póliza completa por `RecordService::save`, de modo que el
//! estado temporal se recalcula también en esos caminos.

use tracing::info;
use uuid::Uuid;

use super::record_service::RecordService;
use crate::models::{Claim, InsurancePolicy, InsuranceStatus, Vehicle};
use crate::utils::errors::{not_found_error, AppResult};

pub struct InsuranceService {
    records: RecordService,
}

impl InsuranceService {
    pub fn new(records: RecordService) -> Self {
        Self { records }
    }

    pub async fn create_policy(&self, policy: InsurancePolicy) -> AppResult<InsurancePolicy> {
        self.records.get::<Vehicle>(policy.vehicle_id).await?;
        let policy = self.records.save(policy).await?;
        info!("🛡️ Póliza {} creada ({})", policy.policy_number, policy.status);
        Ok(policy)
    }

    pub async fn update_policy(&self, mut policy: InsurancePolicy) -> AppResult<InsurancePolicy> {
        let previous = self.records.get::<InsurancePolicy>(policy.id).await?;
        policy.created_at = previous.created_at;
        self.records.save(policy).await
    }

    /// Cancelar es la única transición forzada por un humano; reactivar
    /// devuelve la póliza a las reglas de fechas.
    pub async fn set_cancelled(&self, policy_id: Uuid, cancelled: bool) -> AppResult<InsurancePolicy> {
        let mut policy = self.records.get::<InsurancePolicy>(policy_id).await?;
        policy.status = if cancelled {
            InsuranceStatus::Cancelled
        } else {
            InsuranceStatus::Valid
        };
        let policy = self.records.save(policy).await?;
        info!("🛡️ Póliza {} → {}", policy.policy_number, policy.status);
        Ok(policy)
    }

    pub async fn add_claim(&self, policy_id: Uuid, claim: Claim) -> AppResult<InsurancePolicy> {
        let mut policy = self.records.get::<InsurancePolicy>(policy_id).await?;
        policy.claims.push(claim);
        self.records.save(policy).await
    }

    pub async fn update_claim<F>(&self, policy_id: Uuid, claim_id: Uuid, change: F) -> AppResult<InsurancePolicy>
    where
        F: FnOnce(&mut Claim),
    {
        let mut policy = self.records.get::<InsurancePolicy>(policy_id).await?;
        let claim = policy
            .claim_mut(claim_id)
            .ok_or_else(|| not_found_error("Claim", &claim_id.to_string()))?;
        change(claim);
        self.records.save(policy).await
    }
}
