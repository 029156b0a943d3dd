use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Claim, ClaimStatus, InsurancePolicy};
use crate::utils::validation::{validate_non_negative_amount, validate_not_blank};

// Request para crear una póliza. El estado se deriva de las fechas; la
// cancelación tiene su propia ruta.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePolicyRequest {
    pub vehicle_id: Uuid,
    #[validate(custom = "validate_not_blank")]
    pub insurer: String,
    #[validate(custom = "validate_not_blank")]
    pub policy_number: String,
    pub coverage_type: Option<String>,
    #[validate(custom = "validate_non_negative_amount")]
    pub premium: Option<Decimal>,
    pub start_date: DateTime<Utc>,
    pub expiration_date: DateTime<Utc>,
}

impl CreatePolicyRequest {
    pub fn into_model(self, now: DateTime<Utc>) -> InsurancePolicy {
        let mut policy = InsurancePolicy::new(
            self.vehicle_id,
            self.insurer,
            self.policy_number,
            self.start_date,
            self.expiration_date,
            now,
        );
        policy.coverage_type = self.coverage_type;
        policy.premium = self.premium;
        policy
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePolicyRequest {
    #[validate(custom = "validate_not_blank")]
    pub insurer: Option<String>,
    #[validate(custom = "validate_not_blank")]
    pub policy_number: Option<String>,
    pub coverage_type: Option<String>,
    #[validate(custom = "validate_non_negative_amount")]
    pub premium: Option<Decimal>,
    pub start_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
}

impl UpdatePolicyRequest {
    pub fn apply_to(self, policy: &mut InsurancePolicy) {
        if let Some(insurer) = self.insurer {
            policy.insurer = insurer;
        }
        if let Some(policy_number) = self.policy_number {
            policy.policy_number = policy_number;
        }
        if self.coverage_type.is_some() {
            policy.coverage_type = self.coverage_type;
        }
        if self.premium.is_some() {
            policy.premium = self.premium;
        }
        if let Some(start) = self.start_date {
            policy.start_date = start;
        }
        if let Some(expiration) = self.expiration_date {
            policy.expiration_date = expiration;
        }
    }
}

// Request para cancelar (o reactivar) una póliza
#[derive(Debug, Deserialize)]
pub struct CancelPolicyRequest {
    pub cancelled: bool,
}

// Request para declarar un siniestro
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClaimRequest {
    pub claim_date: DateTime<Utc>,
    #[validate(custom = "validate_not_blank")]
    pub description: String,
    pub status: Option<ClaimStatus>,
    #[validate(custom = "validate_non_negative_amount")]
    pub damage_amount: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub indemnified_amount: Option<Decimal>,
}

impl CreateClaimRequest {
    pub fn into_model(self) -> Claim {
        let mut claim = Claim::new(self.claim_date, self.description);
        claim.status = self.status.unwrap_or_default();
        claim.damage_amount = self.damage_amount;
        claim.indemnified_amount = self.indemnified_amount;
        claim
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateClaimRequest {
    #[validate(custom = "validate_not_blank")]
    pub description: Option<String>,
    pub status: Option<ClaimStatus>,
    #[validate(custom = "validate_non_negative_amount")]
    pub damage_amount: Option<Decimal>,
    #[validate(custom = "validate_non_negative_amount")]
    pub indemnified_amount: Option<Decimal>,
}

impl UpdateClaimRequest {
    pub fn apply_to(self, claim: &mut Claim) {
        if let Some(description) = self.description {
            claim.description = description;
        }
        if let Some(status) = self.status {
            claim.status = status;
        }
        if self.damage_amount.is_some() {
            claim.damage_amount = self.damage_amount;
        }
        if self.indemnified_amount.is_some() {
            claim.indemnified_amount = self.indemnified_amount;
        }
    }
}
