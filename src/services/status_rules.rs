//! Reglas temporales de estado
//!
//! Funciones puras: reciben fechas y "ahora" y devuelven un estado. No
//! tocan almacenamiento ni el reloj del sistema.

use chrono::{DateTime, Duration, Utc};

use crate::models::{DocumentStatus, InsuranceStatus};

/// Días restantes a partir de los cuales un documento pasa a "por renovar"
pub const EXPIRING_THRESHOLD_DAYS: i64 = 30;

/// `floor((expiration - now) / 1 día)`
pub fn days_remaining(expiration: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = expiration - now;
    let whole = delta.num_days();
    if delta < Duration::days(whole) {
        whole - 1
    } else {
        whole
    }
}

/// `ceil((expiration - now) / 1 día)`; negativo si ya expiró
pub fn days_until_expiration(expiration: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let delta = expiration - now;
    let whole = delta.num_days();
    if delta > Duration::days(whole) {
        whole + 1
    } else {
        whole
    }
}

pub fn derive_document_status(expiration: DateTime<Utc>, now: DateTime<Utc>) -> DocumentStatus {
    let remaining = days_remaining(expiration, now);
    if remaining < 0 {
        DocumentStatus::Expired
    } else if remaining <= EXPIRING_THRESHOLD_DAYS {
        DocumentStatus::Expiring
    } else {
        DocumentStatus::Valid
    }
}

/// La expiración se evalúa siempre antes que el inicio de vigencia.
pub fn derive_insurance_status(
    start: DateTime<Utc>,
    expiration: DateTime<Utc>,
    current: InsuranceStatus,
    now: DateTime<Utc>,
) -> InsuranceStatus {
    if current == InsuranceStatus::Cancelled {
        InsuranceStatus::Cancelled
    } else if now > expiration {
        InsuranceStatus::Expired
    } else if now < start {
        InsuranceStatus::Suspended
    } else {
        InsuranceStatus::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_days_remaining_floors() {
        let now = now();
        assert_eq!(days_remaining(now + Duration::hours(36), now), 1);
        assert_eq!(days_remaining(now - Duration::hours(1), now), -1);
        assert_eq!(days_remaining(now - Duration::seconds(1), now), -1);
        assert_eq!(days_remaining(now, now), 0);
        assert_eq!(days_remaining(now - Duration::days(2), now), -2);
    }

    #[test]
    fn test_days_until_expiration_ceils() {
        let now = now();
        assert_eq!(days_until_expiration(now + Duration::hours(36), now), 2);
        assert_eq!(days_until_expiration(now + Duration::days(3), now), 3);
        assert_eq!(days_until_expiration(now - Duration::hours(36), now), -1);
        assert_eq!(days_until_expiration(now, now), 0);
    }

    #[test]
    fn test_document_past_expiration_is_expired() {
        let now = now();
        assert_eq!(
            derive_document_status(now - Duration::minutes(5), now),
            DocumentStatus::Expired
        );
        assert_eq!(
            derive_document_status(now - Duration::days(400), now),
            DocumentStatus::Expired
        );
    }

    #[test]
    fn test_document_threshold_boundaries() {
        let now = now();
        assert_eq!(derive_document_status(now, now), DocumentStatus::Expiring);
        assert_eq!(
            derive_document_status(now + Duration::days(30), now),
            DocumentStatus::Expiring
        );
        assert_eq!(
            derive_document_status(now + Duration::days(30) + Duration::hours(23), now),
            DocumentStatus::Expiring
        );
        assert_eq!(
            derive_document_status(now + Duration::days(31), now),
            DocumentStatus::Valid
        );
    }

    #[test]
    fn test_insurance_cancelled_is_terminal() {
        let now = now();
        let status = derive_insurance_status(
            now - Duration::days(400),
            now - Duration::days(30),
            InsuranceStatus::Cancelled,
            now,
        );
        assert_eq!(status, InsuranceStatus::Cancelled);
    }

    #[test]
    fn test_insurance_date_rules() {
        let now = now();
        let start = now - Duration::days(10);
        let end = now + Duration::days(355);

        assert_eq!(
            derive_insurance_status(start, end, InsuranceStatus::Valid, now),
            InsuranceStatus::Valid
        );
        assert_eq!(
            derive_insurance_status(now + Duration::days(1), end, InsuranceStatus::Valid, now),
            InsuranceStatus::Suspended
        );
        assert_eq!(
            derive_insurance_status(start, now - Duration::seconds(1), InsuranceStatus::Suspended, now),
            InsuranceStatus::Expired
        );
        // Expirada y "reactivada" por fechas nuevas
        assert_eq!(
            derive_insurance_status(start, end, InsuranceStatus::Expired, now),
            InsuranceStatus::Valid
        );
    }

    #[test]
    fn test_insurance_expiration_takes_precedence() {
        let now = now();
        let status = derive_insurance_status(
            now + Duration::days(5),
            now - Duration::days(5),
            InsuranceStatus::Valid,
            now,
        );
        assert_eq!(status, InsuranceStatus::Expired);
    }
}
