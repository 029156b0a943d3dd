//! Utilidades de validación
//!
//! Validadores custom para los DTOs (`#[validate(custom = "...")]`)
//! y comprobaciones entre campos.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::ValidationError;

lazy_static! {
    /// Matrícula: letras, dígitos, espacios o guiones; como mucho 16 caracteres.
    /// `validate_license_plate` exige además 4 a 12 sin espacios ni guiones
    pub static ref LICENSE_PLATE_RE: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 \-]{2,14}[A-Za-z0-9]$").unwrap();
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un importe no sea negativo
pub fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar formato de matrícula de vehículo
pub fn validate_license_plate(value: &str) -> Result<(), ValidationError> {
    let clean_plate = value.replace([' ', '-'], "");
    if !LICENSE_PLATE_RE.is_match(value) || clean_plate.len() < 4 || clean_plate.len() > 12 {
        let mut error = ValidationError::new("license_plate");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que la fecha de fin no sea anterior a la de inicio
pub fn validate_date_order(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if end < start {
        let mut error = ValidationError::new("date_order");
        error.add_param("start".into(), &start.to_rfc3339());
        error.add_param("end".into(), &end.to_rfc3339());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Renault").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }

    #[test]
    fn test_validate_non_negative_amount() {
        assert!(validate_non_negative_amount(&Decimal::new(1250, 2)).is_ok());
        assert!(validate_non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount(&Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn test_validate_license_plate() {
        assert!(validate_license_plate("AB-123-CD").is_ok());
        assert!(validate_license_plate("1234 ABC").is_ok());
        assert!(validate_license_plate("A").is_err());
        assert!(validate_license_plate("AB_123_CD").is_err());
        assert!(validate_license_plate("ABCDEFGHIJKLMN").is_err());
        assert!(validate_license_plate("AB - 1234 - CDEF").is_ok());
        assert!(validate_license_plate("AB  - 1234 - CDEF").is_err());
    }

    #[test]
    fn test_validate_date_order() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 12, 31, 0, 0, 0).unwrap();
        assert!(validate_date_order(start, end).is_ok());
        assert!(validate_date_order(end, start).is_err());
    }
}
