//! Input validation for create/update payloads.
//!
//! Mirrors the constraints the backend enforces so obviously bad input
//! is rejected before a request is issued.

use crate::error::CliError;

/// Character-length bounds shared by most text fields.
pub fn len_range(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), CliError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CliError::Validation {
            field,
            reason: format!("must be between {min} and {max} characters (got {len})"),
        });
    }
    Ok(())
}

pub fn name(value: &str) -> Result<(), CliError> {
    len_range("name", value, 3, 50)
}

pub fn sku(value: &str) -> Result<(), CliError> {
    len_range("sku", value, 3, 20)
}

pub fn company(value: &str) -> Result<(), CliError> {
    len_range("company", value, 3, 50)
}

pub fn phone(value: &str) -> Result<(), CliError> {
    len_range("phone", value, 5, 20)
}

/// Category names are restricted to letters and spaces.
pub fn category_name(value: &str) -> Result<(), CliError> {
    name(value)?;
    if !value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(CliError::Validation {
            field: "name",
            reason: "can only contain letters and spaces".into(),
        });
    }
    Ok(())
}

/// Minimal email shape check; the backend does the real validation.
pub fn email(value: &str) -> Result<(), CliError> {
    let valid = match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.'),
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CliError::Validation {
            field: "email",
            reason: format!("'{value}' is not a valid email address"),
        })
    }
}

pub fn positive(field: &'static str, value: f64) -> Result<(), CliError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(CliError::Validation {
            field,
            reason: format!("must be positive (got {value})"),
        })
    }
}

pub fn non_negative(field: &'static str, value: f64) -> Result<(), CliError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(CliError::Validation {
            field,
            reason: format!("must not be negative (got {value})"),
        })
    }
}

pub fn positive_id(field: &'static str, value: i64) -> Result<(), CliError> {
    if value > 0 {
        Ok(())
    } else {
        Err(CliError::Validation {
            field,
            reason: format!("must be a positive id (got {value})"),
        })
    }
}

pub fn non_negative_int(field: &'static str, value: i64) -> Result<(), CliError> {
    if value >= 0 {
        Ok(())
    } else {
        Err(CliError::Validation {
            field,
            reason: format!("must not be negative (got {value})"),
        })
    }
}
