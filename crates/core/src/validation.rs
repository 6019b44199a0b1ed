//! Field-level input validators.
//!
//! Validators return a plain message on failure so the handlers can
//! aggregate every offending field into one validation error instead of
//! reporting them one at a time.

use crate::error::CoreError;

/// Collects per-field validation failures for one request payload.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of validating one field.
    pub fn check(&mut self, field: &str, result: Result<(), String>) {
        if let Err(message) = result {
            self.errors.push(format!("{field}: {message}"));
        }
    }

    /// Produce one aggregated error listing every offending field, or `Ok`.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors.join(", ")))
        }
    }
}

/// Require a non-blank value whose trimmed length is within bounds.
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("must not be blank".into());
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!("must be between {min} and {max} characters"));
    }
    Ok(())
}

/// Require a length within bounds without a blank check.
///
/// Used on patch payloads, where a blank-but-long-enough string is a valid
/// "no change" sentinel for name-like fields rather than an error.
pub fn validate_size(value: &str, min: usize, max: usize) -> Result<(), String> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(format!("must be between {min} and {max} characters"));
    }
    Ok(())
}

/// Require a value no longer than `max` characters (blank allowed).
pub fn validate_max_length(value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(format!("must not exceed {max} characters"));
    }
    Ok(())
}

/// Require a non-blank value.
pub fn validate_not_blank(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("must not be blank".into())
    } else {
        Ok(())
    }
}

/// Require a strictly positive quantity.
pub fn validate_positive(value: rust_decimal::Decimal) -> Result<(), String> {
    if value > rust_decimal::Decimal::ZERO {
        Ok(())
    } else {
        Err("must be positive".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn length_bounds_are_inclusive() {
        assert!(validate_length("abcde", 5, 100).is_ok());
        assert!(validate_length("abcd", 5, 100).is_err());
        assert!(validate_length(&"x".repeat(100), 5, 100).is_ok());
        assert!(validate_length(&"x".repeat(101), 5, 100).is_err());
    }

    #[test]
    fn blank_values_fail_length_checks() {
        assert!(validate_length("     ", 1, 10).is_err());
        assert!(validate_not_blank("  ").is_err());
        assert!(validate_not_blank("ok").is_ok());
    }

    #[test]
    fn size_check_accepts_blank_within_bounds() {
        assert!(validate_size("      ", 5, 100).is_ok());
        assert!(validate_size("   ", 5, 100).is_err());
    }

    #[test]
    fn max_length_allows_blank() {
        assert!(validate_max_length("", 10).is_ok());
        assert!(validate_max_length(&"x".repeat(11), 10).is_err());
    }

    #[test]
    fn quantity_must_be_strictly_positive() {
        use rust_decimal::Decimal;
        assert!(validate_positive(Decimal::new(150, 2)).is_ok());
        assert!(validate_positive(Decimal::ZERO).is_err());
        assert!(validate_positive(Decimal::new(-1, 0)).is_err());
    }

    #[test]
    fn field_errors_aggregate_all_failures() {
        let mut errors = FieldErrors::new();
        errors.check("title", validate_length("ab", 5, 100));
        errors.check("description", validate_max_length("ok", 3000));
        errors.check("contact", validate_not_blank(""));

        let err = errors.into_result().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) => {
            assert!(msg.contains("title:"));
            assert!(msg.contains("contact:"));
            assert!(!msg.contains("description:"));
        });
    }
}
