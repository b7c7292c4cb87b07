//! Range and shape checks shared by the entity records.

use super::ValidationError;

pub(crate) fn within(
    field: &'static str,
    constraint: &'static str,
    found: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if found < min || found > max {
        return Err(ValidationError::OutOfRange {
            field,
            constraint,
            found,
        });
    }
    Ok(())
}

pub(crate) fn non_negative(field: &'static str, found: f64) -> Result<(), ValidationError> {
    if found < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            constraint: "zero or greater",
            found,
        });
    }
    Ok(())
}

/// Lightweight address check: an `@` and a `.` must both be present.
pub(crate) fn email_shape(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains('@') && value.contains('.') {
        Ok(())
    } else {
        Err(ValidationError::Email {
            field,
            found: value.to_string(),
        })
    }
}
