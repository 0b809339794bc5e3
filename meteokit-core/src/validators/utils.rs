//! Common Validation Utilities
//!
//! Shared checks used by every validator so they reject inputs the same
//! way. All of them are pure functions with no allocation.
//!
//! ## Order of Checks
//!
//! Validators run the cheap, most specific checks first:
//!
//! ```text
//! 1. finite?          -> InvalidValue
//! 2. on a pole?       -> Singularity      (temperature only)
//! 3. inside domain?   -> OutOfRange
//! ```
//!
//! A NaN compares false against everything, so it has to be caught before
//! the range check or it would slip through as "in range".

use crate::{
    errors::{ValidationError, ValidationResult},
    traits::{Validatable, ValidatorConstraints},
};

/// Reject NaN and infinities
pub fn check_finite(value: f64) -> ValidationResult<()> {
    if value.is_valid() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue)
    }
}

/// Check if a value is within the specified range (inclusive)
pub fn check_range(value: f64, min: f64, max: f64) -> ValidationResult<()> {
    let domain = ValidatorConstraints {
        min_value: min,
        max_value: max,
    };

    if domain.contains(value) {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange { value, min, max })
    }
}

/// Reject values within `epsilon` of `pole`
pub fn check_pole(
    value: f64,
    pole: f64,
    epsilon: f64,
    reason: &'static str,
) -> ValidationResult<()> {
    if libm::fabs(value - pole) <= epsilon {
        Err(ValidationError::Singularity { value, reason })
    } else {
        Ok(())
    }
}

/// Reject a computed value that is not finite
pub fn check_result(value: f64, reason: &'static str) -> ValidationResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(ValidationError::NonFiniteResult { reason })
    }
}
