//! Core traits for input validators
//!
//! These traits define the interface all validators implement.
//! Keep them simple - the formulas are scalar in, scalar out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ValidationResult;

/// Core validator trait - implement this for each input kind
pub trait Validator {
    /// The type of value this validator handles
    type Value;

    /// Validate a single input
    fn validate(&self, value: Self::Value) -> ValidationResult<()>;

    /// Get the domain this validator enforces
    fn constraints(&self) -> ValidatorConstraints;
}

/// Domain enforced by a validator
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatorConstraints {
    /// Minimum valid value (inclusive)
    pub min_value: f64,

    /// Maximum valid value (inclusive)
    pub max_value: f64,
}

impl ValidatorConstraints {
    /// Whether `value` lies inside the domain. NaN never does.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min_value && value <= self.max_value
    }
}

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is a usable number (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
