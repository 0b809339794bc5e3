//! Relative humidity validator
//!
//! Relative humidity is a percentage of saturation, so the definition
//! bounds it to 0-100%. Supersaturated air exists (fog, clean air without
//! condensation nuclei) but the Magnus fit is not meant for it; callers
//! who want to accept it can widen the limits.

use crate::{
    constants::limits::{RELATIVE_HUMIDITY_MAX_PCT, RELATIVE_HUMIDITY_MIN_PCT},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for relative humidity percentage
#[derive(Debug, Clone)]
pub struct RelativeHumidityValidator {
    /// Minimum valid RH%
    min_percent: f64,

    /// Maximum valid RH%
    max_percent: f64,
}

impl Default for RelativeHumidityValidator {
    fn default() -> Self {
        Self {
            min_percent: RELATIVE_HUMIDITY_MIN_PCT,
            max_percent: RELATIVE_HUMIDITY_MAX_PCT,
        }
    }
}

impl RelativeHumidityValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            min_percent: min,
            max_percent: max,
        }
    }
}

impl Validator for RelativeHumidityValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_range(value, self.min_percent, self.max_percent)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_percent,
            max_value: self.max_percent,
        }
    }
}
