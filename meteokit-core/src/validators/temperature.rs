//! Temperature validator with formula poles
//!
//! Validates air temperatures before they reach the humidity formulas:
//! - Finite numbers only
//! - Never on absolute zero, where absolute humidity divides by zero
//! - Never on `-Tn` of the low-range Magnus fit, where saturation pressure
//!   divides by zero (the high-range pole at -229.4°C cannot be reached
//!   because that set only applies above 50°C)
//! - Within the configured range

use crate::{
    constants::{
        limits::{ENVIRONMENT_TEMP_MAX_C, ENVIRONMENT_TEMP_MIN_C, SINGULARITY_EPSILON_C},
        physics::{ABSOLUTE_ZERO_CELSIUS, MAGNUS_LOW_RANGE},
    },
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Temperature validator for Celsius inputs
#[derive(Debug, Clone)]
pub struct TemperatureValidator {
    /// Minimum valid temperature in Celsius
    min_celsius: f64,

    /// Maximum valid temperature in Celsius
    max_celsius: f64,
}

impl Default for TemperatureValidator {
    fn default() -> Self {
        Self {
            // Coldest natural Earth temp: -89.2°C Antarctica
            min_celsius: ENVIRONMENT_TEMP_MIN_C,
            max_celsius: ENVIRONMENT_TEMP_MAX_C,
        }
    }
}

impl TemperatureValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        // Sanity check: can't have min > max
        let (min, max) = if min > max { (max, min) } else { (min, max) };

        Self {
            min_celsius: libm::fmax(min, ABSOLUTE_ZERO_CELSIUS), // Can't go below absolute zero
            max_celsius: max,
        }
    }

    /// Accept anything the formulas can evaluate: above absolute zero and
    /// off the poles, with no upper bound.
    pub fn physical() -> Self {
        Self {
            min_celsius: ABSOLUTE_ZERO_CELSIUS,
            max_celsius: f64::MAX,
        }
    }
}

impl Validator for TemperatureValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;

        utils::check_pole(
            value,
            ABSOLUTE_ZERO_CELSIUS,
            SINGULARITY_EPSILON_C,
            "absolute humidity is undefined at absolute zero",
        )?;
        utils::check_pole(
            value,
            -MAGNUS_LOW_RANGE.tn,
            SINGULARITY_EPSILON_C,
            "saturation pressure is undefined at -Tn",
        )?;

        utils::check_range(value, self.min_celsius, self.max_celsius)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_celsius,
            max_value: self.max_celsius,
        }
    }
}
