//! Cloud cover validator (oktas)
//!
//! Cloud cover is reported in eighths of the sky: 0 is clear, 8 fully
//! overcast. Fractional values are accepted since some sources average
//! observations. Beyond 8 the irradiance and sky temperature models
//! extrapolate into nonsense (negative global irradiance above ~9.09).

use crate::{
    constants::limits::{OKTAS_CLEAR, OKTAS_OVERCAST},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for cloud cover in oktas
#[derive(Debug, Clone)]
pub struct CloudinessValidator {
    min_oktas: f64,
    max_oktas: f64,
}

impl Default for CloudinessValidator {
    fn default() -> Self {
        Self {
            min_oktas: OKTAS_CLEAR,
            max_oktas: OKTAS_OVERCAST,
        }
    }
}

impl CloudinessValidator {
    /// Create validator with custom limits
    pub fn new_with_limits(min: f64, max: f64) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            min_oktas: min,
            max_oktas: max,
        }
    }
}

impl Validator for CloudinessValidator {
    type Value = f64;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value)?;
        utils::check_range(value, self.min_oktas, self.max_oktas)
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: self.min_oktas,
            max_value: self.max_oktas,
        }
    }
}
