//! Geographic coordinate validator
//!
//! Latitude outside ±90° has no meaning. Longitude is periodic, so the
//! formulas happily accept 190°, but a value outside ±180° is almost
//! always a swapped pair or a unit mix-up, so it is rejected.

use crate::{
    constants::limits::{LATITUDE_MAX_DEG, LATITUDE_MIN_DEG, LONGITUDE_MAX_DEG, LONGITUDE_MIN_DEG},
    errors::ValidationResult,
    traits::{Validator, ValidatorConstraints},
    types::GeoCoordinate,
};

use super::utils;

/// Validator for latitude/longitude pairs in degrees
#[derive(Debug, Clone)]
pub struct CoordinateValidator {
    latitude: ValidatorConstraints,
    longitude: ValidatorConstraints,
}

impl Default for CoordinateValidator {
    fn default() -> Self {
        Self {
            latitude: ValidatorConstraints {
                min_value: LATITUDE_MIN_DEG,
                max_value: LATITUDE_MAX_DEG,
            },
            longitude: ValidatorConstraints {
                min_value: LONGITUDE_MIN_DEG,
                max_value: LONGITUDE_MAX_DEG,
            },
        }
    }
}

impl CoordinateValidator {
    /// Domain enforced on longitude; [`Validator::constraints`] gives latitude
    pub fn longitude_constraints(&self) -> ValidatorConstraints {
        self.longitude
    }
}

impl Validator for CoordinateValidator {
    type Value = GeoCoordinate;

    fn validate(&self, value: Self::Value) -> ValidationResult<()> {
        utils::check_finite(value.latitude)?;
        utils::check_finite(value.longitude)?;

        utils::check_range(value.latitude, self.latitude.min_value, self.latitude.max_value)?;
        utils::check_range(value.longitude, self.longitude.min_value, self.longitude.max_value)
    }

    fn constraints(&self) -> ValidatorConstraints {
        self.latitude
    }
}
