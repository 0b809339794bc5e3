//! Value types shared by the formulas and the validation layer.

use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::solar::irradiance::{
    diffuse_irradiance, direct_irradiance, extraterrestrial_irradiance, global_irradiance,
};

/// Position on the Earth's surface in degrees.
///
/// Latitude is positive north, longitude positive east. Nothing is checked
/// on construction; see [`crate::validators::CoordinateValidator`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoCoordinate {
    /// Latitude (°), -90 to 90
    pub latitude: f64,
    /// Longitude (°), -180 to 180
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a coordinate from latitude and longitude in degrees
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Solar irradiance split into its components, all in W/m².
///
/// `direct + diffuse == global` by construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IrradianceComponents {
    /// Top of atmosphere, horizontal plane
    pub extraterrestrial: f64,
    /// Total at the surface after cloud attenuation
    pub global: f64,
    /// Scattered part of global
    pub diffuse: f64,
    /// Beam part of global
    pub direct: f64,
}

impl IrradianceComponents {
    /// Compute all components for an instant, a location and a cloud cover
    /// in oktas.
    pub fn compute(instant: &DateTime<Utc>, coordinate: GeoCoordinate, cloudiness: f64) -> Self {
        let extraterrestrial =
            extraterrestrial_irradiance(instant, coordinate.latitude, coordinate.longitude);
        Self::from_extraterrestrial(extraterrestrial, cloudiness)
    }

    /// Partition a known extraterrestrial irradiance.
    pub fn from_extraterrestrial(extraterrestrial: f64, cloudiness: f64) -> Self {
        let global = global_irradiance(extraterrestrial, cloudiness);
        let diffuse = diffuse_irradiance(global, extraterrestrial);
        let direct = direct_irradiance(global, diffuse);

        Self {
            extraterrestrial,
            global,
            diffuse,
            direct,
        }
    }

    /// True when the sun is on or below the horizon.
    pub fn is_night(&self) -> bool {
        self.extraterrestrial == 0.0
    }
}
