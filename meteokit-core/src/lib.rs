//! Closed-form meteorological formulas
//!
//! Absolute humidity, extraterrestrial solar irradiance and its
//! partitioning, and sky temperature. Every function is a pure mapping from
//! scalars to a scalar, so the crate is `no_std` and allocation-free.
//!
//! Key properties:
//! - No state, no I/O, safe to call from anywhere
//! - Raw formulas never validate; bad inputs surface as NaN/infinity
//! - Opt-in validation through [`checked`] and [`validators`]
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use meteokit_core::{absolute_humidity, sky_temperature, GeoCoordinate, IrradianceComponents};
//!
//! let now = Utc.with_ymd_and_hms(2024, 6, 21, 13, 0, 0).unwrap();
//! let madrid = GeoCoordinate::new(40.4, -3.7);
//!
//! let sun = IrradianceComponents::compute(&now, madrid, 2.0);
//! let water = absolute_humidity(31.0, 35.0);
//! let sky = sky_temperature(31.0, 2.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod checked;
pub mod constants;
pub mod errors;
pub mod humidity;
pub mod sky;
pub mod solar;
pub mod traits;
pub mod types;
pub mod validators;

// Public API
pub use errors::{ValidationError, ValidationResult};
pub use humidity::{absolute_humidity, absolute_humidity_g_per_kg, water_vapour_saturation};
pub use sky::sky_temperature;
pub use solar::{
    diffuse_irradiance, direct_irradiance, extraterrestrial_irradiance, global_irradiance,
};
pub use traits::{Validatable, Validator, ValidatorConstraints};
pub use types::{GeoCoordinate, IrradianceComponents};
pub use validators::{
    CloudinessValidator, CoordinateValidator, RelativeHumidityValidator, TemperatureValidator,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
