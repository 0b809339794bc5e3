//! Solar irradiance model
//!
//! Split into sun position ([`geometry`]) and the irradiance formulas built
//! on it ([`irradiance`]). Everything is a free function over UTC instants
//! and degrees.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use meteokit_core::solar::{extraterrestrial_irradiance, global_irradiance};
//!
//! let noon = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();
//! let top_of_atmosphere = extraterrestrial_irradiance(&noon, 51.5, 0.0);
//! let at_surface = global_irradiance(top_of_atmosphere, 4.0);
//! assert!(at_surface < top_of_atmosphere);
//! ```

pub mod geometry;
pub mod irradiance;

pub use geometry::{
    days_into_year, declination, degrees_to_radians, equation_of_time, hour_angle, solar_time,
};
pub use irradiance::{
    cos_zenith, diffuse_irradiance, direct_irradiance, eccentricity_correction,
    extraterrestrial_irradiance, global_irradiance,
};
