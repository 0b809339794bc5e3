//! Documented input domains.
//!
//! The raw formulas accept anything; these bounds are only enforced by the
//! validators in [`crate::validators`].

/// Cloud cover of a clear sky (oktas).
pub const OKTAS_CLEAR: f64 = 0.0;

/// Cloud cover of a fully overcast sky (oktas).
pub const OKTAS_OVERCAST: f64 = 8.0;

/// Minimum relative humidity (%).
pub const RELATIVE_HUMIDITY_MIN_PCT: f64 = 0.0;

/// Maximum relative humidity (%).
pub const RELATIVE_HUMIDITY_MAX_PCT: f64 = 100.0;

/// Southernmost latitude (°).
pub const LATITUDE_MIN_DEG: f64 = -90.0;

/// Northernmost latitude (°).
pub const LATITUDE_MAX_DEG: f64 = 90.0;

/// Westernmost longitude (°).
pub const LONGITUDE_MIN_DEG: f64 = -180.0;

/// Easternmost longitude (°).
pub const LONGITUDE_MAX_DEG: f64 = 180.0;

/// Minimum environmental temperature accepted by default (°C).
///
/// Coldest natural temperature recorded on Earth is -89.2°C at Vostok
/// Station; the humidity coefficients are not fitted below about -20°C
/// anyway.
///
/// Source: World Meteorological Organization
pub const ENVIRONMENT_TEMP_MIN_C: f64 = -80.0;

/// Maximum environmental temperature accepted by default (°C).
///
/// Hottest reliable temperature recorded on Earth is 54.4°C in Death Valley.
///
/// Source: World Meteorological Organization
pub const ENVIRONMENT_TEMP_MAX_C: f64 = 60.0;

/// Distance from a formula pole treated as sitting on it (°C).
pub const SINGULARITY_EPSILON_C: f64 = 1e-9;
