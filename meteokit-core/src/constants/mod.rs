//! Constants for MeteoKit Core
//!
//! Every coefficient used by the formulas lives here with its unit and
//! source. The formula modules never embed magic numbers.
//!
//! ## Organization
//!
//! Constants are grouped by domain:
//! - **Physics**: humidity and sky temperature coefficients
//! - **Solar**: solar constant, orbital harmonics, cloud attenuation
//! - **Limits**: documented input domains used by the validators
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Use descriptive names that include units
//! 3. Reference the source of empirical coefficients

/// Thermodynamic constants and the humidity/sky temperature coefficients.
pub mod physics;

/// Solar constant, orbital terms and irradiance partitioning coefficients.
pub mod solar;

/// Input domains for boundary validation.
pub mod limits;

// Re-export commonly used constants for convenience
pub use physics::{
    ABSOLUTE_ZERO_CELSIUS, AIR_DENSITY_KG_PER_M3, KELVIN_OFFSET, MAGNUS_HIGH_RANGE,
    MAGNUS_LOW_RANGE, MAGNUS_SWITCH_TEMP_C,
};

pub use solar::{DAYS_PER_YEAR, DIFFUSE_FRACTION, SOLAR_CONSTANT_W_PER_M2};

pub use limits::{
    LATITUDE_MAX_DEG, LATITUDE_MIN_DEG, LONGITUDE_MAX_DEG, LONGITUDE_MIN_DEG, OKTAS_CLEAR,
    OKTAS_OVERCAST, RELATIVE_HUMIDITY_MAX_PCT, RELATIVE_HUMIDITY_MIN_PCT,
};
