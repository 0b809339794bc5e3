//! Absolute Humidity from Temperature and Relative Humidity
//!
//! ## Physics Background
//!
//! Relative humidity says how close air is to saturation; absolute humidity
//! says how much water is actually in it. Going from one to the other needs
//! the saturation vapour pressure at the air temperature:
//!
//! ```text
//! Pw  = Pws(T) · RH / 100                 (actual vapour pressure, hPa)
//! AH  = C · Pw · 100 / (273.15 + T)       (g/m³, C = 2.16679 g·K/J)
//! ```
//!
//! `Pws(T)` comes from a Magnus-type fit with two coefficient sets; the
//! high-temperature set takes over strictly above 50°C.
//!
//! ## Numeric Edge Cases
//!
//! Nothing here is clamped or checked:
//! - `T = -273.15` divides by zero in [`absolute_humidity`]
//! - `T = -240.726` divides by zero in [`water_vapour_saturation`], which
//!   overflows to infinity just below the pole
//!
//! Neither is guarded. Use [`crate::checked`] when inputs are not
//! trusted.
//!
//! ## Usage
//!
//! ```rust
//! use meteokit_core::humidity::{absolute_humidity, absolute_humidity_g_per_kg};
//!
//! let ah = absolute_humidity(25.0, 60.0);      // ≈ 13.8 g/m³
//! let ah_kg = absolute_humidity_g_per_kg(25.0, 60.0);
//! assert!((ah / ah_kg - 1.204).abs() < 1e-12);
//! ```

use crate::constants::physics::{
    MagnusCoefficients, AIR_DENSITY_KG_PER_M3, KELVIN_OFFSET, MAGNUS_HIGH_RANGE,
    MAGNUS_LOW_RANGE, MAGNUS_SWITCH_TEMP_C, WATER_VAPOUR_GAS_CONSTANT,
};

/// Pick the Magnus coefficient set for a temperature (°C).
#[inline]
pub fn magnus_coefficients(temperature: f64) -> &'static MagnusCoefficients {
    if temperature > MAGNUS_SWITCH_TEMP_C {
        &MAGNUS_HIGH_RANGE
    } else {
        &MAGNUS_LOW_RANGE
    }
}

/// Saturation vapour pressure over water (hPa) at `temperature` (°C).
pub fn water_vapour_saturation(temperature: f64) -> f64 {
    let MagnusCoefficients { a, m, tn } = *magnus_coefficients(temperature);

    let exponent = (m * temperature) / (temperature + tn);
    a * libm::pow(10.0, exponent)
}

/// Absolute humidity (g/m³) of air at `temperature` (°C) and
/// `relative_humidity` (%).
///
/// Divide by 1.204 for g/kg, or call [`absolute_humidity_g_per_kg`].
pub fn absolute_humidity(temperature: f64, relative_humidity: f64) -> f64 {
    let vapour_pressure = water_vapour_saturation(temperature) * relative_humidity / 100.0;
    (WATER_VAPOUR_GAS_CONSTANT * vapour_pressure * 100.0) / (KELVIN_OFFSET + temperature)
}

/// Absolute humidity in grams of water per kilogram of air.
pub fn absolute_humidity_g_per_kg(temperature: f64, relative_humidity: f64) -> f64 {
    absolute_humidity(temperature, relative_humidity) / AIR_DENSITY_KG_PER_M3
}
