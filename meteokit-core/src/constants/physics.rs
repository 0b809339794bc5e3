//! Physical Constants for MeteoKit
//!
//! Thermodynamic reference values and the empirical coefficients of the
//! humidity and sky temperature models.

// ===== FUNDAMENTAL PHYSICS CONSTANTS =====

/// Absolute zero in Celsius (°C).
///
/// The absolute humidity formula divides by `KELVIN_OFFSET + T`, so this is
/// a pole of that formula.
///
/// Source: NIST Special Publication 330 (2019)
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -273.15;

/// Offset between Celsius and Kelvin scales (K).
pub const KELVIN_OFFSET: f64 = 273.15;

/// Density of air at 20°C, 1 atm (kg/m³).
///
/// Converts absolute humidity from g/m³ to grams of vapour per kilogram
/// of air.
///
/// Source: International Standard Atmosphere
pub const AIR_DENSITY_KG_PER_M3: f64 = 1.204;

// ===== HUMIDITY PHYSICS =====

/// Water vapour gas constant term (g·K/J).
///
/// From the ideal gas law for water vapour: `1 / R_w` with
/// `R_w = 461.5 J/(kg·K)`, expressed so that hPa in and g/m³ out
/// works after multiplying by 100.
///
/// Source: Vaisala humidity conversion formulas (2013)
pub const WATER_VAPOUR_GAS_CONSTANT: f64 = 2.16679;

/// Coefficients of the Magnus-type saturation vapour pressure formula:
///
/// ```text
/// Pws = A · 10^(m·T / (T + Tn))
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnusCoefficients {
    /// Saturation pressure at 0°C (hPa)
    pub a: f64,
    /// Dimensionless slope
    pub m: f64,
    /// Temperature offset (°C); the formula has a pole at `T = -tn`
    pub tn: f64,
}

/// Magnus coefficients for water between -20°C and +50°C.
///
/// Max error 0.083%.
///
/// Source: Vaisala humidity conversion formulas (2013), Table 1
pub const MAGNUS_LOW_RANGE: MagnusCoefficients = MagnusCoefficients {
    a: 6.116441,
    m: 7.59138,
    tn: 240.726,
};

/// Magnus coefficients for water between +50°C and +100°C.
///
/// Max error 0.017%.
///
/// Source: Vaisala humidity conversion formulas (2013), Table 1
pub const MAGNUS_HIGH_RANGE: MagnusCoefficients = MagnusCoefficients {
    a: 6.004918,
    m: 7.337936,
    tn: 229.3975,
};

/// Temperature above which `MAGNUS_HIGH_RANGE` is used (°C).
///
/// The comparison is strict: exactly 50°C still uses the low range.
pub const MAGNUS_SWITCH_TEMP_C: f64 = 50.0;

// ===== SKY TEMPERATURE =====

/// Sky depression below ambient under a fully overcast sky (°C).
///
/// Cloud base radiates close to ambient; the sky is only slightly colder.
pub const SKY_DEPRESSION_OVERCAST_C: f64 = 2.0;

/// Additional sky depression under a fully clear sky (°C).
///
/// Scaled linearly by the clear fraction of the sky, so a clear sky ends
/// up `SKY_DEPRESSION_OVERCAST_C + SKY_DEPRESSION_CLEAR_RANGE_C` below
/// ambient.
pub const SKY_DEPRESSION_CLEAR_RANGE_C: f64 = 18.0;
