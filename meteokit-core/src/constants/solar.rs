//! Solar Constants
//!
//! Orbital and radiometric coefficients for extraterrestrial irradiance and
//! its partitioning into global, diffuse and direct components.

/// Mean extraterrestrial irradiance at one astronomical unit (W/m²).
///
/// Varies by about ±3% over the year as the Earth-Sun distance changes;
/// see `ECCENTRICITY_*` for the correction.
///
/// Source: World Radiation Center
pub const SOLAR_CONSTANT_W_PER_M2: f64 = 1367.0;

/// Days per year used for the day angle and declination.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Days per year used by the equation of time approximation.
pub const EQUATION_OF_TIME_PERIOD_DAYS: f64 = 364.0;

/// Day of year of the reference equinox for declination and equation of time.
pub const EQUINOX_DAY_OF_YEAR: f64 = 81.0;

/// Obliquity of the ecliptic used for declination amplitude (°).
pub const AXIAL_TILT_DEG: f64 = 23.45;

// ===== EQUATION OF TIME (minutes) =====

/// Amplitude of the `sin(2B)` term (minutes).
pub const EOT_SIN_2B_MIN: f64 = 9.87;

/// Amplitude of the `cos(B)` term (minutes).
pub const EOT_COS_B_MIN: f64 = 7.53;

/// Amplitude of the `sin(B)` term (minutes).
pub const EOT_SIN_B_MIN: f64 = 1.5;

// ===== CLOCK / ANGLE CONVERSIONS =====

/// Minutes of clock time per degree of longitude.
pub const MINUTES_PER_DEGREE_LONGITUDE: f64 = 4.0;

/// Degrees of hour angle per hour of solar time.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Solar time at which the sun crosses the local meridian (hours).
pub const SOLAR_NOON_HOURS: f64 = 12.0;

/// Minutes per hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

// ===== ECCENTRICITY CORRECTION =====
//
// E0 = c0 + c1·cos θ + s1·sin θ + c2·cos 2θ + s2·sin 2θ, θ = 2π(d-1)/365
//
// Source: Spencer (1971), Fourier series for the Earth-Sun distance

/// Constant term of the eccentricity correction.
pub const ECCENTRICITY_C0: f64 = 1.0001;

/// `cos θ` coefficient of the eccentricity correction.
pub const ECCENTRICITY_C1: f64 = 0.034221;

/// `sin θ` coefficient of the eccentricity correction.
pub const ECCENTRICITY_S1: f64 = 0.00128;

/// `cos 2θ` coefficient of the eccentricity correction.
pub const ECCENTRICITY_C2: f64 = 0.000719;

/// `sin 2θ` coefficient of the eccentricity correction.
pub const ECCENTRICITY_S2: f64 = 0.000077;

// ===== CLOUD ATTENUATION =====

/// Transmittance numerator under a clear sky.
///
/// `global = E · (CLEAR_SKY_NUMERATOR - c · OKTA_ATTENUATION) / CLOUD_DENOMINATOR`
pub const CLEAR_SKY_NUMERATOR: f64 = 10.0;

/// Transmittance lost per okta of cloud cover.
pub const OKTA_ATTENUATION: f64 = 1.1;

/// Denominator of the linear cloud attenuation model.
pub const CLOUD_DENOMINATOR: f64 = 11.0;

/// Upper bound of diffuse irradiance as a fraction of extraterrestrial.
pub const DIFFUSE_FRACTION: f64 = 0.31;
