//! Extraterrestrial Irradiance and its Partitioning
//!
//! ## Extraterrestrial irradiance
//!
//! Irradiance on a horizontal plane at the top of the atmosphere:
//!
//! ```text
//! cos Z = sin φ·sin δ + cos φ·cos δ·cos ω
//! E     = 1367 · cos Z · E0(day)          if cos Z > 0
//!       = 0                               otherwise (sun below horizon)
//! ```
//!
//! `E0` corrects the solar constant for the Earth-Sun distance, which peaks
//! around January 4th (perihelion, about +3.5%) and bottoms out around
//! July 5th (aphelion, about -3.3%).
//!
//! ## Partitioning
//!
//! Cloud cover in oktas scales extraterrestrial irradiance linearly down to
//! global irradiance at the surface. Diffuse irradiance is capped at 31% of
//! extraterrestrial; whatever remains of global is direct beam:
//!
//! ```text
//! global  = E · (10 - 1.1·c) / 11
//! diffuse = min(global, 0.31·E)
//! direct  = global - diffuse
//! ```
//!
//! None of these clamp. Cloudiness above about 9.09 oktas gives negative
//! global irradiance.

use core::f64::consts::PI;

use chrono::{DateTime, Utc};

use crate::constants::solar::{
    CLEAR_SKY_NUMERATOR, CLOUD_DENOMINATOR, DAYS_PER_YEAR, DIFFUSE_FRACTION, ECCENTRICITY_C0,
    ECCENTRICITY_C1, ECCENTRICITY_C2, ECCENTRICITY_S1, ECCENTRICITY_S2, OKTA_ATTENUATION,
    SOLAR_CONSTANT_W_PER_M2,
};

use super::geometry::{days_into_year, declination, degrees_to_radians, hour_angle};

/// Earth-Sun distance correction factor for a day of the year.
///
/// Dimensionless, between roughly 0.967 and 1.035.
pub fn eccentricity_correction(day_of_year: u32) -> f64 {
    let day_angle = 2.0 * PI * (f64::from(day_of_year) - 1.0) / DAYS_PER_YEAR;

    ECCENTRICITY_C0
        + ECCENTRICITY_C1 * libm::cos(day_angle)
        + ECCENTRICITY_S1 * libm::sin(day_angle)
        + ECCENTRICITY_C2 * libm::cos(2.0 * day_angle)
        + ECCENTRICITY_S2 * libm::sin(2.0 * day_angle)
}

/// Cosine of the solar zenith angle at `latitude`/`longitude` (°).
///
/// Positive while the sun is above the horizon.
pub fn cos_zenith(instant: &DateTime<Utc>, latitude: f64, longitude: f64) -> f64 {
    let day = days_into_year(instant);
    let decl = degrees_to_radians(declination(day));
    let ha = degrees_to_radians(hour_angle(instant, longitude));
    let lat = degrees_to_radians(latitude);

    libm::sin(lat) * libm::sin(decl) + libm::cos(lat) * libm::cos(decl) * libm::cos(ha)
}

/// Extraterrestrial irradiance on a horizontal plane (W/m²).
///
/// Exactly `0.0` whenever the sun is on or below the horizon.
pub fn extraterrestrial_irradiance(instant: &DateTime<Utc>, latitude: f64, longitude: f64) -> f64 {
    let za = cos_zenith(instant, latitude, longitude);

    if za > 0.0 {
        SOLAR_CONSTANT_W_PER_M2 * za * eccentricity_correction(days_into_year(instant))
    } else {
        0.0
    }
}

/// Global irradiance at the surface (W/m²) under `cloudiness` oktas.
pub fn global_irradiance(extraterrestrial: f64, cloudiness: f64) -> f64 {
    extraterrestrial * (CLEAR_SKY_NUMERATOR - cloudiness * OKTA_ATTENUATION) / CLOUD_DENOMINATOR
}

/// Diffuse part of global irradiance (W/m²).
///
/// NaN in either input gives NaN, like every other formula here.
pub fn diffuse_irradiance(global: f64, extraterrestrial: f64) -> f64 {
    let cap = extraterrestrial * DIFFUSE_FRACTION;
    if global.is_nan() || cap.is_nan() {
        f64::NAN
    } else {
        libm::fmin(global, cap)
    }
}

/// Direct beam part of global irradiance (W/m²).
pub fn direct_irradiance(global: f64, diffuse: f64) -> f64 {
    global - diffuse
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn equator_noon_near_equinox() {
        let instant = utc(2024, 3, 20, 12, 0);
        let irradiance = extraterrestrial_irradiance(&instant, 0.0, 0.0);

        assert!(irradiance > 0.0);
        assert!((irradiance - 1376.94).abs() < 0.05, "got {irradiance}");
    }

    #[test]
    fn midnight_is_dark() {
        let instant = utc(2024, 3, 20, 0, 0);
        assert!(cos_zenith(&instant, 0.0, 0.0) < 0.0);
        assert_eq!(extraterrestrial_irradiance(&instant, 0.0, 0.0), 0.0);
    }

    #[test]
    fn polar_night() {
        // North pole in December never sees the sun
        for hour in 0..24 {
            let instant = utc(2023, 12, 21, hour, 0);
            assert_eq!(extraterrestrial_irradiance(&instant, 90.0, 0.0), 0.0);
        }
    }

    #[test]
    fn eccentricity_peaks_in_january() {
        let perihelion = eccentricity_correction(3);
        let aphelion = eccentricity_correction(185);
        assert!((perihelion - 1.0351).abs() < 1e-3);
        assert!((aphelion - 0.9666).abs() < 1e-3);
    }

    #[test]
    fn global_irradiance_by_cloud_cover() {
        assert!((global_irradiance(1000.0, 0.0) - 909.0909).abs() < 1e-3);
        assert!((global_irradiance(1000.0, 8.0) - 109.0909).abs() < 1e-3);
        assert!(global_irradiance(1000.0, 10.0) < 0.0);
    }

    #[test]
    fn diffuse_is_capped() {
        // Clear sky: cap applies
        assert_eq!(diffuse_irradiance(909.0, 1000.0), 310.0);
        // Overcast: all global light is diffuse
        assert_eq!(diffuse_irradiance(109.0, 1000.0), 109.0);
    }

    #[test]
    fn diffuse_propagates_nan() {
        assert!(diffuse_irradiance(f64::NAN, 1000.0).is_nan());
        assert!(diffuse_irradiance(500.0, f64::NAN).is_nan());
        assert!(diffuse_irradiance(global_irradiance(1000.0, f64::NAN), 1000.0).is_nan());
    }

    #[test]
    fn components_add_up() {
        let extraterrestrial = 1200.0;
        for oktas in 0..=8 {
            let global = global_irradiance(extraterrestrial, f64::from(oktas));
            let diffuse = diffuse_irradiance(global, extraterrestrial);
            let direct = direct_irradiance(global, diffuse);
            assert!((direct + diffuse - global).abs() < 1e-9);
            assert!(direct >= 0.0);
        }
    }
}
