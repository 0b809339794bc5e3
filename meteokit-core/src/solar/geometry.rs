//! Sun position helpers
//!
//! Low-order approximations of the solar declination, equation of time and
//! hour angle. They are accurate to a fraction of a degree, which is plenty
//! for irradiance estimates, but they are not an ephemeris.
//!
//! All clock inputs are taken in UTC. Longitude is positive east.

use core::f64::consts::PI;

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::constants::solar::{
    AXIAL_TILT_DEG, DAYS_PER_YEAR, DEGREES_PER_HOUR, EOT_COS_B_MIN, EOT_SIN_2B_MIN,
    EOT_SIN_B_MIN, EQUATION_OF_TIME_PERIOD_DAYS, EQUINOX_DAY_OF_YEAR, MINUTES_PER_DEGREE_LONGITUDE,
    MINUTES_PER_HOUR, SOLAR_NOON_HOURS,
};

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Day of the year of the instant's UTC date, starting at 1 on January 1st.
///
/// Equivalent to the number of whole days since December 31st of the
/// previous year, so leap years run to 366.
pub fn days_into_year(instant: &DateTime<Utc>) -> u32 {
    instant.ordinal()
}

/// Equation of time (minutes): apparent minus mean solar time.
///
/// ```text
/// B   = 2π/364 · (day - 81)
/// EoT = 9.87·sin 2B - 7.53·cos B - 1.5·sin B
/// ```
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b =
        (2.0 * PI / EQUATION_OF_TIME_PERIOD_DAYS) * (f64::from(day_of_year) - EQUINOX_DAY_OF_YEAR);

    EOT_SIN_2B_MIN * libm::sin(2.0 * b)
        - EOT_COS_B_MIN * libm::cos(b)
        - EOT_SIN_B_MIN * libm::sin(b)
}

/// Apparent solar time (decimal hours) at `longitude` (°).
///
/// Seconds of the instant are ignored. The result is not wrapped into
/// `[0, 24)`; far east or west of Greenwich it can run past either end,
/// which the hour angle handles without special casing.
pub fn solar_time(instant: &DateTime<Utc>, longitude: f64) -> f64 {
    let clock_minutes = f64::from(instant.hour()) * MINUTES_PER_HOUR + f64::from(instant.minute());
    let correction =
        MINUTES_PER_DEGREE_LONGITUDE * longitude + equation_of_time(days_into_year(instant));

    (clock_minutes + correction) / MINUTES_PER_HOUR
}

/// Hour angle (°): negative before solar noon, positive after.
pub fn hour_angle(instant: &DateTime<Utc>, longitude: f64) -> f64 {
    DEGREES_PER_HOUR * (solar_time(instant, longitude) - SOLAR_NOON_HOURS)
}

/// Solar declination (°) for a day of the year.
///
/// Zero at the reference equinox (day 81), ±23.45° at the solstices.
pub fn declination(day_of_year: u32) -> f64 {
    let angle = (2.0 * PI / DAYS_PER_YEAR) * (f64::from(day_of_year) - EQUINOX_DAY_OF_YEAR);
    AXIAL_TILT_DEG * libm::sin(angle)
}
