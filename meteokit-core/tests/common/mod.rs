//! Common test utilities for integration tests
//!
//! This module provides:
//! - UTC instant constructors
//! - Reference locations
//! - proptest strategies for the documented input domains
//! - Tolerance assertions

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use meteokit_core::GeoCoordinate;
use proptest::prelude::*;

/// Reference locations used across scenarios
pub const EQUATOR_GREENWICH: GeoCoordinate = GeoCoordinate::new(0.0, 0.0);
pub const MADRID: GeoCoordinate = GeoCoordinate::new(40.4168, -3.7038);
pub const SYDNEY: GeoCoordinate = GeoCoordinate::new(-33.8688, 151.2093);
pub const NORTH_POLE: GeoCoordinate = GeoCoordinate::new(90.0, 0.0);

/// Build a UTC instant, panicking on invalid calendar input
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid UTC date")
}

/// Assert two floats agree within an absolute tolerance
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

/// Terrestrial air temperatures (°C)
pub fn temperature() -> impl Strategy<Value = f64> {
    -50.0..60.0f64
}

/// Relative humidity (%)
pub fn relative_humidity() -> impl Strategy<Value = f64> {
    0.0..=100.0f64
}

/// Cloud cover (oktas)
pub fn cloudiness() -> impl Strategy<Value = f64> {
    0.0..=8.0f64
}

/// Any valid coordinate
pub fn coordinate() -> impl Strategy<Value = GeoCoordinate> {
    (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lon)| GeoCoordinate::new(lat, lon))
}

/// Any minute of the years 1990 to 2050
pub fn instant() -> impl Strategy<Value = DateTime<Utc>> {
    (1990i32..2050, 1u32..=365, 0u32..24, 0u32..60).prop_map(|(year, day, hour, minute)| {
        let date = chrono::NaiveDate::from_yo_opt(year, day).expect("day within year");
        date.and_hms_opt(hour, minute, 0).expect("valid time").and_utc()
    })
}
