//! Example 1: Irradiance Breakdown Over a Day
//!
//! Walks one day hour by hour at a fixed location and prints the
//! extraterrestrial, global, diffuse and direct irradiance together with
//! the sky temperature and absolute humidity, the inputs a building
//! energy model would consume.
//!
//! Run with: cargo run --example 01_irradiance_breakdown

use chrono::{TimeZone, Utc};
use meteokit_core::{checked, GeoCoordinate, ValidationError};

const SEVILLE: GeoCoordinate = GeoCoordinate::new(37.3891, -5.9845);
const CLOUD_OKTAS: f64 = 3.0;
const RELATIVE_HUMIDITY_PCT: f64 = 45.0;

/// Crude diurnal temperature curve, warmest mid afternoon
fn air_temperature(hour: u32) -> f64 {
    let phase = (f64::from(hour) - 15.0) / 24.0 * core::f64::consts::TAU;
    26.0 + 8.0 * phase.cos()
}

fn main() -> Result<(), ValidationError> {
    println!("=== Irradiance breakdown, Seville, 2024-07-15 ===\n");
    println!(
        "{:>5} {:>8} {:>8} {:>8} {:>8} {:>7} {:>7} {:>7}",
        "UTC", "E0", "global", "diffuse", "direct", "T air", "T sky", "AH"
    );

    for hour in 0..24 {
        let instant = Utc
            .with_ymd_and_hms(2024, 7, 15, hour, 0, 0)
            .single()
            .expect("valid date");
        let temperature = air_temperature(hour);

        let sun = checked::irradiance_components(&instant, SEVILLE, CLOUD_OKTAS)?;
        let sky = checked::sky_temperature(temperature, CLOUD_OKTAS)?;
        let water = checked::absolute_humidity(temperature, RELATIVE_HUMIDITY_PCT)?;

        println!(
            "{:>5} {:>8.1} {:>8.1} {:>8.1} {:>8.1} {:>7.1} {:>7.1} {:>7.2}",
            format!("{hour:02}:00"),
            sun.extraterrestrial,
            sun.global,
            sun.diffuse,
            sun.direct,
            temperature,
            sky,
            water,
        );
    }

    // Out-of-domain input is rejected rather than extrapolated
    match checked::sky_temperature(20.0, 11.0) {
        Err(err) => println!("\n11 oktas rejected: {err}"),
        Ok(value) => println!("\nunexpected: {value}"),
    }

    Ok(())
}
