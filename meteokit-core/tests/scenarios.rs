//! Scenario tests with concrete reference values
//!
//! Fixed inputs with hand-checked outputs, plus the guarded layer end to
//! end.

mod common;

use common::{assert_close, utc, EQUATOR_GREENWICH, MADRID, NORTH_POLE, SYDNEY};
use meteokit_core::{
    checked, extraterrestrial_irradiance, global_irradiance, sky_temperature,
    solar::{days_into_year, declination, eccentricity_correction},
    water_vapour_saturation, IrradianceComponents, ValidationError,
};

#[test]
fn sky_temperature_reference_values() {
    assert_eq!(sky_temperature(20.0, 4.0), 9.0);
    assert_eq!(sky_temperature(20.0, 8.0), 18.0);
    assert_eq!(sky_temperature(20.0, 0.0), 0.0);
}

#[test]
fn global_irradiance_reference_values() {
    assert_close(global_irradiance(1000.0, 0.0), 909.09, 0.01);
    assert_close(global_irradiance(1000.0, 8.0), 109.09, 0.01);
}

#[test]
fn saturation_pressure_branches() {
    // Published saturation pressures: 23.39 hPa at 20°C, 199.5 hPa at 60°C
    assert_close(water_vapour_saturation(20.0), 23.39, 0.02);
    assert_close(water_vapour_saturation(60.0), 199.5, 0.2);
}

#[test]
fn equator_at_equinox_noon() {
    let noon = utc(2024, 3, 20, 12, 0);
    let irradiance = extraterrestrial_irradiance(
        &noon,
        EQUATOR_GREENWICH.latitude,
        EQUATOR_GREENWICH.longitude,
    );

    // Sun almost overhead, so close to the eccentricity-corrected constant
    let ceiling = 1367.0 * eccentricity_correction(days_into_year(&noon));
    assert!(irradiance > 0.99 * ceiling);
    assert!(irradiance <= ceiling);
}

#[test]
fn seasons_flip_between_hemispheres() {
    // Local noon in each city during northern summer
    let june_madrid = utc(2023, 6, 21, 12, 15);
    let june_sydney = utc(2023, 6, 21, 2, 0);

    let madrid = extraterrestrial_irradiance(&june_madrid, MADRID.latitude, MADRID.longitude);
    let sydney = extraterrestrial_irradiance(&june_sydney, SYDNEY.latitude, SYDNEY.longitude);
    assert!(madrid > sydney);

    let december_madrid = utc(2023, 12, 21, 12, 15);
    let december_sydney = utc(2023, 12, 21, 2, 0);
    let madrid = extraterrestrial_irradiance(&december_madrid, MADRID.latitude, MADRID.longitude);
    let sydney = extraterrestrial_irradiance(&december_sydney, SYDNEY.latitude, SYDNEY.longitude);
    assert!(sydney > madrid);
}

#[test]
fn midnight_sun_at_the_pole() {
    assert!(declination(days_into_year(&utc(2023, 6, 21, 0, 0))) > 23.0);
    for hour in [0, 6, 12, 18] {
        let instant = utc(2023, 6, 21, hour, 0);
        let irradiance =
            extraterrestrial_irradiance(&instant, NORTH_POLE.latitude, NORTH_POLE.longitude);
        assert!(irradiance > 0.0);
    }
}

#[test]
fn full_day_of_components() {
    let mut daylight_hours = 0;
    for hour in 0..24 {
        let instant = utc(2023, 9, 1, hour, 0);
        let components = IrradianceComponents::compute(&instant, MADRID, 5.0);

        assert_close(components.direct + components.diffuse, components.global, 1e-9);
        if !components.is_night() {
            daylight_hours += 1;
            assert!(components.global < components.extraterrestrial);
        }
    }
    // Early September in Madrid: about 13 hours of daylight
    assert!((12..=14).contains(&daylight_hours), "got {daylight_hours}");
}

#[test]
fn guarded_layer_end_to_end() {
    let noon = utc(2024, 3, 20, 12, 0);

    let components = checked::irradiance_components(&noon, EQUATOR_GREENWICH, 4.0).unwrap();
    assert_eq!(components, IrradianceComponents::compute(&noon, EQUATOR_GREENWICH, 4.0));

    assert_eq!(
        checked::sky_temperature(20.0, 12.0),
        Err(ValidationError::OutOfRange { value: 12.0, min: 0.0, max: 8.0 })
    );
    assert!(matches!(
        checked::absolute_humidity(-273.15, 50.0),
        Err(ValidationError::Singularity { .. }) | Err(ValidationError::OutOfRange { .. })
    ));
    assert_eq!(
        checked::absolute_humidity_g_per_kg(20.0, f64::INFINITY),
        Err(ValidationError::InvalidValue)
    );
}
