//! Guarded formula evaluation
//!
//! Each function here validates its inputs with the default validators,
//! runs the raw formula and refuses to hand back a non-finite result. Use
//! these when inputs come from sensors, files or users; call the raw
//! formulas directly when they come from code you control.
//!
//! Rejections are logged at `warn`, results at `trace` (with the `log`
//! feature).

use core::fmt::Debug;

use chrono::{DateTime, Utc};

use crate::{
    errors::ValidationResult,
    humidity, sky, solar,
    traits::Validator,
    types::{GeoCoordinate, IrradianceComponents},
    validators::{
        utils::check_result, CloudinessValidator, CoordinateValidator, RelativeHumidityValidator,
        TemperatureValidator,
    },
};

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }};
}

#[cfg(feature = "log")]
macro_rules! log_trace {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {{ let _ = ::core::format_args!($($arg)*); }};
}

fn guard<V>(validator: &V, value: V::Value, input: &'static str) -> ValidationResult<()>
where
    V: Validator,
    V::Value: Copy + Debug,
{
    validator.validate(value).map_err(|err| {
        log_warn!("rejected {} {:?}: {}", input, value, err);
        err
    })
}

fn finite(value: f64, what: &'static str) -> ValidationResult<f64> {
    let value = check_result(value, what).map_err(|err| {
        log_warn!("{}", err);
        err
    })?;
    log_trace!("{} = {}", what, value);
    Ok(value)
}

/// Saturation vapour pressure (hPa) with a validated temperature.
pub fn water_vapour_saturation(temperature: f64) -> ValidationResult<f64> {
    guard(&TemperatureValidator::default(), temperature, "temperature")?;
    finite(humidity::water_vapour_saturation(temperature), "saturation pressure")
}

/// Absolute humidity (g/m³) with validated temperature and relative humidity.
pub fn absolute_humidity(temperature: f64, relative_humidity: f64) -> ValidationResult<f64> {
    guard(&TemperatureValidator::default(), temperature, "temperature")?;
    guard(&RelativeHumidityValidator::default(), relative_humidity, "relative humidity")?;
    finite(humidity::absolute_humidity(temperature, relative_humidity), "absolute humidity")
}

/// Absolute humidity (g/kg) with validated temperature and relative humidity.
pub fn absolute_humidity_g_per_kg(
    temperature: f64,
    relative_humidity: f64,
) -> ValidationResult<f64> {
    guard(&TemperatureValidator::default(), temperature, "temperature")?;
    guard(&RelativeHumidityValidator::default(), relative_humidity, "relative humidity")?;
    finite(
        humidity::absolute_humidity_g_per_kg(temperature, relative_humidity),
        "absolute humidity per kg",
    )
}

/// Extraterrestrial irradiance (W/m²) at a validated location.
pub fn extraterrestrial_irradiance(
    instant: &DateTime<Utc>,
    coordinate: GeoCoordinate,
) -> ValidationResult<f64> {
    guard(&CoordinateValidator::default(), coordinate, "coordinate")?;
    finite(
        solar::extraterrestrial_irradiance(instant, coordinate.latitude, coordinate.longitude),
        "extraterrestrial irradiance",
    )
}

/// All irradiance components at a validated location and cloud cover.
pub fn irradiance_components(
    instant: &DateTime<Utc>,
    coordinate: GeoCoordinate,
    cloudiness: f64,
) -> ValidationResult<IrradianceComponents> {
    guard(&CoordinateValidator::default(), coordinate, "coordinate")?;
    guard(&CloudinessValidator::default(), cloudiness, "cloudiness")?;

    let components = IrradianceComponents::compute(instant, coordinate, cloudiness);
    finite(components.global, "global irradiance")?;
    finite(components.diffuse, "diffuse irradiance")?;
    finite(components.direct, "direct irradiance")?;
    Ok(components)
}

/// Sky temperature (°C) with validated temperature and cloud cover.
pub fn sky_temperature(temperature: f64, cloudiness: f64) -> ValidationResult<f64> {
    guard(&TemperatureValidator::default(), temperature, "temperature")?;
    guard(&CloudinessValidator::default(), cloudiness, "cloudiness")?;
    finite(sky::sky_temperature(temperature, cloudiness), "sky temperature")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ValidationError;
    use chrono::TimeZone;

    #[test]
    fn agrees_with_raw_formulas() {
        assert_eq!(
            absolute_humidity(25.0, 60.0),
            Ok(humidity::absolute_humidity(25.0, 60.0))
        );
        assert_eq!(
            absolute_humidity_g_per_kg(-5.0, 80.0),
            Ok(humidity::absolute_humidity_g_per_kg(-5.0, 80.0))
        );
        assert_eq!(
            water_vapour_saturation(55.0),
            Ok(humidity::water_vapour_saturation(55.0))
        );
        assert_eq!(sky_temperature(20.0, 4.0), Ok(9.0));
    }

    #[test]
    fn rejects_bad_humidity_inputs() {
        assert!(matches!(
            absolute_humidity(25.0, 120.0),
            Err(ValidationError::OutOfRange { value, .. }) if value == 120.0
        ));
        assert_eq!(absolute_humidity(f64::NAN, 50.0), Err(ValidationError::InvalidValue));
        assert!(absolute_humidity(-273.15, 50.0).is_err());
    }

    #[test]
    fn rejects_bad_cloudiness() {
        assert!(sky_temperature(10.0, 9.5).is_err());

        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!(irradiance_components(&instant, GeoCoordinate::new(0.0, 0.0), 12.0).is_err());
    }

    #[test]
    fn irradiance_at_valid_location() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        let equator = GeoCoordinate::new(0.0, 0.0);

        let extraterrestrial = extraterrestrial_irradiance(&instant, equator);
        assert_eq!(extraterrestrial, Ok(solar::extraterrestrial_irradiance(&instant, 0.0, 0.0)));

        let components = irradiance_components(&instant, equator, 2.0).unwrap();
        assert!((components.direct + components.diffuse - components.global).abs() < 1e-9);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
        assert!(extraterrestrial_irradiance(&instant, GeoCoordinate::new(95.0, 0.0)).is_err());
    }
}
