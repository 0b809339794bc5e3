//! Boundary Validators for Formula Inputs
//!
//! ## Overview
//!
//! The formulas in this crate never check their inputs. That keeps them
//! exact transcriptions of the closed-form equations, but it means a bad
//! reading turns into a NaN or an infinity somewhere downstream. These
//! validators are the opt-in guard at the boundary.
//!
//! ## What Gets Checked
//!
//! ### 1. Finiteness
//! NaN and infinities are rejected first, before anything else.
//!
//! ### 2. Formula Poles
//! Temperatures sitting exactly on a division by zero:
//! ```rust
//! use meteokit_core::constants::physics::ABSOLUTE_ZERO_CELSIUS;
//!
//! // absolute humidity divides by (273.15 + T)
//! assert_eq!(ABSOLUTE_ZERO_CELSIUS, -273.15);
//! ```
//!
//! ### 3. Documented Domains
//! - Relative humidity: 0-100%
//! - Cloudiness: 0-8 oktas
//! - Latitude ±90°, longitude ±180°
//! - Temperature: -80 to 60°C by default
//!
//! ## Usage Example
//!
//! ```rust
//! use meteokit_core::validators::{CloudinessValidator, TemperatureValidator};
//! use meteokit_core::Validator;
//!
//! let temperature = TemperatureValidator::default();
//! let cloud = CloudinessValidator::default();
//!
//! temperature.validate(18.0)?;
//! cloud.validate(6.0)?;
//! assert!(cloud.validate(11.0).is_err());
//! # Ok::<(), meteokit_core::ValidationError>(())
//! ```
//!
//! ## Customization
//!
//! ```rust
//! use meteokit_core::validators::TemperatureValidator;
//!
//! // Greenhouse controller, never below freezing
//! let greenhouse = TemperatureValidator::new_with_limits(0.0, 55.0);
//!
//! // Anything the formulas can evaluate
//! let anything = TemperatureValidator::physical();
//! ```

mod cloudiness;
mod coordinates;
mod humidity;
mod temperature;
pub(crate) mod utils;

pub use cloudiness::CloudinessValidator;
pub use coordinates::CoordinateValidator;
pub use humidity::RelativeHumidityValidator;
pub use temperature::TemperatureValidator;
