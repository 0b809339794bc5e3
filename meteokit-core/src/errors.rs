//! Error Types for Guarded Formula Evaluation
//!
//! ## Design Philosophy
//!
//! The raw formulas never fail: a bad input shows up as a NaN or infinity in
//! the output. These errors only come from the opt-in validation layer
//! ([`crate::validators`] and [`crate::checked`]).
//!
//! 1. **Small Size**: Each variant carries a couple of `f64`s at most.
//!
//! 2. **No Heap Allocation**: Messages are `&'static str`, so the type works
//!    the same with and without `std`.
//!
//! 3. **Copy Semantics**: Errors implement Copy and can be returned from hot
//!    paths freely.
//!
//! ## Error Categories
//!
//! ### Input Violations
//! - `OutOfRange`: outside the documented domain (e.g. 12 oktas)
//! - `Singularity`: on a pole of a formula (e.g. -273.15°C)
//! - `InvalidValue`: NaN or infinity as input
//!
//! ### Output Violations
//! - `NonFiniteResult`: inputs passed, output still NaN or infinite
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use meteokit_core::{checked, ValidationError};
//!
//! match checked::absolute_humidity(25.0, 140.0) {
//!     Ok(grams_per_m3) => {
//!         // use it
//!         let _ = grams_per_m3;
//!     }
//!     Err(ValidationError::OutOfRange { value, min, max }) => {
//!         // Relative humidity 140% is outside [0, 100]
//!         assert_eq!((value, min, max), (140.0, 0.0, 100.0));
//!     }
//!     Err(_) => {
//!         // Other errors - log and investigate
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validation errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ValidationError {
    /// Value outside its documented domain
    #[error("Value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected input
        value: f64,
        /// Minimum accepted value
        min: f64,
        /// Maximum accepted value
        max: f64,
    },

    /// Value sits on a pole of a formula
    #[error("Value {value} is a singularity: {reason}")]
    Singularity {
        /// The rejected input
        value: f64,
        /// Which formula breaks down there
        reason: &'static str,
    },

    /// Input is NaN or infinite
    #[error("Invalid value: not a valid number")]
    InvalidValue,

    /// Inputs were accepted but the formula still produced NaN or infinity
    #[error("Non-finite result: {reason}")]
    NonFiniteResult {
        /// Which computation overflowed
        reason: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ValidationError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::OutOfRange { value, min, max } => {
                defmt::write!(fmt, "Value {} outside [{}, {}]", value, min, max)
            }
            Self::Singularity { value, reason } => {
                defmt::write!(fmt, "Singularity at {}: {}", value, reason)
            }
            Self::InvalidValue => defmt::write!(fmt, "Invalid value"),
            Self::NonFiniteResult { reason } => {
                defmt::write!(fmt, "Non-finite result: {}", reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_are_small() {
        // Three f64 payload plus discriminant
        assert!(core::mem::size_of::<ValidationError>() <= 32);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages() {
        let err = ValidationError::OutOfRange { value: 9.5, min: 0.0, max: 8.0 };
        assert_eq!(err.to_string(), "Value 9.5 outside range [0, 8]");

        let err = ValidationError::NonFiniteResult { reason: "absolute humidity" };
        assert_eq!(err.to_string(), "Non-finite result: absolute humidity");
    }
}
