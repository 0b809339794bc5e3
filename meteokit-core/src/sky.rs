//! Sky temperature from ambient temperature and cloud cover
//!
//! Longwave exchange models treat the sky as a black body at an effective
//! temperature below ambient. Cloud base radiates almost at ambient, clear
//! sky much colder, so the depression is interpolated linearly in oktas:
//!
//! ```text
//! T_sky = T - ((8 - c) / 8) · 18 - 2
//! ```
//!
//! Overcast (8 oktas) gives `T - 2`, clear (0 oktas) gives `T - 20`.

use crate::constants::{
    limits::OKTAS_OVERCAST,
    physics::{SKY_DEPRESSION_CLEAR_RANGE_C, SKY_DEPRESSION_OVERCAST_C},
};

/// Effective sky temperature (°C) for ambient `temperature` (°C) and
/// `cloudiness` (oktas, 0-8, not clamped).
pub fn sky_temperature(temperature: f64, cloudiness: f64) -> f64 {
    let clear_fraction = (OKTAS_OVERCAST - cloudiness) / OKTAS_OVERCAST;
    temperature - clear_fraction * SKY_DEPRESSION_CLEAR_RANGE_C - SKY_DEPRESSION_OVERCAST_C
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overcast_and_clear() {
        for t in [-30.0, 0.0, 15.5, 40.0] {
            assert_eq!(sky_temperature(t, 8.0), t - 2.0);
            assert_eq!(sky_temperature(t, 0.0), t - 20.0);
        }
    }

    #[test]
    fn half_cloud() {
        assert_eq!(sky_temperature(20.0, 4.0), 9.0);
    }

    #[test]
    fn not_clamped() {
        // More than 8 oktas pushes the sky above ambient - 2
        assert!(sky_temperature(20.0, 10.0) > 18.0);
    }
}
