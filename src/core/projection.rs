//! Where an inertial scroll released at a given velocity would come to rest.
//!
//! The settling step does not use this; the sheet always settles onto the
//! hard-clamped position.  It is exposed so callers can display or log the
//! landing point of a fling.

use crate::error::ConfigError;

/// Per-millisecond deceleration rate.
pub const DEFAULT_DECELERATION_RATE: f64 = 0.55;

pub fn check_deceleration_rate(rate: f64) -> Result<f64, ConfigError> {
    if !rate.is_finite() {
        return Err(ConfigError::NonFinite("deceleration_rate"));
    }
    if rate <= 0.0 || rate >= 1.0 {
        return Err(ConfigError::DecelerationOutOfRange(rate));
    }
    Ok(rate)
}

/// Distance travelled by a velocity (units/second) that decays by `rate`
/// every millisecond, integrated to a halt.  Same sign as `velocity`.
pub fn projected_distance(velocity: f64, rate: f64) -> Result<f64, ConfigError> {
    let rate = check_deceleration_rate(rate)?;
    Ok(-velocity / (1000.0 * rate.ln()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_velocity_goes_nowhere() {
        assert_eq!(projected_distance(0.0, DEFAULT_DECELERATION_RATE), Ok(0.0));
    }

    #[test]
    fn follows_velocity_sign() {
        let down = projected_distance(800.0, 0.998).unwrap();
        let up = projected_distance(-800.0, 0.998).unwrap();
        assert!(down > 0.0);
        assert!((down + up).abs() < 1e-12);
    }

    #[test]
    fn slower_decay_travels_further() {
        let fast = projected_distance(1000.0, 0.55).unwrap();
        let slow = projected_distance(1000.0, 0.998).unwrap();
        assert!(slow > fast);
        // 1 / ln(1/0.998) ≈ 499.5
        assert!((slow - 499.5).abs() < 0.5, "got {slow}");
    }

    #[test]
    fn rejects_rates_outside_unit_interval() {
        for rate in [0.0, -0.2, 1.0, 1.5] {
            assert_eq!(
                projected_distance(100.0, rate),
                Err(ConfigError::DecelerationOutOfRange(rate))
            );
        }
        assert_eq!(
            projected_distance(100.0, f64::NAN),
            Err(ConfigError::NonFinite("deceleration_rate"))
        );
    }
}
