//! # Unit Types
//!
//! Type-safe wrappers for the angle and rotational-speed units that cross the
//! public API. These are plain `f64` newtypes: zero runtime overhead and clean
//! JSON (just numbers).
//!
//! The formulas accept and return degrees for angles and revolutions per
//! minute for shaft speed, because that is what engineers write down. All
//! trigonometry happens in radians, so every conversion goes through here.
//!
//! ## SI Units
//!
//! Everything else in mech_core is plain SI: metres, seconds, newtons,
//! pascals, watts, kelvin. Those stay bare `f64` inside arrays.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::units::{Degrees, Radians, Rpm, RadiansPerSecond};
//!
//! let right_angle: Radians = Degrees(90.0).into();
//! assert!((right_angle.0 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let omega: RadiansPerSecond = Rpm(60.0).into();
//! assert!((omega.0 - 2.0 * std::f64::consts::PI).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

// ============================================================================
// Angle Units
// ============================================================================

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Degrees(pub f64);

/// Angle in radians
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Radians(pub f64);

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Radians(deg.0.to_radians())
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Degrees(rad.0.to_degrees())
    }
}

impl Degrees {
    /// Shorthand for converting a raw degree value to radians
    #[inline]
    pub fn to_radians(deg: f64) -> f64 {
        Radians::from(Degrees(deg)).0
    }
}

impl Radians {
    /// Shorthand for converting a raw radian value to degrees
    #[inline]
    pub fn to_degrees(rad: f64) -> f64 {
        Degrees::from(Radians(rad)).0
    }
}

// ============================================================================
// Rotational Speed Units
// ============================================================================

/// Shaft speed in revolutions per minute
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rpm(pub f64);

/// Angular velocity in radians per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RadiansPerSecond(pub f64);

/// ω = rpm·2π/60
impl From<Rpm> for RadiansPerSecond {
    fn from(rpm: Rpm) -> Self {
        RadiansPerSecond(rpm.0 * 2.0 * PI / 60.0)
    }
}

impl From<RadiansPerSecond> for Rpm {
    fn from(omega: RadiansPerSecond) -> Self {
        Rpm(omega.0 * 60.0 / (2.0 * PI))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degree_radian_conversion() {
        let rad: Radians = Degrees(180.0).into();
        assert_relative_eq!(rad.0, PI, epsilon = 1e-12);

        let deg: Degrees = Radians(PI / 4.0).into();
        assert_relative_eq!(deg.0, 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_raw_helpers() {
        assert_relative_eq!(Degrees::to_radians(90.0), PI / 2.0, epsilon = 1e-12);
        assert_relative_eq!(Radians::to_degrees(PI), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rpm_conversion() {
        let omega: RadiansPerSecond = Rpm(60.0).into();
        assert_relative_eq!(omega.0, 2.0 * PI, epsilon = 1e-12);

        let back: Rpm = omega.into();
        assert_relative_eq!(back.0, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transparent_serialization() {
        let json = serde_json::to_string(&Rpm(1500.0)).unwrap();
        assert_eq!(json, "1500.0");
        let deg: Degrees = serde_json::from_str("30.0").unwrap();
        assert_eq!(deg, Degrees(30.0));
    }
}
