//! # Rotational Kinematics and Shaft Power
//!
//! ## Notation
//!
//! - `n` = Shaft speed (rpm)
//! - `ω` = Angular velocity (rad/s)
//! - `θ` = Angle swept at constant ω (rad)
//! - `P` = Transmitted power (W)
//! - `T` = Shaft torque (N·m)
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 11th Edition, Section 3-17

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension};

use super::ROTATION_WINDOW_S;
use crate::broadcast::broadcast_map2;
use crate::errors::CalcResult;
use crate::units::{RadiansPerSecond, Rpm};

// =============================================================================
// SPEED CONVERSION
// =============================================================================

/// Angular velocity from rpm and the angle swept over a fixed 5 s window
///
/// # Formulas
/// - ω = n·2π/60
/// - θ = ω·5
///
/// # Returns
/// (ω, θ) - Same shape as `rpm`
///
/// # Example
/// ```rust
/// use mech_core::equations::rotation::angular_velocity_conversion;
/// use ndarray::array;
/// use std::f64::consts::PI;
///
/// let (omega, theta) = angular_velocity_conversion(&array![60.0]);
/// assert!((omega[0] - 2.0 * PI).abs() < 1e-12);
/// assert!((theta[0] - 10.0 * PI).abs() < 1e-12);
/// ```
pub fn angular_velocity_conversion<S, D>(rpm: &ArrayBase<S, D>) -> (Array<f64, D>, Array<f64, D>)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    angular_displacement_over(rpm, ROTATION_WINDOW_S)
}

/// Angular velocity from rpm and the angle swept over `duration_s` seconds
pub fn angular_displacement_over<S, D>(rpm: &ArrayBase<S, D>, duration_s: f64) -> (Array<f64, D>, Array<f64, D>)
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let omega = rpm.mapv(|n| RadiansPerSecond::from(Rpm(n)).0);
    let theta = omega.mapv(|w| w * duration_s);
    (omega, theta)
}

// =============================================================================
// POWER TRANSMISSION
// =============================================================================

/// Shaft torque from transmitted power and angular velocity
///
/// # Formula
/// T = P/ω
///
/// A zero ω is not an error: it yields ±∞ (or NaN when P is also zero),
/// exactly as IEEE-754 division does.
///
/// # Example
/// ```rust
/// use mech_core::equations::rotation::power_to_torque;
/// use ndarray::array;
///
/// let torque = power_to_torque(&array![1000.0], &array![100.0]).unwrap();
/// assert_eq!(torque[[0]], 10.0);
/// ```
pub fn power_to_torque<S1, S2, D1, D2>(
    power_w: &ArrayBase<S1, D1>,
    omega_rad_s: &ArrayBase<S2, D2>,
) -> CalcResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    broadcast_map2("power_to_torque", ["power", "omega"], power_w, omega_rad_s, |p, w| p / w)
}
