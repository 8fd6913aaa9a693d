//! # Spring and Vibration Formulas
//!
//! Linear springs and the free response of a viscously damped single degree
//! of freedom oscillator.
//!
//! ## Notation
//!
//! - `k` = Spring stiffness (N/m)
//! - `x` = Displacement from the unstretched position (m)
//! - `F` = Spring force on the attached mass (N)
//! - `U` = Stored elastic energy (J)
//! - `x0` = Initial displacement (m)
//! - `ζ` = Damping ratio (dimensionless, < 1 for underdamped)
//! - `ωn` = Undamped natural frequency (rad/s)
//! - `t` = Time (s)
//!
//! ## Sign Conventions
//!
//! - Spring force is the restoring force: F opposes x, so F = −k·x
//! - Energy is always ≥ 0 for k ≥ 0
//! - Damped response starts at x0 with a cosine phase at ωn

use ndarray::{Array, ArrayBase, ArrayD, Data, Dimension, Zip};

use crate::broadcast::broadcast_views2;
use crate::errors::CalcResult;

// =============================================================================
// LINEAR SPRING
// =============================================================================

/// Restoring force and stored energy of a linear spring
///
/// # Formulas (Hooke's law)
/// - F = −k·x
/// - U = ½·k·x²
///
/// # Returns
/// (F, U) - Arrays of the broadcast input shape
///
/// # Example
/// ```rust
/// use mech_core::equations::vibration::spring_system;
/// use ndarray::array;
///
/// let (f, u) = spring_system(&array![1000.0], &array![0.1]).unwrap();
/// assert!((f[[0]] + 100.0).abs() < 1e-9);
/// assert!((u[[0]] - 5.0).abs() < 1e-9);
/// ```
pub fn spring_system<S1, S2, D1, D2>(
    k: &ArrayBase<S1, D1>,
    x: &ArrayBase<S2, D2>,
) -> CalcResult<(ArrayD<f64>, ArrayD<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let (k, x) = broadcast_views2("spring_system", ["k", "x"], k, x)?;

    let force = Zip::from(&k).and(&x).map_collect(|&k, &x| -k * x);
    let energy = Zip::from(&k).and(&x).map_collect(|&k, &x| 0.5 * k * x * x);
    Ok((force, energy))
}

// =============================================================================
// DAMPED FREE VIBRATION
// =============================================================================

/// Free response of an underdamped oscillator with initial displacement x0
///
/// # Formula
/// x(t) = x0·e^(−ζ·ωn·t)·cos(ωn·t)
///
/// The oscillating term runs at the natural frequency ωn rather than the
/// damped frequency ωd = ωn·√(1−ζ²). At t = 0 the result is exactly x0.
///
/// # Returns
/// Displacement with the same shape as `t`
pub fn damped_oscillation<S, D>(x0: f64, zeta: f64, omega_n: f64, t: &ArrayBase<S, D>) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    t.mapv(|t| x0 * (-zeta * omega_n * t).exp() * (omega_n * t).cos())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr0, array, Array1};
    use std::f64::consts::PI;

    #[test]
    fn test_simple_spring() {
        let (f, u) = spring_system(&array![1000.0], &array![0.1]).unwrap();
        assert_abs_diff_eq!(f[[0]], -100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(u[[0]], 5.0, epsilon = 1e-9);
    }

    #[test]
    fn test_force_opposes_displacement() {
        let x = array![-0.3, -0.01, 0.01, 0.3, 2.0];
        for k in [0.5, 10.0, 4.0e5] {
            let (f, u) = spring_system(&arr0(k), &x).unwrap();
            for (i, &xi) in x.iter().enumerate() {
                assert!(f[[i]].signum() == -xi.signum(), "k={} x={} F={}", k, xi, f[[i]]);
                assert!(u[[i]] >= 0.0);
            }
        }
    }

    #[test]
    fn test_energy_nonnegative_for_zero_displacement() {
        let (f, u) = spring_system(&array![100.0], &array![0.0]).unwrap();
        assert_eq!(f[[0]], 0.0);
        assert_eq!(u[[0]], 0.0);
    }

    #[test]
    fn test_spring_shape_mismatch() {
        assert!(spring_system(&array![1.0, 2.0], &array![1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_initial_displacement() {
        let x = damped_oscillation(1.0, 0.1, 2.0 * PI, &array![0.0]);
        assert_eq!(x[0], 1.0);
    }

    #[test]
    fn test_initial_displacement_any_parameters() {
        for &(x0, zeta, wn) in &[(0.25, 0.0, 3.0), (-2.0, 0.9, 50.0), (7.0, 0.05, 0.1)] {
            let x = damped_oscillation(x0, zeta, wn, &array![0.0]);
            assert_eq!(x[0], x0);
        }
    }

    #[test]
    fn test_envelope_decays() {
        // Sample at whole periods of ωn, where cos(ωn·t) = 1
        let wn = 2.0 * PI;
        let t = Array1::from(vec![0.0, 1.0, 2.0, 3.0]);
        let x = damped_oscillation(1.0, 0.1, wn, &t);
        for (i, &ti) in t.iter().enumerate() {
            assert_abs_diff_eq!(x[i], (-0.1 * wn * ti).exp(), epsilon = 1e-9);
        }
        assert!(x[3] < x[2] && x[2] < x[1]);
    }

    #[test]
    fn test_undamped_is_pure_cosine() {
        let x = damped_oscillation(2.0, 0.0, 1.0, &array![PI / 2.0, PI]);
        assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[1], -2.0, epsilon = 1e-12);
    }
}
