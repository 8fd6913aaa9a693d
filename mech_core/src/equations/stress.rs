//! # Equivalent Stress Formulas
//!
//! Yield-criterion formulas that collapse a multiaxial stress state into a
//! single equivalent stress comparable to a uniaxial yield strength.
//!
//! ## Notation
//!
//! - `σ1`, `σ2` = In-plane principal stresses (Pa)
//! - `σ_vm` = Von Mises equivalent stress (Pa)
//!
//! ## Sign Conventions
//!
//! - Tension positive, compression negative
//! - σ_vm is always ≥ 0
//!
//! ## References
//!
//! - Shigley's Mechanical Engineering Design, 11th Edition, Section 5-5

use ndarray::{ArrayBase, ArrayD, Data, Dimension};

use crate::broadcast::broadcast_map2;
use crate::errors::CalcResult;

// =============================================================================
// PLANE STRESS (DISTORTION ENERGY)
// =============================================================================

/// Von Mises stress for a single plane-stress state
///
/// # Formula (Shigley's Eq. 5-13)
/// σ_vm = √(σ1² − σ1·σ2 + σ2²)
///
/// For equal biaxial stress (σ1 = σ2 = σ) this reduces to |σ|.
///
/// Both stresses are scaled by the larger magnitude before squaring, so the
/// result stays finite for any finite inputs (as `hypot` does).
#[inline]
pub fn von_mises_plane(sigma1: f64, sigma2: f64) -> f64 {
    let m = sigma1.abs().max(sigma2.abs());
    if m == 0.0 {
        return 0.0;
    }
    let (a, b) = (sigma1 / m, sigma2 / m);
    m * (a * a - a * b + b * b).sqrt()
}

/// Von Mises stress for arrays of principal stresses
///
/// Inputs broadcast against each other; the result has the broadcast shape.
///
/// # Arguments
/// * `sigma1` - First principal stress (Pa)
/// * `sigma2` - Second principal stress (Pa)
///
/// # Errors
/// [`CalcError::ShapeMismatch`](crate::errors::CalcError::ShapeMismatch) when
/// the shapes cannot be broadcast.
///
/// # Example
/// ```rust
/// use mech_core::equations::stress::von_mises_stress;
/// use ndarray::array;
///
/// let vm = von_mises_stress(&array![100.0], &array![50.0]).unwrap();
/// assert!((vm[[0]] - 86.602540378).abs() < 1e-6);
/// ```
pub fn von_mises_stress<S1, S2, D1, D2>(
    sigma1: &ArrayBase<S1, D1>,
    sigma2: &ArrayBase<S2, D2>,
) -> CalcResult<ArrayD<f64>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    broadcast_map2("von_mises_stress", ["sigma1", "sigma2"], sigma1, sigma2, von_mises_plane)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr0, array};

    #[test]
    fn test_single_value() {
        let vm = von_mises_stress(&array![100.0], &array![50.0]).unwrap();
        assert_abs_diff_eq!(vm[[0]], 86.60254037844387, epsilon = 1e-5);
    }

    #[test]
    fn test_array_values() {
        let vm = von_mises_stress(&array![100.0, 200.0, 150.0], &array![50.0, 100.0, 75.0]).unwrap();
        let expected = [86.60254038, 173.20508076, 129.90381057];
        assert_eq!(vm.shape(), &[3]);
        for (got, want) in vm.iter().zip(expected) {
            assert_abs_diff_eq!(*got, want, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_zero_stress() {
        let vm = von_mises_stress(&array![0.0], &array![0.0]).unwrap();
        assert_eq!(vm[[0]], 0.0);
    }

    #[test]
    fn test_equal_biaxial_reduces_to_magnitude() {
        for sigma in [-250.0, -1.0, 0.0, 3.5, 1.0e8, 1.0e200, -1.0e200] {
            assert_abs_diff_eq!(von_mises_plane(sigma, sigma), f64::abs(sigma), epsilon = 1e-9 * sigma.abs().max(1.0));
        }
    }

    #[test]
    fn test_huge_stresses_stay_finite() {
        let vm = von_mises_plane(2.0e200, 1.0e200);
        assert!(vm.is_finite());
        assert_abs_diff_eq!(vm / 1.0e200, 3f64.sqrt(), epsilon = 1e-12);

        let arr = von_mises_stress(&array![1.0e200], &array![1.0e200]).unwrap();
        assert_abs_diff_eq!(arr[[0]] / 1.0e200, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pure_shear_state() {
        // σ1 = τ, σ2 = −τ  →  σ_vm = √3·τ
        assert_abs_diff_eq!(von_mises_plane(10.0, -10.0), 10.0 * 3f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_scalar_broadcast() {
        let vm = von_mises_stress(&array![100.0, 200.0], &arr0(0.0)).unwrap();
        assert_eq!(vm.as_slice().unwrap(), &[100.0, 200.0]);
    }

    #[test]
    fn test_nan_propagates() {
        let vm = von_mises_stress(&array![f64::NAN, 1.0], &array![1.0, f64::INFINITY]).unwrap();
        assert!(vm[[0]].is_nan());
        assert!(vm[[1]].is_nan() || vm[[1]].is_infinite());
    }

    #[test]
    fn test_shape_mismatch() {
        let err = von_mises_stress(&array![1.0, 2.0], &array![1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err.error_code(), "SHAPE_MISMATCH");
    }
}
