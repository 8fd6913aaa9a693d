//! # Linear Thermal Expansion
//!
//! ## Notation
//!
//! - `L0` = Original length (m)
//! - `α` = Coefficient of linear thermal expansion (1/K)
//! - `ΔT` = Temperature change (K or °C, same increment)
//! - `ΔL` = Change in length (m), `Lf` = Final length (m)
//!
//! ## Sign Conventions
//!
//! - ΔT > 0 heats the member; with α > 0 it grows (ΔL > 0)
//! - Cooling gives ΔL < 0

use ndarray::{ArrayBase, ArrayD, Data, Dimension, Zip};

use crate::broadcast::broadcast_views3;
use crate::errors::CalcResult;

/// Free thermal elongation and resulting length
///
/// # Formulas
/// - ΔL = L0·α·ΔT
/// - Lf = L0 + ΔL
///
/// # Arguments
/// * `l0` - Original length (m)
/// * `alpha` - Expansion coefficient (1/K), e.g. 12e-6 for structural steel
/// * `delta_t` - Temperature change (K)
///
/// # Returns
/// (ΔL, Lf) - Arrays of the broadcast input shape
///
/// # Example
/// ```rust
/// use mech_core::equations::thermal::thermal_expansion;
/// use ndarray::array;
///
/// let (dl, lf) = thermal_expansion(&array![1000.0], &array![12e-6], &array![100.0]).unwrap();
/// assert!((dl[[0]] - 1.2).abs() < 1e-9);
/// assert!((lf[[0]] - 1001.2).abs() < 1e-9);
/// ```
pub fn thermal_expansion<S1, S2, S3, D1, D2, D3>(
    l0: &ArrayBase<S1, D1>,
    alpha: &ArrayBase<S2, D2>,
    delta_t: &ArrayBase<S3, D3>,
) -> CalcResult<(ArrayD<f64>, ArrayD<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
    D3: Dimension,
{
    let (l0, alpha, delta_t) =
        broadcast_views3("thermal_expansion", ["l0", "alpha", "delta_t"], l0, alpha, delta_t)?;

    let delta_l = Zip::from(&l0)
        .and(&alpha)
        .and(&delta_t)
        .map_collect(|&l, &a, &dt| l * a * dt);
    let final_length = Zip::from(&l0).and(&delta_l).map_collect(|&l, &dl| l + dl);
    Ok((delta_l, final_length))
}
