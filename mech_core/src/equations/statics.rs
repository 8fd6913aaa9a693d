//! # Planar Force Composition
//!
//! Resultant of concurrent coplanar force components.
//!
//! ## Notation
//!
//! - `Fx`, `Fy` = Force components along +x and +y (N)
//! - `|F|` = Resultant magnitude (N)
//! - `θ` = Resultant direction from +x, counterclockwise (degrees)
//!
//! ## Sign Conventions
//!
//! - θ lies in (−180°, 180°]
//! - A zero resultant reports θ = 0° (the atan2 convention for (0, 0))

use ndarray::{ArrayBase, ArrayD, Data, Dimension, Zip};

use crate::broadcast::broadcast_views2;
use crate::errors::CalcResult;
use crate::units::Radians;

/// Magnitude and direction of the resultant of force components
///
/// # Formulas (Hibbeler Statics 2-11, 2-12)
/// - |F| = √(Fx² + Fy²)
/// - θ = atan2(Fy, Fx), in degrees
///
/// The magnitude uses `hypot`, which does not overflow for very large
/// components.
///
/// # Returns
/// (magnitude, angle_deg) - Arrays of the broadcast input shape
///
/// # Example
/// ```rust
/// use mech_core::equations::statics::force_resultant;
/// use ndarray::array;
///
/// let (mag, angle) = force_resultant(&array![3.0], &array![4.0]).unwrap();
/// assert!((mag[[0]] - 5.0).abs() < 1e-12);
/// assert!((angle[[0]] - 53.13010235).abs() < 1e-6);
/// ```
pub fn force_resultant<S1, S2, D1, D2>(
    fx: &ArrayBase<S1, D1>,
    fy: &ArrayBase<S2, D2>,
) -> CalcResult<(ArrayD<f64>, ArrayD<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let (fx, fy) = broadcast_views2("force_resultant", ["fx", "fy"], fx, fy)?;

    let magnitude = Zip::from(&fx).and(&fy).map_collect(|&x, &y| x.hypot(y));
    let angle_deg = Zip::from(&fx)
        .and(&fy)
        .map_collect(|&x, &y| direction_deg(x, y));
    Ok((magnitude, angle_deg))
}

/// atan2 in degrees, folded into (−180°, 180°]
///
/// atan2(−0.0, x<0) returns −π; that direction is reported as +180°.
#[inline]
fn direction_deg(fx: f64, fy: f64) -> f64 {
    let deg = Radians::to_degrees(fy.atan2(fx));
    if deg <= -180.0 {
        deg + 360.0
    } else {
        deg
    }
}
