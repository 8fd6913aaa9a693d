//! # Particle Kinematics Formulas
//!
//! Closed-form motion of a point mass: drag-free projectile flight and the
//! decomposition of a velocity vector into Cartesian components.
//!
//! ## Notation
//!
//! - `v0` = Launch speed (m/s)
//! - `θ` = Launch / heading angle measured from +x, counterclockwise (degrees)
//! - `t` = Time since launch (s)
//! - `g` = Gravitational acceleration (m/s², positive value, acts along −y)
//! - `x`, `y` = Horizontal and vertical displacement from the launch point (m)
//!
//! ## Sign Conventions
//!
//! - +x horizontal in the launch direction, +y vertically up
//! - Angles in degrees at the API, radians internally
//!
//! ## References
//!
//! - Hibbeler, Engineering Mechanics: Dynamics, 14th Edition, Section 12.6

use ndarray::{Array2, ArrayBase, ArrayD, Data, Dimension, Ix1, Zip};

use super::STANDARD_GRAVITY;
use crate::broadcast::broadcast_views2;
use crate::errors::CalcResult;
use crate::units::Degrees;

// =============================================================================
// PROJECTILE MOTION
// =============================================================================

/// Projectile displacement grid using standard gravity (g = 9.81 m/s²)
///
/// ```text
///   y ↑        . ' ' .
///     │     .'         '.
///     │   .'  v0         '.
///     │ .' θ               '.
///     └─────────────────────────→ x
/// ```
///
/// # Formulas (Hibbeler 12-12, 12-13)
/// - x = v0·cos(θ)·t
/// - y = v0·sin(θ)·t − ½·g·t²
///
/// # Arguments
/// * `v0` - Launch speed (m/s)
/// * `angles_deg` - Launch angles (degrees), one output row each
/// * `t` - Sample times (s), one output column each
///
/// # Returns
/// (x, y) - Displacement grids of shape `(angles.len(), t.len())`
///
/// # Example
/// ```rust
/// use mech_core::equations::kinematics::projectile_trajectory;
/// use ndarray::array;
///
/// let (x, y) = projectile_trajectory(10.0, &array![0.0], &array![0.0, 1.0, 2.0]);
/// assert_eq!(x.shape(), &[1, 3]);
/// assert!((x[[0, 2]] - 20.0).abs() < 1e-9);
/// assert!((y[[0, 2]] + 19.62).abs() < 1e-9);
/// ```
pub fn projectile_trajectory<S1, S2>(
    v0: f64,
    angles_deg: &ArrayBase<S1, Ix1>,
    t: &ArrayBase<S2, Ix1>,
) -> (Array2<f64>, Array2<f64>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    projectile_trajectory_with_gravity(v0, angles_deg, t, STANDARD_GRAVITY)
}

/// Projectile displacement grid with a caller-supplied gravitational acceleration
///
/// Same as [`projectile_trajectory`]; `g` is the magnitude of the downward
/// acceleration (e.g. 1.62 for lunar surface).
pub fn projectile_trajectory_with_gravity<S1, S2>(
    v0: f64,
    angles_deg: &ArrayBase<S1, Ix1>,
    t: &ArrayBase<S2, Ix1>,
    g: f64,
) -> (Array2<f64>, Array2<f64>)
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
{
    let shape = (angles_deg.len(), t.len());

    // Per-angle launch velocity components, reused across every time column
    let (vx, vy): (Vec<f64>, Vec<f64>) = angles_deg
        .iter()
        .map(|&deg| {
            let (sin, cos) = Degrees::to_radians(deg).sin_cos();
            (v0 * cos, v0 * sin)
        })
        .unzip();

    let x = Array2::from_shape_fn(shape, |(i, j)| vx[i] * t[j]);
    let y = Array2::from_shape_fn(shape, |(i, j)| vy[i] * t[j] - 0.5 * g * t[j] * t[j]);
    (x, y)
}

// =============================================================================
// VELOCITY DECOMPOSITION
// =============================================================================

/// Cartesian components of a velocity given speed and heading angle
///
/// # Formulas
/// - vx = v·cos(θ)
/// - vy = v·sin(θ)
///
/// # Returns
/// (vx, vy) - Arrays of the broadcast input shape
///
/// # Errors
/// `ShapeMismatch` when `speed` and `angle_deg` cannot be broadcast.
pub fn velocity_components<S1, S2, D1, D2>(
    speed: &ArrayBase<S1, D1>,
    angle_deg: &ArrayBase<S2, D2>,
) -> CalcResult<(ArrayD<f64>, ArrayD<f64>)>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D1: Dimension,
    D2: Dimension,
{
    let (speed, angle_deg) = broadcast_views2("velocity_components", ["speed", "angle_deg"], speed, angle_deg)?;

    let vx = Zip::from(&speed)
        .and(&angle_deg)
        .map_collect(|&v, &deg| v * Degrees::to_radians(deg).cos());
    let vy = Zip::from(&speed)
        .and(&angle_deg)
        .map_collect(|&v, &deg| v * Degrees::to_radians(deg).sin());
    Ok((vx, vy))
}
