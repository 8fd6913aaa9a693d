//! # Cantilever Beam Formulas
//!
//! Elastic deflection of a prismatic cantilever carrying a concentrated load
//! at its free end. The beam is fixed at x=0 and free at x=L.
//!
//! ## Notation
//!
//! - `L` = Beam length (m)
//! - `x` = Position along beam measured from the fixed end (m)
//! - `P` = Tip load magnitude (N)
//! - `y` = Transverse deflection (m)
//! - `E` = Modulus of elasticity (Pa)
//! - `I` = Second moment of area (m⁴)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Deflection: Positive upward, so a downward load gives y < 0
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1a
//!   (cantilever, end load)

use ndarray::{Array, ArrayBase, Data, Dimension};

// =============================================================================
// END POINT LOAD
// Cantilever fixed at x=0 with concentrated load P at the free end x=L
// =============================================================================

/// Deflection at position x of an end-loaded cantilever
///
/// ```text
///    ▓│                      P
///    ▓│                      ↓
///    ▓├──────────────────────┤
///    ▓│ ←─────── L ────────→
///    x=0                    x=L
/// ```
///
/// # Formula (Roark's Table 8.1, Case 1a)
/// y(x) = −(P·x² / (6EI))·(3L − x)
///
/// - y(0) = 0 (fixed end)
/// - y(L) = −PL³/(3EI) (tip)
///
/// # Arguments
/// * `p` - Tip load (positive downward)
/// * `l` - Beam length
/// * `x` - Position from the fixed end
/// * `e` - Modulus of elasticity
/// * `i` - Moment of inertia
#[inline]
pub fn cantilever_point_deflection(p: f64, l: f64, x: f64, e: f64, i: f64) -> f64 {
    -(p * x * x / (6.0 * e * i)) * (3.0 * l - x)
}

/// Maximum (tip) deflection of an end-loaded cantilever
///
/// # Formula
/// y_max = −PL³ / (3EI)
#[inline]
pub fn cantilever_point_max_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    -p * l.powi(3) / (3.0 * e * i)
}

/// Deflection profile of an end-loaded cantilever sampled at positions `x`
///
/// Positions outside [0, L] are evaluated with the same polynomial; no range
/// check is applied.
///
/// # Returns
/// Deflections with the same shape as `x`
///
/// # Example
/// ```rust
/// use mech_core::equations::beam::beam_deflection;
/// use ndarray::array;
///
/// // 5 m steel cantilever, 1 kN at the tip
/// let y = beam_deflection(&array![0.0, 5.0], 5.0, 1000.0, 200e9, 1e-6);
/// assert_eq!(y[0], 0.0);
/// assert!((y[1] + 0.208333333).abs() < 1e-6);
/// ```
pub fn beam_deflection<S, D>(x: &ArrayBase<S, D>, l: f64, p: f64, e: f64, i: f64) -> Array<f64, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    x.mapv(|x| cantilever_point_deflection(p, l, x, e, i))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
