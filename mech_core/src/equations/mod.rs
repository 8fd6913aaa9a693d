//! # Mechanical Engineering Equations
//!
//! Every closed-form formula in mech_core lives under this module. Each one is
//! a pure function over `ndarray` arrays: no state, no I/O, and the only
//! failure is a pair of input shapes that cannot be broadcast together.
//!
//! ## Modules
//!
//! - [`stress`] - Von Mises equivalent stress
//! - [`statics`] - Planar force resultant
//! - [`thermal`] - Linear thermal expansion
//! - [`beam`] - Cantilever deflection
//! - [`kinematics`] - Projectile motion, velocity components
//! - [`rotation`] - rpm conversion, power to torque
//! - [`vibration`] - Spring force/energy, damped oscillation
//! - [`registry`] - Equation metadata and usage tracking
//!
//! ## Sign Conventions
//!
//! - **Angles**: Degrees at the API, counterclockwise from +x
//! - **Vertical displacement**: Positive up
//! - **Beam deflection**: Positive up (a downward tip load deflects negative)
//! - **Spring force**: Restoring, F = −k·x
//!
//! ## Numeric Edge Cases
//!
//! NaN and ±∞ inputs propagate per IEEE-754. Physically meaningless inputs
//! (negative lengths, ζ ≥ 1) are evaluated as written, never rejected.

pub mod beam;
pub mod kinematics;
pub mod registry;
pub mod rotation;
pub mod statics;
pub mod stress;
pub mod thermal;
pub mod vibration;

/// Standard gravitational acceleration used by projectile motion (m/s²)
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Window over which `angular_velocity_conversion` reports swept angle (s)
pub const ROTATION_WINDOW_S: f64 = 5.0;

// Re-export commonly used items
pub use beam::{beam_deflection, cantilever_point_deflection, cantilever_point_max_deflection};
pub use kinematics::{projectile_trajectory, projectile_trajectory_with_gravity, velocity_components};
pub use rotation::{angular_displacement_over, angular_velocity_conversion, power_to_torque};
pub use statics::force_resultant;
pub use stress::{von_mises_plane, von_mises_stress};
pub use thermal::thermal_expansion;
pub use vibration::{damped_oscillation, spring_system};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    EquationTracker,
    EquationUsage,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
};
