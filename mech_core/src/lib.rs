//! # mech_core - Mechanical Engineering Formula Library
//!
//! `mech_core` provides closed-form mechanical engineering formulas (stress,
//! statics, kinematics, thermal expansion, rotation, beams, vibration) as pure
//! functions over `ndarray` arrays. Array arguments broadcast against each
//! other, so a scalar and a vector, or a column and a row, combine
//! element-wise without any looping at the call site.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take arrays and return arrays
//! - **Vectorized**: NumPy-style broadcasting across every array argument
//! - **JSON-First**: The calculation layer is fully Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use mech_core::equations::von_mises_stress;
//! use ndarray::array;
//!
//! let sigma1 = array![100.0, 200.0];
//! let sigma2 = array![50.0, 100.0];
//! let vm = von_mises_stress(&sigma1, &sigma2).unwrap();
//! assert!((vm[[0]] - 86.602540378).abs() < 1e-6);
//! ```
//!
//! ## Modules
//!
//! - [`equations`] - The formula library and equation registry
//! - [`calculations`] - JSON requests and results wrapping the formulas
//! - [`broadcast`] - Shape broadcasting shared by the formulas
//! - [`units`] - Type-safe angle and angular velocity wrappers
//! - [`settings`] - Overridable physical constants
//! - [`errors`] - Structured error types

pub mod broadcast;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, calculate_batch, parse_requests, CalculationRequest, FormulaInput, FormulaResult};
pub use errors::{CalcError, CalcResult};
pub use settings::CalcSettings;
