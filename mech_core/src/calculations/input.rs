//! # Calculation Inputs
//!
//! JSON shapes accepted by the calculation layer.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "Drive shaft",
//!   "formula": "power_to_torque",
//!   "power": [1000.0, 1500.0],
//!   "omega": 100.0
//! }
//! ```
//!
//! Array-valued fields accept a bare number, a list, or a list of equal-length
//! lists (a 2-D grid). They broadcast against each other exactly like the
//! underlying `ndarray` functions.

use ndarray::{Array1, Array2, ArrayD, IxDyn};
use serde::{Deserialize, Serialize};

use crate::equations::Equation;
use crate::errors::{CalcError, CalcResult};

/// A numeric array as written in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Single number (0-D array)
    Scalar(f64),
    /// Flat list (1-D array)
    Vector(Vec<f64>),
    /// List of equal-length rows (2-D array)
    Grid(Vec<Vec<f64>>),
}

impl NumericInput {
    /// Convert to a dynamic-dimension array.
    ///
    /// # Errors
    /// `InvalidInput` when grid rows differ in length.
    pub fn to_array(&self, field: &str) -> CalcResult<ArrayD<f64>> {
        match self {
            NumericInput::Scalar(v) => Ok(ArrayD::from_elem(IxDyn(&[]), *v)),
            NumericInput::Vector(values) => Ok(Array1::from(values.clone()).into_dyn()),
            NumericInput::Grid(rows) => {
                let ncols = rows.first().map_or(0, Vec::len);
                if let Some(bad) = rows.iter().position(|row| row.len() != ncols) {
                    return Err(CalcError::invalid_input(
                        field,
                        format!("row {} has {} values", bad, rows[bad].len()),
                        format!("grid rows must all have {} values", ncols),
                    ));
                }
                let flat: Vec<f64> = rows.iter().flatten().copied().collect();
                Array2::from_shape_vec((rows.len(), ncols), flat)
                    .map(|grid| grid.into_dyn())
                    .map_err(|e| CalcError::invalid_input(field, "grid", e.to_string()))
            }
        }
    }

    /// Convert to a 1-D array; a scalar becomes a length-1 array.
    ///
    /// # Errors
    /// `InvalidInput` for a 2-D grid.
    pub fn to_vector(&self, field: &str) -> CalcResult<Array1<f64>> {
        match self {
            NumericInput::Scalar(v) => Ok(Array1::from(vec![*v])),
            NumericInput::Vector(values) => Ok(Array1::from(values.clone())),
            NumericInput::Grid(rows) => Err(CalcError::invalid_input(
                field,
                format!("{} rows", rows.len()),
                "expected a number or a flat list",
            )),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(v: f64) -> Self {
        NumericInput::Scalar(v)
    }
}

impl From<Vec<f64>> for NumericInput {
    fn from(values: Vec<f64>) -> Self {
        NumericInput::Vector(values)
    }
}

/// One formula evaluation, tagged by `"formula"` with the function's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "formula", rename_all = "snake_case")]
pub enum FormulaInput {
    VonMisesStress {
        /// First principal stress (Pa)
        sigma1: NumericInput,
        /// Second principal stress (Pa)
        sigma2: NumericInput,
    },
    ProjectileTrajectory {
        /// Launch speed (m/s)
        v0: f64,
        /// Launch angles (deg), one output row each
        angles_deg: NumericInput,
        /// Sample times (s), one output column each
        t: NumericInput,
    },
    ForceResultant {
        fx: NumericInput,
        fy: NumericInput,
    },
    ThermalExpansion {
        /// Original length (m)
        l0: NumericInput,
        /// Expansion coefficient (1/K)
        alpha: NumericInput,
        /// Temperature change (K)
        delta_t: NumericInput,
    },
    AngularVelocityConversion {
        rpm: NumericInput,
    },
    BeamDeflection {
        /// Positions from the fixed end (m)
        x: NumericInput,
        /// Beam length (m)
        length: f64,
        /// Tip load (N)
        load: f64,
        /// Modulus of elasticity (Pa)
        modulus: f64,
        /// Second moment of area (m⁴)
        inertia: f64,
    },
    VelocityComponents {
        speed: NumericInput,
        angle_deg: NumericInput,
    },
    PowerToTorque {
        /// Power (W)
        power: NumericInput,
        /// Angular velocity (rad/s)
        omega: NumericInput,
    },
    SpringSystem {
        k: NumericInput,
        x: NumericInput,
    },
    DampedOscillation {
        x0: f64,
        zeta: f64,
        omega_n: f64,
        t: NumericInput,
    },
}

impl FormulaInput {
    /// Registry entry for this formula
    pub fn equation(&self) -> Equation {
        match self {
            FormulaInput::VonMisesStress { .. } => Equation::VonMisesStress,
            FormulaInput::ProjectileTrajectory { .. } => Equation::ProjectileTrajectory,
            FormulaInput::ForceResultant { .. } => Equation::ForceResultant,
            FormulaInput::ThermalExpansion { .. } => Equation::ThermalExpansion,
            FormulaInput::AngularVelocityConversion { .. } => Equation::AngularVelocityConversion,
            FormulaInput::BeamDeflection { .. } => Equation::BeamDeflection,
            FormulaInput::VelocityComponents { .. } => Equation::VelocityComponents,
            FormulaInput::PowerToTorque { .. } => Equation::PowerToTorque,
            FormulaInput::SpringSystem { .. } => Equation::SpringSystem,
            FormulaInput::DampedOscillation { .. } => Equation::DampedOscillation,
        }
    }
}
