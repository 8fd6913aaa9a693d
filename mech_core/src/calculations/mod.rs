//! # Formula Calculations
//!
//! JSON-driven front end to the [`equations`](crate::equations) module. Each
//! calculation follows the pattern:
//!
//! - [`CalculationRequest`] - Label, settings, and a tagged [`FormulaInput`]
//! - [`FormulaResult`] - Named output arrays (JSON-serializable)
//! - [`calculate`] - Pure evaluation, recording the equation used
//!
//! ## Example
//!
//! ```rust
//! use mech_core::calculations::{calculate, CalculationRequest};
//! use mech_core::equations::EquationTracker;
//!
//! let request: CalculationRequest = serde_json::from_str(r#"{
//!     "label": "Drive shaft",
//!     "formula": "power_to_torque",
//!     "power": 1000.0,
//!     "omega": [100.0, 50.0]
//! }"#).unwrap();
//!
//! let mut tracker = EquationTracker::new();
//! let result = calculate(&request, &mut tracker).unwrap();
//! assert_eq!(result.output("torque").unwrap().values, vec![10.0, 20.0]);
//! ```

pub mod input;
pub mod output;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::equations::{self, EquationTracker};
use crate::errors::CalcResult;
use crate::settings::CalcSettings;

pub use input::{FormulaInput, NumericInput};
pub use output::{FormulaResult, NumericOutput};

/// One labelled formula evaluation.
///
/// The formula fields sit at the top level next to `label` and `settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// User label (e.g. "Drive shaft", "Valve spring")
    #[serde(default)]
    pub label: String,

    /// Overrides for physical constants
    #[serde(default)]
    pub settings: CalcSettings,

    /// The formula and its arguments
    #[serde(flatten)]
    pub input: FormulaInput,
}

impl CalculationRequest {
    /// Create a request with default settings
    pub fn new(label: impl Into<String>, input: FormulaInput) -> Self {
        CalculationRequest {
            label: label.into(),
            settings: CalcSettings::default(),
            input,
        }
    }

    /// Builder-style settings override
    pub fn with_settings(mut self, settings: CalcSettings) -> Self {
        self.settings = settings;
        self
    }
}

/// Evaluate a single request.
///
/// # Errors
/// - `ShapeMismatch` when array arguments cannot be broadcast
/// - `InvalidInput` for ragged grids or a grid where a flat list is required
pub fn calculate(request: &CalculationRequest, tracker: &mut EquationTracker) -> CalcResult<FormulaResult> {
    let equation = request.input.equation();
    debug!("evaluating '{}' with {}", request.label, equation.function_name());

    let outputs = match &request.input {
        FormulaInput::VonMisesStress { sigma1, sigma2 } => {
            let vm = equations::von_mises_stress(&sigma1.to_array("sigma1")?, &sigma2.to_array("sigma2")?)?;
            vec![NumericOutput::from_array("sigma_vm", &vm)]
        }
        FormulaInput::ProjectileTrajectory { v0, angles_deg, t } => {
            let (x, y) = equations::projectile_trajectory_with_gravity(
                *v0,
                &angles_deg.to_vector("angles_deg")?,
                &t.to_vector("t")?,
                request.settings.gravity_m_s2,
            );
            vec![NumericOutput::from_array("x", &x), NumericOutput::from_array("y", &y)]
        }
        FormulaInput::ForceResultant { fx, fy } => {
            let (magnitude, angle) = equations::force_resultant(&fx.to_array("fx")?, &fy.to_array("fy")?)?;
            vec![
                NumericOutput::from_array("magnitude", &magnitude),
                NumericOutput::from_array("angle_deg", &angle),
            ]
        }
        FormulaInput::ThermalExpansion { l0, alpha, delta_t } => {
            let (delta_l, final_length) = equations::thermal_expansion(
                &l0.to_array("l0")?,
                &alpha.to_array("alpha")?,
                &delta_t.to_array("delta_t")?,
            )?;
            vec![
                NumericOutput::from_array("delta_l", &delta_l),
                NumericOutput::from_array("final_length", &final_length),
            ]
        }
        FormulaInput::AngularVelocityConversion { rpm } => {
            let (omega, theta) =
                equations::angular_displacement_over(&rpm.to_array("rpm")?, request.settings.rotation_window_s);
            vec![
                NumericOutput::from_array("omega", &omega),
                NumericOutput::from_array("theta", &theta),
            ]
        }
        FormulaInput::BeamDeflection { x, length, load, modulus, inertia } => {
            let y = equations::beam_deflection(&x.to_array("x")?, *length, *load, *modulus, *inertia);
            vec![NumericOutput::from_array("deflection", &y)]
        }
        FormulaInput::VelocityComponents { speed, angle_deg } => {
            let (vx, vy) = equations::velocity_components(&speed.to_array("speed")?, &angle_deg.to_array("angle_deg")?)?;
            vec![NumericOutput::from_array("vx", &vx), NumericOutput::from_array("vy", &vy)]
        }
        FormulaInput::PowerToTorque { power, omega } => {
            let torque = equations::power_to_torque(&power.to_array("power")?, &omega.to_array("omega")?)?;
            vec![NumericOutput::from_array("torque", &torque)]
        }
        FormulaInput::SpringSystem { k, x } => {
            let (force, energy) = equations::spring_system(&k.to_array("k")?, &x.to_array("x")?)?;
            vec![
                NumericOutput::from_array("force", &force),
                NumericOutput::from_array("energy", &energy),
            ]
        }
        FormulaInput::DampedOscillation { x0, zeta, omega_n, t } => {
            let x = equations::damped_oscillation(*x0, *zeta, *omega_n, &t.to_array("t")?);
            vec![NumericOutput::from_array("x", &x)]
        }
    };

    tracker.record(equation, request.label.clone());

    Ok(FormulaResult {
        label: request.label.clone(),
        equation,
        outputs,
    })
}

/// Evaluate requests in order, stopping at the first failure.
pub fn calculate_batch(requests: &[CalculationRequest], tracker: &mut EquationTracker) -> CalcResult<Vec<FormulaResult>> {
    requests.iter().map(|request| calculate(request, tracker)).collect()
}

/// Parse a JSON document holding either one request or an array of requests.
pub fn parse_requests(json: &str) -> CalcResult<Vec<CalculationRequest>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::Equation;
    use approx::assert_abs_diff_eq;

    fn run(json: &str) -> FormulaResult {
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        calculate(&request, &mut EquationTracker::new()).unwrap()
    }

    #[test]
    fn test_projectile_request() {
        let result = run(r#"{ "formula": "projectile_trajectory", "v0": 10, "angles_deg": [0], "t": [0, 1, 2] }"#);
        let y = result.output("y").unwrap();
        assert_eq!(y.shape, vec![1, 3]);
        assert_abs_diff_eq!(y.values[2], -19.62, epsilon = 1e-9);
    }

    #[test]
    fn test_projectile_gravity_override() {
        let result = run(
            r#"{ "formula": "projectile_trajectory", "v0": 0, "angles_deg": 0, "t": 1,
                 "settings": { "gravity_m_s2": 2.0 } }"#,
        );
        assert_abs_diff_eq!(result.output("y").unwrap().values[0], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_window_override() {
        let result = run(r#"{ "formula": "angular_velocity_conversion", "rpm": [60], "settings": { "rotation_window_s": 1.0 } }"#);
        let omega = result.output("omega").unwrap().values[0];
        let theta = result.output("theta").unwrap().values[0];
        assert_abs_diff_eq!(theta, omega, epsilon = 1e-12);
    }

    #[test]
    fn test_thermal_request_scalar_broadcast() {
        let result = run(r#"{ "formula": "thermal_expansion", "l0": [1000, 500], "alpha": 12e-6, "delta_t": 100 }"#);
        let dl = result.output("delta_l").unwrap();
        assert_eq!(dl.shape, vec![2]);
        assert_abs_diff_eq!(dl.values[0], 1.2, epsilon = 1e-9);
        assert_abs_diff_eq!(dl.values[1], 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_beam_request() {
        let result = run(
            r#"{ "formula": "beam_deflection", "x": [0.0, 2.5, 5.0],
                 "length": 5.0, "load": 1000.0, "modulus": 200e9, "inertia": 1e-6 }"#,
        );
        let y = result.output("deflection").unwrap();
        assert_eq!(y.values[0], 0.0);
        assert!(y.values[2] < y.values[1]);
    }

    #[test]
    fn test_every_formula_evaluates() {
        let requests = parse_requests(
            r#"[
                { "formula": "von_mises_stress", "sigma1": [100, 200], "sigma2": [50, 100] },
                { "formula": "projectile_trajectory", "v0": 20, "angles_deg": [45], "t": [0, 1] },
                { "formula": "force_resultant", "fx": 3, "fy": 4 },
                { "formula": "thermal_expansion", "l0": 1, "alpha": 1e-5, "delta_t": 10 },
                { "formula": "angular_velocity_conversion", "rpm": 60 },
                { "formula": "beam_deflection", "x": 0, "length": 1, "load": 1, "modulus": 1, "inertia": 1 },
                { "formula": "velocity_components", "speed": 10, "angle_deg": 0 },
                { "formula": "power_to_torque", "power": 1000, "omega": 100 },
                { "formula": "spring_system", "k": 1000, "x": 0.1 },
                { "formula": "damped_oscillation", "x0": 1, "zeta": 0.1, "omega_n": 6.283185307179586, "t": [0] }
            ]"#,
        )
        .unwrap();

        let mut tracker = EquationTracker::new();
        let results = calculate_batch(&requests, &mut tracker).unwrap();
        assert_eq!(results.len(), 10);
        assert_eq!(tracker.unique_equations().len(), 10);

        let damped = results.last().unwrap();
        assert_eq!(damped.equation, Equation::DampedOscillation);
        assert_eq!(damped.output("x").unwrap().values, vec![1.0]);
    }

    #[test]
    fn test_shape_mismatch_surfaces() {
        let request: CalculationRequest =
            serde_json::from_str(r#"{ "formula": "spring_system", "k": [1, 2], "x": [1, 2, 3] }"#).unwrap();
        let mut tracker = EquationTracker::new();
        let err = calculate(&request, &mut tracker).unwrap_err();
        assert_eq!(err.error_code(), "SHAPE_MISMATCH");
        assert!(tracker.usages().is_empty(), "failed calculations are not recorded");
    }

    #[test]
    fn test_batch_stops_at_first_error() {
        let requests = parse_requests(
            r#"[
                { "formula": "power_to_torque", "power": [1, 2], "omega": [1, 2, 3] },
                { "formula": "power_to_torque", "power": 1, "omega": 1 }
            ]"#,
        )
        .unwrap();
        let mut tracker = EquationTracker::new();
        assert!(calculate_batch(&requests, &mut tracker).is_err());
        assert!(tracker.usages().is_empty());
    }

    #[test]
    fn test_parse_single_object() {
        let requests = parse_requests(r#"{ "label": "one", "formula": "power_to_torque", "power": 1, "omega": 1 }"#).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].label, "one");
        assert_eq!(requests[0].settings, CalcSettings::default());
    }

    #[test]
    fn test_parse_unknown_formula() {
        let err = parse_requests(r#"{ "formula": "bernoulli", "p": 1 }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_request_builder() {
        let request = CalculationRequest::new(
            "Lunar shot",
            FormulaInput::ProjectileTrajectory {
                v0: 5.0,
                angles_deg: NumericInput::Vector(vec![30.0]),
                t: NumericInput::Vector(vec![1.0]),
            },
        )
        .with_settings(CalcSettings {
            gravity_m_s2: 1.62,
            ..CalcSettings::default()
        });

        let json = serde_json::to_string(&request).unwrap();
        let back: CalculationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
