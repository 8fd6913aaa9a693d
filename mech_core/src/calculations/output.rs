//! # Calculation Results
//!
//! Arrays leave the calculation layer as `{ name, shape, values }` with values
//! in row-major order. NaN and ±∞ have no JSON representation; serde_json
//! writes them as `null`.

use ndarray::{ArrayBase, Data, Dimension};
use serde::{Deserialize, Serialize};

use crate::equations::Equation;

/// A named output array, flattened row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericOutput {
    /// Output name (e.g. "torque", "x")
    pub name: String,
    /// Array shape; empty for a scalar
    pub shape: Vec<usize>,
    /// Row-major values
    pub values: Vec<f64>,
}

impl NumericOutput {
    /// Capture an array under `name`
    pub fn from_array<S, D>(name: impl Into<String>, array: &ArrayBase<S, D>) -> Self
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        NumericOutput {
            name: name.into(),
            shape: array.shape().to_vec(),
            values: array.iter().copied().collect(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of evaluating one formula request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormulaResult {
    /// Label copied from the request
    pub label: String,
    /// Formula that was evaluated
    pub equation: Equation,
    /// Output arrays in the formula's documented order
    pub outputs: Vec<NumericOutput>,
}

impl FormulaResult {
    /// Find an output by name
    pub fn output(&self, name: &str) -> Option<&NumericOutput> {
        self.outputs.iter().find(|o| o.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_array_row_major() {
        let grid = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let out = NumericOutput::from_array("y", &grid);
        assert_eq!(out.shape, vec![2, 3]);
        assert_eq!(out.values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(out.len(), 6);
    }

    #[test]
    fn test_from_transposed_view_is_logical_order() {
        let grid = array![[1.0, 2.0], [3.0, 4.0]];
        let out = NumericOutput::from_array("t", &grid.t());
        assert_eq!(out.values, vec![1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_output_lookup() {
        let result = FormulaResult {
            label: "demo".to_string(),
            equation: Equation::SpringSystem,
            outputs: vec![
                NumericOutput::from_array("force", &array![-100.0]),
                NumericOutput::from_array("energy", &array![5.0]),
            ],
        };
        assert_eq!(result.output("energy").unwrap().values, vec![5.0]);
        assert!(result.output("torque").is_none());
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let out = NumericOutput::from_array("torque", &array![f64::NAN]);
        let json = serde_json::to_string(&out).unwrap();
        assert!(json.contains("[null]"), "{}", json);
    }
}
