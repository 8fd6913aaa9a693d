//! # Error Types
//!
//! Structured error types for mech_core. Formula evaluation has exactly one
//! failure mode of its own (inputs whose shapes cannot be broadcast together);
//! the remaining variants belong to the JSON calculation layer and the tools
//! built on top of it.
//!
//! Numeric edge cases are NOT errors: dividing by a zero angular velocity,
//! NaN inputs, or negative lengths all flow through as IEEE-754 values.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::errors::{CalcError, CalcResult};
//!
//! fn check_lengths(a: &[f64], b: &[f64]) -> CalcResult<()> {
//!     if a.len() != b.len() && a.len() != 1 && b.len() != 1 {
//!         return Err(CalcError::shape_mismatch("demo", &[a.len()], &[b.len()]));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_lengths(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mech_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for formula and calculation operations.
///
/// Serializes as `{"type": "...", "details": {...}}` so JSON consumers can
/// dispatch on the variant without parsing the message.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Input arrays cannot be broadcast to a common shape
    #[error("Shape mismatch in '{operation}': cannot broadcast {shapes}")]
    ShapeMismatch {
        operation: String,
        shapes: String,
    },

    /// An input value is invalid (ragged grid, wrong kind of value, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Equation name not present in the registry
    #[error("Unknown equation: {name}")]
    UnknownEquation { name: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a ShapeMismatch error from the two offending shapes
    pub fn shape_mismatch(operation: impl Into<String>, left: &[usize], right: &[usize]) -> Self {
        CalcError::ShapeMismatch {
            operation: operation.into(),
            shapes: format!("{:?} with {:?}", left, right),
        }
    }

    /// Create a ShapeMismatch error naming every input and its shape
    pub fn shape_mismatch_named(operation: impl Into<String>, inputs: &[(&str, &[usize])]) -> Self {
        let shapes = inputs
            .iter()
            .map(|(name, shape)| format!("{}={:?}", name, shape))
            .collect::<Vec<_>>()
            .join(", ");
        CalcError::ShapeMismatch {
            operation: operation.into(),
            shapes,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownEquation error
    pub fn unknown_equation(name: impl Into<String>) -> Self {
        CalcError::UnknownEquation { name: name.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownEquation { .. } => "UNKNOWN_EQUATION",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
