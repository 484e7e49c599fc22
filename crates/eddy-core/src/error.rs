//! Error types for the eddy steppers.
//!
//! Stepping itself has no recoverable error surface: contract violations
//! panic. These enums cover grid construction and the opt-in `try_`
//! entry points for hosts that prefer a `Result` to a panic.

use std::error::Error;
use std::fmt;

/// Errors from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },
    /// A dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"rows"`, `"cols"` or the `"cells"` product).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// Two grids that must share a shape do not.
    DimensionMismatch {
        /// The shape that was expected, `(rows, cols)`.
        expected: (usize, usize),
        /// The shape that was supplied, `(rows, cols)`.
        actual: (usize, usize),
    },
    /// Backing data does not hold exactly `rows * cols` values.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Length of the supplied data.
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => {
                write!(f, "grid must have at least one cell, got {rows}x{cols}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::DimensionMismatch { expected, actual } => write!(
                f,
                "grid shape mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            Self::LengthMismatch { expected, actual } => {
                write!(f, "grid data has {actual} values, expected {expected}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from the fallible stepping entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The current and scratch buffers have different shapes.
    DimensionMismatch {
        /// Shape of the grid being read, `(rows, cols)`.
        current: (usize, usize),
        /// Shape of the grid being written, `(rows, cols)`.
        scratch: (usize, usize),
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { current, scratch } => write!(
                f,
                "current grid is {}x{} but scratch grid is {}x{}",
                current.0, current.1, scratch.0, scratch.1
            ),
        }
    }
}

impl Error for StepError {}
