//! Errors reported by the mutation and sampling APIs.
//!
//! Curve evaluation itself never fails: its preconditions are the caller's to uphold.

use thiserror::Error;

/// Everything that can go wrong while editing or sampling a curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// A point or weight index past the end of the control polygon
    #[error("Index {index} is out of range for {len} control points")]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// Number of control points at the time of the request
        len: usize,
    },

    /// Weights were set on a family without per-point weights
    #[error("Curve family {0} does not carry point weights")]
    Unweighted(&'static str),

    /// Weights were set on a control polygon created without them
    #[error("Control polygon does not carry point weights")]
    UnweightedPolygon,

    /// Fewer than two control points, nothing to evaluate
    #[error("Curve needs at least two control points, found {0}")]
    NotEnoughPoints(usize),

    /// The parameter domain `[0, max_t]` is empty
    #[error("Curve parameter domain [0, {0}] is empty")]
    EmptyDomain(f64),

    /// Sampling step which would never reach the end of the domain
    #[error("Step size must be finite and positive, got {0}")]
    InvalidStepSize(f64),

    /// Identifier not naming any curve family
    #[error("Unknown curve kind: {0}")]
    UnknownKind(String),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SplineError>;
