//! Error types for curve arithmetic.

use thiserror::Error;

/// Inputs on which the affine slope formulas would divide by zero.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveError {
    /// Doubling a point with `y = 0`.
    #[error("cannot double a point with y = 0")]
    DegenerateDoubling,
    /// Adding two points that share an x-coordinate (equal or mutually inverse).
    #[error("cannot add points with equal x-coordinates")]
    DegenerateAddition,
}
