//! Error types for the relation check.

use curve::CurveError;
use thiserror::Error;

/// Conditions under which a relation cannot be evaluated at all.
///
/// A claimed point that simply does not match is not an error; it is
/// reported as [`crate::Verdict::Fail`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelationError {
    /// The secret encodes a value greater than or equal to the group order.
    #[error("secret is not a canonical scalar")]
    NonCanonicalSecret,
    /// The nonce hash could not be evaluated.
    #[error("nonce derivation failed")]
    NonceDerivation,
    /// The ladder reached a division by zero.
    #[error("degenerate curve arithmetic: {0}")]
    Curve(#[from] CurveError),
}
