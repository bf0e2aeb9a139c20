//! Error types for building and checking relation traces.

use curve::CurveError;
use relation::RelationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    #[error("trace has {rows} rows of width {width}, expected {expected_rows} of width {expected_width}")]
    Shape {
        rows: usize,
        width: usize,
        expected_rows: usize,
        expected_width: usize,
    },
    #[error("row {row} violates constraint `{constraint}`")]
    Constraint { row: usize, constraint: &'static str },
    #[error("boundary constraint `{0}` violated")]
    Boundary(&'static str),
    #[error("ladder base must be an affine point")]
    IdentityBase,
    #[error("scalar addition witness violates `{0}`")]
    ScalarAddition(&'static str),
    #[error("degenerate arithmetic: {0}")]
    Curve(#[from] CurveError),
    #[error("relation: {0}")]
    Relation(#[from] RelationError),
}
