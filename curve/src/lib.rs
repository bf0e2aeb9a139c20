//! Arithmetic over the secp256k1 elliptic curve.
//!
//! This crate provides the coordinate field, the scalar field, affine points
//! with an explicit identity, and a fixed-width double-and-add ladder for
//! scalar multiplication. The curve parameters and generator are compiled in
//! as constants.

mod basefield;
mod errors;
mod ladder;
mod limbs;
mod point;
mod random;
mod scalarfield;

pub use basefield::BaseField;
pub use errors::CurveError;
pub use ladder::{mul_generator, scalar_mul, LADDER_BITS};
pub use point::Point;
pub use random::RandomField;
pub use scalarfield::{ScalarField, SCALAR_BITS};
