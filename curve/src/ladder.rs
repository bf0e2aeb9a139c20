//! Fixed-width double-and-add scalar multiplication.
//!
//! The ladder walks all [`LADDER_BITS`] bits of the scalar, least significant
//! first. Every iteration doubles the base accumulator exactly once; when the
//! bit is set the base accumulator is added into the running sum. There is no
//! early exit on zero bits or zero scalars, so the iteration count is the same
//! for every input.

use crate::errors::CurveError;
use crate::scalarfield::SCALAR_BITS;
use crate::{Point, ScalarField};

/// Number of ladder iterations (32 bytes x 8 bits).
pub const LADDER_BITS: usize = SCALAR_BITS;

/// Compute `scalar * base`.
///
/// Canonical scalars over a prime-order base never reach the degenerate
/// formulas; other bases may, and report it as a [`CurveError`].
pub fn scalar_mul(base: &Point, scalar: &ScalarField) -> Result<Point, CurveError> {
    let bits = scalar.to_bits_le();
    let mut result = Point::Identity;
    let mut temp = *base;

    for &bit in bits.iter() {
        if bit {
            result = match result {
                // first set bit: nothing accumulated yet
                Point::Identity => temp,
                Point::Affine { .. } => result.add_distinct(&temp)?,
            };
        }
        temp = temp.double()?;
    }

    Ok(result)
}

/// Compute `scalar * G` for the fixed generator.
#[inline]
pub fn mul_generator(scalar: &ScalarField) -> Result<Point, CurveError> {
    scalar_mul(&Point::GENERATOR, scalar)
}
