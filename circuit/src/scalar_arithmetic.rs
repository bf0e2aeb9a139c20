//! Non-native scalar addition.
//!
//! The aggregate scalar is `secret + nonce (mod n)`, which does not fit in the
//! coordinate field. The addition is witnessed over 64-bit limbs as
//!
//! ```text
//! a + b = c + q * n,   q in {0, 1}
//! ```
//!
//! with the carries of both sides recorded per limb, so that checking the
//! witness is a fixed sequence of limb equations.

use curve::ScalarField;
use serde::{Deserialize, Serialize};

use crate::errors::TraceError;

/// Number of 64-bit limbs in a scalar.
pub const SCALAR_LIMBS: usize = 4;

/// Number of bits per limb
pub const LIMB_BITS: u32 = 64;

/// Witness for `a + b = c + q * n`.
///
/// `sum` holds the low limbs shared by both sides; `sum_carries` are the
/// carries out of `a + b` and `reduce_carries` those out of `c + q * n`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScalarAddWitness {
    pub a: [u64; SCALAR_LIMBS],
    pub b: [u64; SCALAR_LIMBS],
    pub c: [u64; SCALAR_LIMBS],
    pub quotient: bool,
    pub sum: [u64; SCALAR_LIMBS],
    pub sum_carries: [bool; SCALAR_LIMBS],
    pub reduce_carries: [bool; SCALAR_LIMBS],
}

impl ScalarAddWitness {
    /// Witness the modular sum of two canonical scalars.
    pub fn new(a: &ScalarField, b: &ScalarField) -> Self {
        let a_limbs = a.to_canonical_limbs();
        let b_limbs = b.to_canonical_limbs();
        let c_limbs = (*a + *b).to_canonical_limbs();
        let order = ScalarField::order_limbs();

        let mut sum = [0u64; SCALAR_LIMBS];
        let mut sum_carries = [false; SCALAR_LIMBS];
        let mut carry = 0u128;
        for i in 0..SCALAR_LIMBS {
            let wide = a_limbs[i] as u128 + b_limbs[i] as u128 + carry;
            sum[i] = wide as u64;
            carry = wide >> LIMB_BITS;
            sum_carries[i] = carry == 1;
        }

        // a + b < 2n, so at most one n is subtracted
        let quotient = sum_carries[SCALAR_LIMBS - 1] || !limbs_lt(&sum, &order);

        let mut reduce_carries = [false; SCALAR_LIMBS];
        let mut carry = 0u128;
        for i in 0..SCALAR_LIMBS {
            let wide = c_limbs[i] as u128 + quotient as u128 * order[i] as u128 + carry;
            carry = wide >> LIMB_BITS;
            reduce_carries[i] = carry == 1;
        }

        Self {
            a: a_limbs,
            b: b_limbs,
            c: c_limbs,
            quotient,
            sum,
            sum_carries,
            reduce_carries,
        }
    }

    /// The reduced sum `c` as a scalar.
    pub fn output(&self) -> Option<ScalarField> {
        limbs_lt(&self.c, &ScalarField::order_limbs())
            .then(|| ScalarField::from_canonical_limbs(self.c))
    }

    /// Check every limb equation of the witness.
    pub fn verify(&self) -> Result<(), TraceError> {
        let order = ScalarField::order_limbs();
        for (limbs, name) in [
            (&self.a, "a_canonical"),
            (&self.b, "b_canonical"),
            (&self.c, "c_canonical"),
        ] {
            if !limbs_lt(limbs, &order) {
                return Err(TraceError::ScalarAddition(name));
            }
        }

        let radix = 1u128 << LIMB_BITS;
        let q = self.quotient as u128;
        let mut sum_carry = 0u128;
        let mut reduce_carry = 0u128;
        for i in 0..SCALAR_LIMBS {
            let next_sum_carry = self.sum_carries[i] as u128;
            let next_reduce_carry = self.reduce_carries[i] as u128;

            let lhs = self.a[i] as u128 + self.b[i] as u128 + sum_carry;
            if lhs != self.sum[i] as u128 + next_sum_carry * radix {
                return Err(TraceError::ScalarAddition("sum_limb"));
            }
            let rhs = self.c[i] as u128 + q * order[i] as u128 + reduce_carry;
            if rhs != self.sum[i] as u128 + next_reduce_carry * radix {
                return Err(TraceError::ScalarAddition("reduce_limb"));
            }

            sum_carry = next_sum_carry;
            reduce_carry = next_reduce_carry;
        }

        if sum_carry != reduce_carry {
            return Err(TraceError::ScalarAddition("top_carry"));
        }
        Ok(())
    }
}

/// Little-endian limb comparison `lhs < rhs`.
fn limbs_lt(lhs: &[u64; SCALAR_LIMBS], rhs: &[u64; SCALAR_LIMBS]) -> bool {
    lhs.iter().rev().cmp(rhs.iter().rev()).is_lt()
}
