//! # Relation Trace
//!
//! Fixed-shape arithmetic trace of the deterministic-nonce aggregate point
//! relation, with a native checker for its constraints.
//!
//! ## Overview
//!
//! The relation checked by the `relation` crate is
//!
//! ```text
//! nonce     = H(secret, digest)
//! aggregate = secret + nonce  (mod n)
//! aggregate * G == claimed
//! ```
//!
//! This crate unrolls everything after the nonce into data whose shape never
//! depends on the inputs:
//!
//! 1. [`ScalarAddWitness`]: the non-native sum `secret + nonce = aggregate + q * n`
//!    over 64-bit limbs with explicit carries
//! 2. [`LadderTrace`]: one row per scalar bit of the LSB-first double-and-add
//!    ladder over the coordinate field, 256 rows of [`NUM_COLUMNS`] columns
//!
//! [`verify_relation_trace`] ties the two together: the ladder's bit column
//! must be the decomposition of the witnessed sum, and the ladder's output is
//! compared with the claimed point.
//!
//! ## Usage
//!
//! ```
//! use circuit::{build_relation_trace, verify_relation_trace, RelationWitness};
//! use relation::{MessageDigest, NonceStrategy, RelationChecker, Secret, Verdict};
//!
//! let mut secret_bytes = [0u8; 32];
//! secret_bytes[31] = 9;
//! let secret = Secret::from_be_bytes(secret_bytes);
//! let digest = MessageDigest::from_be_bytes([1u8; 32]);
//!
//! let claimed = RelationChecker::new(NonceStrategy::Sha256)
//!     .compute(&secret, &digest)
//!     .unwrap()
//!     .claimed_point()
//!     .unwrap();
//!
//! let witness =
//!     RelationWitness::new(NonceStrategy::Sha256, &secret, &digest, &claimed).unwrap();
//! let trace = build_relation_trace(&witness).unwrap();
//! assert_eq!(verify_relation_trace(&trace, &claimed), Ok(Verdict::Pass));
//! ```
//!
//! ## Ladder constraints
//!
//! Per row, with `gate = bit * (1 - acc_inf)`:
//!
//! - `bit` and `acc_inf` are boolean; an identity accumulator is stored as `(0, 0)`
//! - the base is on the curve and the doubling columns satisfy the tangent formulas
//! - where `gate` is set, the addition columns satisfy the chord formulas and
//!   the x-coordinates differ; elsewhere the addition slope is zero
//! - where `bit * acc_inf` is set, the addition result is the base
//! - where `bit` is clear, the addition result copies the accumulator
//!
//! Between rows, the next base is the doubling and the next accumulator is
//! `acc + bit * (add - acc)`. Proving is out of scope; the constraints are
//! evaluated natively.

mod errors;
pub mod ladder_trace;
pub mod relation_trace;
mod scalar_arithmetic;
mod witness;

pub use errors::TraceError;
pub use ladder_trace::{
    build_ladder_trace, verify_ladder_trace, LadderTrace, NUM_COLUMNS, NUM_ROWS,
};
pub use relation_trace::{build_relation_trace, verify_relation_trace, RelationTrace};
pub use scalar_arithmetic::{ScalarAddWitness, LIMB_BITS, SCALAR_LIMBS};
pub use witness::RelationWitness;

// Re-export commonly used types
pub use curve::{BaseField, Point, ScalarField};
