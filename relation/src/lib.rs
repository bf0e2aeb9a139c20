//! Deterministic-nonce aggregate point relation over secp256k1.
//!
//! A signer in a multi-party Schnorr-style protocol proves that its nonce was
//! derived deterministically from its own secret and the message. This crate
//! computes and checks the relation such a proof is built over:
//!
//! - The nonce is `H(secret, digest)` for a pluggable [`NonceDerivation`]
//! - The aggregate scalar is `secret + nonce (mod n)`
//! - The relation holds when `aggregate * G` equals the claimed point
//!
//! # Example
//!
//! ```
//! use relation::{MessageDigest, NonceStrategy, RelationChecker, Secret, Verdict};
//!
//! let checker = RelationChecker::new(NonceStrategy::Sha256);
//! let mut secret_bytes = [0u8; 32];
//! secret_bytes[31] = 42;
//! let secret = Secret::from_be_bytes(secret_bytes);
//! let digest = MessageDigest::from_be_bytes([7u8; 32]);
//!
//! // Prover side: publish the aggregate point
//! let output = checker.compute(&secret, &digest).expect("canonical secret");
//! let claimed = output.claimed_point().expect("non-zero aggregate");
//!
//! // Checker side
//! let verdict = checker.check(&secret, &digest, &claimed).expect("canonical secret");
//! assert_eq!(verdict, Verdict::Pass);
//! ```
//!
//! # Byte orders
//!
//! - Secret, digest and nonce are big-endian
//! - Claimed point coordinates are little-endian

mod checker;
pub mod constants;
mod errors;
mod inputs;
mod nonce;


pub use checker::{RelationChecker, RelationOutput, Verdict, check_relation};
pub use errors::RelationError;
pub use inputs::{ClaimedPoint, MessageDigest, Nonce, Secret};
pub use nonce::{NonceDerivation, NonceStrategy, PoseidonNonce, Sha256Nonce};
