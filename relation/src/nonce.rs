//! Deterministic nonce derivation.
//!
//! A strategy maps `(secret, digest)` to a 32-byte nonce. Two interchangeable
//! strategies are provided:
//!
//! - [`Sha256Nonce`]: SHA-256 over `secret || digest`.
//! - [`PoseidonNonce`]: Poseidon over the BN254 scalar field, fed the 128-bit
//!   halves of both inputs as four field elements.
//!
//! [`NonceStrategy`] selects one of them at runtime and can be embedded in a
//! host's serialized configuration.

use ark_bn254::Fr;
use light_poseidon::{Poseidon, PoseidonBytesHasher, PoseidonError};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::constants::POSEIDON_INPUTS;
use crate::errors::RelationError;
use crate::inputs::{MessageDigest, Nonce, Secret};

/// A pure, deterministic function `nonce = H(secret, digest)`.
///
/// An error means the hash itself could not be evaluated; the same inputs
/// always produce the same result.
pub trait NonceDerivation {
    fn derive(&self, secret: &Secret, digest: &MessageDigest) -> Result<Nonce, RelationError>;
}

impl<N: NonceDerivation + ?Sized> NonceDerivation for &N {
    fn derive(&self, secret: &Secret, digest: &MessageDigest) -> Result<Nonce, RelationError> {
        (**self).derive(secret, digest)
    }
}

/// Byte-oriented strategy: `SHA-256(secret || digest)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Sha256Nonce;

impl NonceDerivation for Sha256Nonce {
    fn derive(&self, secret: &Secret, digest: &MessageDigest) -> Result<Nonce, RelationError> {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_be_bytes());
        hasher.update(digest.as_be_bytes());
        Ok(Nonce::from_be_bytes(hasher.finalize().into()))
    }
}

/// Algebraic strategy: circom-compatible Poseidon over the BN254 scalar field.
///
/// # Implementation Details
///
/// 1. The secret and digest are split into `(hi, lo)` 128-bit halves, each of
///    which is one field element
/// 2. The tuple `(secret.hi, secret.lo, digest.hi, digest.lo)` is hashed with
///    the width-5 x^5 permutation (`hash_4`), capacity element zero
/// 3. The single output element is serialized as 32 big-endian bytes; it is
///    below the BN254 modulus and therefore below the secp256k1 order
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoseidonNonce;

impl NonceDerivation for PoseidonNonce {
    fn derive(&self, secret: &Secret, digest: &MessageDigest) -> Result<Nonce, RelationError> {
        let [secret_hi, secret_lo] = secret.halves();
        let [digest_hi, digest_lo] = digest.halves();
        let inputs = [secret_hi, secret_lo, digest_hi, digest_lo].map(u128::to_be_bytes);

        let mut hasher = Poseidon::<Fr>::new_circom(POSEIDON_INPUTS).map_err(poseidon_error)?;
        let output = hasher
            .hash_bytes_be(&inputs.each_ref().map(|half| half.as_slice()))
            .map_err(poseidon_error)?;
        Ok(Nonce::from_be_bytes(output))
    }
}

fn poseidon_error(err: PoseidonError) -> RelationError {
    warn!(%err, "poseidon hash failed");
    RelationError::NonceDerivation
}

/// Runtime selection of a nonce strategy.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonceStrategy {
    /// [`Sha256Nonce`]
    #[default]
    Sha256,
    /// [`PoseidonNonce`]
    Poseidon,
}

impl NonceDerivation for NonceStrategy {
    fn derive(&self, secret: &Secret, digest: &MessageDigest) -> Result<Nonce, RelationError> {
        match self {
            NonceStrategy::Sha256 => Sha256Nonce.derive(secret, digest),
            NonceStrategy::Poseidon => PoseidonNonce.derive(secret, digest),
        }
    }
}
