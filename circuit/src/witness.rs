//! Witness data for one relation check.

use curve::{ScalarField, LADDER_BITS};
use relation::{ClaimedPoint, MessageDigest, NonceDerivation, RelationError, Secret};

/// Every intermediate value of one relation check.
///
/// The secret and nonce scalars are private; the claimed point is public.
#[derive(Clone, Debug)]
pub struct RelationWitness {
    pub secret: ScalarField,
    /// The derived nonce, reduced modulo n
    pub nonce: ScalarField,
    /// `secret + nonce (mod n)`
    pub aggregate: ScalarField,
    /// Bits of the aggregate, least significant first
    pub bits: [bool; LADDER_BITS],
    pub claimed: ClaimedPoint,
}

impl RelationWitness {
    /// Derive the witness with the given nonce strategy.
    ///
    /// Only the scalars are computed here; the aggregate point is left to the
    /// ladder trace.
    pub fn new<N: NonceDerivation>(
        nonce: N,
        secret: &Secret,
        digest: &MessageDigest,
        claimed: &ClaimedPoint,
    ) -> Result<Self, RelationError> {
        let derived = nonce.derive(secret, digest)?;
        let secret_scalar = ScalarField::from_be_bytes(secret.as_be_bytes())
            .ok_or(RelationError::NonCanonicalSecret)?;
        let nonce_scalar = ScalarField::from_be_bytes_reduced(derived.as_be_bytes());
        let aggregate = secret_scalar + nonce_scalar;

        Ok(Self {
            secret: secret_scalar,
            nonce: nonce_scalar,
            aggregate,
            bits: aggregate.to_bits_le(),
            claimed: *claimed,
        })
    }
}
