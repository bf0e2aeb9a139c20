//! Constants used by the relation inputs and the nonce strategies.

/// Size of a serialized secret scalar in bytes (big-endian).
pub const SECRET_SIZE: usize = 32;

/// Size of a message digest in bytes (big-endian).
pub const DIGEST_SIZE: usize = 32;

/// Size of a derived nonce in bytes (big-endian).
pub const NONCE_SIZE: usize = 32;

/// Size of one claimed point coordinate in bytes (little-endian).
pub const COORDINATE_SIZE: usize = 32;

/// Field elements hashed by the algebraic strategy: two 128-bit halves each
/// of the secret and the digest.
pub(crate) const POSEIDON_INPUTS: usize = 4;
