//! Wire types consumed and produced by the relation.

use core::fmt;

use curve::Point;
use serde::{Deserialize, Serialize};

use crate::constants::{COORDINATE_SIZE, DIGEST_SIZE, NONCE_SIZE, SECRET_SIZE};

/// Splits a big-endian 256-bit value into its `(hi, lo)` 128-bit halves.
fn split_halves(bytes: &[u8; 32]) -> [u128; 2] {
    let mut hi = [0u8; 16];
    let mut lo = [0u8; 16];
    hi.copy_from_slice(&bytes[..16]);
    lo.copy_from_slice(&bytes[16..]);
    [u128::from_be_bytes(hi), u128::from_be_bytes(lo)]
}

fn join_halves(hi: u128, lo: u128) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(&hi.to_be_bytes());
    bytes[16..].copy_from_slice(&lo.to_be_bytes());
    bytes
}

/// The signer's private scalar, as 32 big-endian bytes.
///
/// The encoding must be below the group order for the relation to be
/// evaluated; this is checked by [`crate::RelationChecker`], not here.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Secret([u8; SECRET_SIZE]);

impl Secret {
    pub fn from_be_bytes(bytes: [u8; SECRET_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_be_bytes(&self) -> &[u8; SECRET_SIZE] {
        &self.0
    }

    /// The `(hi, lo)` 128-bit halves of the big-endian value.
    pub fn halves(&self) -> [u128; 2] {
        split_halves(&self.0)
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([REDACTED])")
    }
}

/// Digest of the message being signed, as 32 big-endian bytes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageDigest([u8; DIGEST_SIZE]);

impl MessageDigest {
    pub fn from_be_bytes(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }

    /// Rebuild a digest from the two 128-bit field halves used by the
    /// algebraic strategy.
    pub fn from_halves(hi: u128, lo: u128) -> Self {
        Self(join_halves(hi, lo))
    }

    pub fn as_be_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// The `(hi, lo)` 128-bit halves of the big-endian value.
    pub fn halves(&self) -> [u128; 2] {
        split_halves(&self.0)
    }
}

/// A deterministic nonce, as 32 big-endian bytes.
#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    pub fn from_be_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_be_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Nonce([REDACTED])")
    }
}

/// Externally supplied aggregate point, coordinates little-endian.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimedPoint {
    pub x: [u8; COORDINATE_SIZE],
    pub y: [u8; COORDINATE_SIZE],
}

impl ClaimedPoint {
    pub fn new(x: [u8; COORDINATE_SIZE], y: [u8; COORDINATE_SIZE]) -> Self {
        Self { x, y }
    }

    /// Encode an affine point. The identity has no coordinates and yields `None`.
    pub fn from_point(point: &Point) -> Option<Self> {
        point.to_le_coordinates().map(|(x, y)| Self { x, y })
    }

    /// Parse the coordinates. `None` if either is not below the field prime;
    /// curve membership is left to the caller.
    pub fn to_point(&self) -> Option<Point> {
        Point::from_le_coordinates(&self.x, &self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halves_are_big_endian() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xaa;
        bytes[15] = 0x01;
        bytes[16] = 0xbb;
        bytes[31] = 0x02;
        let digest = MessageDigest::from_be_bytes(bytes);
        let [hi, lo] = digest.halves();
        assert_eq!(hi, (0xaa << 120) | 0x01);
        assert_eq!(lo, (0xbb << 120) | 0x02);
        assert_eq!(MessageDigest::from_halves(hi, lo), digest);
        assert_eq!(Secret::from_be_bytes(bytes).halves(), [hi, lo]);
    }

    #[test]
    fn test_secret_debug_is_redacted() {
        let secret = Secret::from_be_bytes([0x42; 32]);
        assert_eq!(format!("{secret:?}"), "Secret([REDACTED])");
    }

    #[test]
    fn test_claimed_point_round_trip() {
        let g = Point::generator();
        let claimed = ClaimedPoint::from_point(&g).expect("affine");
        assert_eq!(claimed.to_point(), Some(g));
        assert_eq!(ClaimedPoint::from_point(&Point::Identity), None);
        assert_eq!(ClaimedPoint::new([0xff; 32], claimed.y).to_point(), None);
    }
}
