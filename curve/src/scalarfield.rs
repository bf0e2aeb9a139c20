//! Scalar field of secp256k1. n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! This implementation uses Montgomery form for efficient modular arithmetic.
//! The field element is represented as [u64; 4] in little-endian order.
//!
//! Wire encodings are big-endian; conversions reverse the 32-byte buffer and
//! interpret it little-endian.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, Neg, Sub};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::limbs::{
    add_mod, is_canonical, is_zero, limbs_from_le_bytes, limbs_to_le_bytes, montgomery_mul,
    montgomery_pow, neg_mod, reversed, sub_mod, sub_raw, Limbs,
};

/// Number of bits in a scalar, and iterations of the scalar multiplication ladder.
pub const SCALAR_BITS: usize = 256;

/// Scalar field element for the curve
/// Represented in Montgomery form with [u64; 4]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScalarField {
    /// Montgomery form: value * R mod n, where R = 2^256
    limbs: Limbs,
}

// Group order: n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
const MODULUS: Limbs = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

// R = 2^256 mod n (Montgomery parameter)
const R: Limbs = [
    0x402da1732fc9bebf,
    0x4551231950b75fc4,
    0x0000000000000001,
    0x0000000000000000,
];

// R^2 = 2^512 mod n (for Montgomery conversion)
const R2: Limbs = [
    0x896cf21467d7d140,
    0x741496c20e7cf878,
    0xe697f5e45bcd07c6,
    0x9d671cd581c69bc5,
];

// -n^{-1} mod 2^64 (Montgomery parameter mu)
const MU: u64 = 0x4b0dff665588b13f;

impl ScalarField {
    /// Zero element (in Montgomery form)
    pub const ZERO: Self = ScalarField {
        limbs: [0, 0, 0, 0],
    };

    /// One element (in Montgomery form: R mod n)
    pub const ONE: Self = ScalarField { limbs: R };

    /// Create a new scalar field element from a u64 value
    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// Create an element from canonical little-endian limbs. The caller must
    /// guarantee `limbs < n`.
    #[inline]
    pub fn from_canonical_limbs(limbs: Limbs) -> Self {
        debug_assert!(is_canonical(limbs, MODULUS));
        ScalarField {
            limbs: montgomery_mul(&limbs, &R2, &MODULUS, MU),
        }
    }

    /// Convert from Montgomery form to canonical little-endian limbs
    #[inline]
    pub fn to_canonical_limbs(&self) -> Limbs {
        montgomery_mul(&self.limbs, &[1, 0, 0, 0], &MODULUS, MU)
    }

    /// Parse a canonical little-endian encoding. Values `>= n` are rejected.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = limbs_from_le_bytes(bytes);
        is_canonical(limbs, MODULUS).then(|| Self::from_canonical_limbs(limbs))
    }

    /// Parse a canonical big-endian encoding. Values `>= n` are rejected.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_le_bytes(&reversed(bytes))
    }

    /// Interpret any big-endian 256-bit value modulo n.
    ///
    /// Since 2^256 < 2n a single conditional subtraction is enough.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        let limbs = limbs_from_le_bytes(&reversed(bytes));
        let (reduced, borrow) = sub_raw(limbs, MODULUS);
        if borrow {
            Self::from_canonical_limbs(limbs)
        } else {
            Self::from_canonical_limbs(reduced)
        }
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        limbs_to_le_bytes(&self.to_canonical_limbs())
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        reversed(&self.to_le_bytes())
    }

    /// Fixed-width bit decomposition, least significant bit first.
    ///
    /// Always yields [`SCALAR_BITS`] entries regardless of the value.
    pub fn to_bits_le(&self) -> [bool; SCALAR_BITS] {
        let canonical = self.to_canonical_limbs();
        let mut bits = [false; SCALAR_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = (canonical[i / 64] >> (i % 64)) & 1 == 1;
        }
        bits
    }

    /// The group order n.
    pub fn order() -> BigUint {
        BigUint::from_bytes_le(&limbs_to_le_bytes(&MODULUS))
    }

    /// The group order n as little-endian 64-bit limbs.
    pub const fn order_limbs() -> [u64; 4] {
        MODULUS
    }

    pub fn as_canonical_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }

    /// Check if this field element is zero
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(self.limbs)
    }

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exp = sub_raw(MODULUS, [2, 0, 0, 0]).0;
        Some(ScalarField {
            limbs: montgomery_pow(&self.limbs, &exp, &R, &MODULUS, MU),
        })
    }
}

impl Add for ScalarField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        ScalarField {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl AddAssign for ScalarField {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for ScalarField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        ScalarField {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl Neg for ScalarField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        ScalarField {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for ScalarField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        ScalarField {
            limbs: montgomery_mul(&self.limbs, &rhs.limbs, &MODULUS, MU),
        }
    }
}

impl Distribution<ScalarField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ScalarField {
        // Rejection rate is about 2^-128
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(scalar) = ScalarField::from_le_bytes(&bytes) {
                return scalar;
            }
        }
    }
}

// Display and Debug
impl Display for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for ScalarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ScalarField({})", self)
    }
}
