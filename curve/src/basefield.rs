//! Coordinate field of secp256k1. p = 2^256 - 2^32 - 977
//!
//! Same Montgomery layout as [`crate::ScalarField`]; only the constants differ.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Mul, Neg, Sub};
use num_bigint::BigUint;
use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::limbs::{
    add_mod, is_canonical, is_zero, limbs_from_le_bytes, limbs_to_le_bytes, montgomery_mul,
    montgomery_pow, neg_mod, reversed, sub_mod, sub_raw, Limbs,
};

/// Element of the secp256k1 base field, in Montgomery form.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct BaseField {
    limbs: Limbs,
}

// p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
const MODULUS: Limbs = [
    0xfffffffefffffc2f,
    0xffffffffffffffff,
    0xffffffffffffffff,
    0xffffffffffffffff,
];

// R = 2^256 mod p
const R: Limbs = [0x00000001000003d1, 0, 0, 0];

// R^2 = 2^512 mod p
const R2: Limbs = [0x000007a2000e90a1, 0x0000000000000001, 0, 0];

// -p^{-1} mod 2^64
const MU: u64 = 0xd838091dd2253531;

impl BaseField {
    pub const ZERO: Self = BaseField { limbs: [0, 0, 0, 0] };

    pub const ONE: Self = BaseField { limbs: R };

    /// 2 in Montgomery form, used by the doubling slope.
    pub const TWO: Self = BaseField {
        limbs: [0x00000002000007a2, 0, 0, 0],
    };

    /// 3 in Montgomery form, used by the doubling slope.
    pub const THREE: Self = BaseField {
        limbs: [0x0000000300000b73, 0, 0, 0],
    };

    /// Curve coefficient b = 7 in Montgomery form.
    pub const SEVEN: Self = BaseField {
        limbs: [0x0000000700001ab7, 0, 0, 0],
    };

    /// Wrap limbs that are already in Montgomery form.
    #[inline]
    pub(crate) const fn from_montgomery_limbs(limbs: Limbs) -> Self {
        BaseField { limbs }
    }

    #[inline]
    pub fn from_canonical_u64(val: u64) -> Self {
        Self::from_canonical_limbs([val, 0, 0, 0])
    }

    /// The caller must guarantee `limbs < p`.
    #[inline]
    pub fn from_canonical_limbs(limbs: Limbs) -> Self {
        debug_assert!(is_canonical(limbs, MODULUS));
        BaseField {
            limbs: montgomery_mul(&limbs, &R2, &MODULUS, MU),
        }
    }

    #[inline]
    pub fn to_canonical_limbs(&self) -> Limbs {
        montgomery_mul(&self.limbs, &[1, 0, 0, 0], &MODULUS, MU)
    }

    /// Parse a canonical little-endian encoding. Values `>= p` are rejected.
    pub fn from_le_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = limbs_from_le_bytes(bytes);
        is_canonical(limbs, MODULUS).then(|| Self::from_canonical_limbs(limbs))
    }

    pub fn from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        Self::from_le_bytes(&reversed(bytes))
    }

    pub fn to_le_bytes(&self) -> [u8; 32] {
        limbs_to_le_bytes(&self.to_canonical_limbs())
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        reversed(&self.to_le_bytes())
    }

    /// The field prime p.
    pub fn order() -> BigUint {
        BigUint::from_bytes_le(&limbs_to_le_bytes(&MODULUS))
    }

    pub fn as_canonical_biguint(&self) -> BigUint {
        BigUint::from_bytes_le(&self.to_le_bytes())
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(self.limbs)
    }

    #[inline]
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplicative inverse via Fermat's little theorem, `None` for zero.
    pub fn try_inverse(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }
        let exp = sub_raw(MODULUS, [2, 0, 0, 0]).0;
        Some(BaseField {
            limbs: montgomery_pow(&self.limbs, &exp, &R, &MODULUS, MU),
        })
    }

    /// `self / rhs`, `None` when `rhs` is zero.
    #[inline]
    pub fn try_div(&self, rhs: &Self) -> Option<Self> {
        rhs.try_inverse().map(|inv| *self * inv)
    }
}

impl Add for BaseField {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        BaseField {
            limbs: add_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl Sub for BaseField {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        BaseField {
            limbs: sub_mod(self.limbs, rhs.limbs, MODULUS),
        }
    }
}

impl Neg for BaseField {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        BaseField {
            limbs: neg_mod(self.limbs, MODULUS),
        }
    }
}

impl Mul for BaseField {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        BaseField {
            limbs: montgomery_mul(&self.limbs, &rhs.limbs, &MODULUS, MU),
        }
    }
}

impl Distribution<BaseField> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BaseField {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(element) = BaseField::from_le_bytes(&bytes) {
                return element;
            }
        }
    }
}

impl Display for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let canonical = self.to_canonical_limbs();
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            canonical[3], canonical[2], canonical[1], canonical[0]
        )
    }
}

impl Debug for BaseField {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BaseField({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_small_constants() {
        assert_eq!(BaseField::from_canonical_u64(1), BaseField::ONE);
        assert_eq!(BaseField::from_canonical_u64(2), BaseField::TWO);
        assert_eq!(BaseField::from_canonical_u64(3), BaseField::THREE);
        assert_eq!(BaseField::from_canonical_u64(7), BaseField::SEVEN);
        assert_eq!(BaseField::ONE + BaseField::ONE, BaseField::TWO);
    }

    #[test]
    fn test_division() {
        let a = BaseField::from_canonical_u64(42);
        let b = BaseField::from_canonical_u64(6);
        assert_eq!(a.try_div(&b), Some(BaseField::from_canonical_u64(7)));
        assert_eq!(a.try_div(&BaseField::ZERO), None);
        assert_eq!(BaseField::ZERO.try_div(&BaseField::ZERO), None);
    }

    #[test]
    fn test_negation_wraps() {
        let one = BaseField::ONE;
        let minus_one = -one;
        assert_eq!(minus_one + one, BaseField::ZERO);
        assert_eq!(
            minus_one.as_canonical_biguint(),
            BaseField::order() - BigUint::from(1u32)
        );
    }

    #[test]
    fn test_rejects_non_canonical_coordinates() {
        let p = limbs_to_le_bytes(&MODULUS);
        assert!(BaseField::from_le_bytes(&p).is_none());
        assert!(BaseField::from_le_bytes(&[0xff; 32]).is_none());

        let p_minus_one = limbs_to_le_bytes(&sub_raw(MODULUS, [1, 0, 0, 0]).0);
        assert_eq!(BaseField::from_le_bytes(&p_minus_one), Some(-BaseField::ONE));
    }

    #[test]
    fn test_matches_biguint_arithmetic() {
        let mut rng = StdRng::seed_from_u64(1337);
        let p = BaseField::order();
        for _ in 0..128 {
            let a: BaseField = StandardUniform.sample(&mut rng);
            let b: BaseField = StandardUniform.sample(&mut rng);
            let (ba, bb) = (a.as_canonical_biguint(), b.as_canonical_biguint());
            assert_eq!((a + b).as_canonical_biguint(), (&ba + &bb) % &p);
            assert_eq!((a * b).as_canonical_biguint(), (&ba * &bb) % &p);
            assert_eq!((a - b).as_canonical_biguint(), (&ba + &p - &bb) % &p);
            match a.try_div(&b) {
                Some(quotient) => assert_eq!(quotient * b, a),
                None => assert!(b.is_zero()),
            }
        }
    }

    #[test]
    fn test_byte_orders_are_mirrors() {
        let x = BaseField::from_canonical_u64(0x0102030405060708);
        let le = x.to_le_bytes();
        let be = x.to_be_bytes();
        assert_eq!(le[0], 0x08);
        assert_eq!(be[31], 0x08);
        assert_eq!(BaseField::from_be_bytes(&be), Some(x));
        assert_eq!(BaseField::from_le_bytes(&le), Some(x));
    }
}
