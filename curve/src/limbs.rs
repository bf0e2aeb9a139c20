//! 256-bit modular arithmetic over four little-endian `u64` limbs.
//!
//! Both secp256k1 moduli use the full 256 bits, so every routine here keeps
//! the carry out of the top limb instead of assuming headroom.

pub(crate) type Limbs = [u64; 4];

/// Helper: Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Helper: Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Computes `a + b * c + carry`, returned as (low, high) words.
#[inline(always)]
const fn mac(a: u64, b: u64, c: u64, carry: u64) -> (u64, u64) {
    let wide = (a as u128) + (b as u128) * (c as u128) + (carry as u128);
    (wide as u64, (wide >> 64) as u64)
}

#[inline]
pub(crate) const fn add_raw(a: Limbs, b: Limbs) -> (Limbs, bool) {
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, carry) = carrying_add(a[3], b[3], carry);
    ([r0, r1, r2, r3], carry)
}

#[inline]
pub(crate) const fn sub_raw(a: Limbs, b: Limbs) -> (Limbs, bool) {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);
    ([r0, r1, r2, r3], borrow)
}

/// `(a + b) mod m` for `a, b < m`.
#[inline]
pub(crate) const fn add_mod(a: Limbs, b: Limbs, modulus: Limbs) -> Limbs {
    let (sum, carry) = add_raw(a, b);
    let (reduced, borrow) = sub_raw(sum, modulus);

    // The sum left 256 bits or is still >= m
    if carry || !borrow {
        reduced
    } else {
        sum
    }
}

/// `(a - b) mod m` for `a, b < m`.
#[inline]
pub(crate) const fn sub_mod(a: Limbs, b: Limbs, modulus: Limbs) -> Limbs {
    let (diff, borrow) = sub_raw(a, b);
    if borrow {
        add_raw(diff, modulus).0
    } else {
        diff
    }
}

#[inline]
pub(crate) const fn neg_mod(a: Limbs, modulus: Limbs) -> Limbs {
    if is_zero(a) {
        return [0, 0, 0, 0];
    }
    sub_mod(modulus, a, modulus)
}

#[inline]
pub(crate) const fn is_zero(a: Limbs) -> bool {
    a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0
}

/// Returns true when `limbs < modulus`.
#[inline]
pub(crate) const fn is_canonical(limbs: Limbs, modulus: Limbs) -> bool {
    sub_raw(limbs, modulus).1
}

/// Montgomery multiplication: `a * b * 2^-256 mod m` (CIOS).
///
/// `mu` is `-m^{-1} mod 2^64`. Inputs must be `< m`.
pub(crate) fn montgomery_mul(a: &Limbs, b: &Limbs, modulus: &Limbs, mu: u64) -> Limbs {
    // t[4] and t[5] hold the bits above 2^256; t stays below 2m.
    let mut t = [0u64; 6];

    for i in 0..4 {
        let mut carry = 0u64;
        for j in 0..4 {
            let (lo, hi) = mac(t[j], a[j], b[i], carry);
            t[j] = lo;
            carry = hi;
        }
        let (top, overflow) = t[4].overflowing_add(carry);
        t[4] = top;
        t[5] = overflow as u64;

        let k = t[0].wrapping_mul(mu);
        let (_, mut carry) = mac(t[0], k, modulus[0], 0);
        for j in 1..4 {
            let (lo, hi) = mac(t[j], k, modulus[j], carry);
            t[j - 1] = lo;
            carry = hi;
        }
        let (top, overflow) = t[4].overflowing_add(carry);
        t[3] = top;
        t[4] = t[5] + overflow as u64;
    }

    let result = [t[0], t[1], t[2], t[3]];
    let (reduced, borrow) = sub_raw(result, *modulus);
    if t[4] != 0 || !borrow {
        reduced
    } else {
        result
    }
}

/// Square-and-multiply over a fixed 256-bit exponent, least significant bit first.
pub(crate) fn montgomery_pow(
    base: &Limbs,
    exp: &Limbs,
    one: &Limbs,
    modulus: &Limbs,
    mu: u64,
) -> Limbs {
    let mut result = *one;
    let mut base = *base;

    for &limb in exp.iter() {
        let mut remaining = limb;
        for _ in 0..64 {
            if remaining & 1 == 1 {
                result = montgomery_mul(&result, &base, modulus, mu);
            }
            base = montgomery_mul(&base, &base, modulus, mu);
            remaining >>= 1;
        }
    }

    result
}

#[inline]
pub(crate) fn limbs_from_le_bytes(bytes: &[u8; 32]) -> Limbs {
    let mut limbs = [0u64; 4];
    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }
    limbs
}

#[inline]
pub(crate) fn limbs_to_le_bytes(limbs: &Limbs) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (chunk, limb) in bytes.chunks_exact_mut(8).zip(limbs.iter()) {
        chunk.copy_from_slice(&limb.to_le_bytes());
    }
    bytes
}

#[inline]
pub(crate) fn reversed(bytes: &[u8; 32]) -> [u8; 32] {
    let mut out = *bytes;
    out.reverse();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Limbs = [
        0xfffffffefffffc2f,
        0xffffffffffffffff,
        0xffffffffffffffff,
        0xffffffffffffffff,
    ];

    #[test]
    fn test_add_mod_wraps_past_256_bits() {
        let p_minus_one = sub_raw(P, [1, 0, 0, 0]).0;
        // (p - 1) + (p - 1) = p - 2 (mod p), and the raw sum overflows 2^256
        let sum = add_mod(p_minus_one, p_minus_one, P);
        assert_eq!(sum, sub_raw(P, [2, 0, 0, 0]).0);
    }

    #[test]
    fn test_sub_mod_borrows() {
        let diff = sub_mod([1, 0, 0, 0], [2, 0, 0, 0], P);
        assert_eq!(diff, sub_raw(P, [1, 0, 0, 0]).0);
    }

    #[test]
    fn test_canonical_boundary() {
        assert!(is_canonical(sub_raw(P, [1, 0, 0, 0]).0, P));
        assert!(!is_canonical(P, P));
        assert!(!is_canonical([u64::MAX; 4], P));
    }

    #[test]
    fn test_byte_round_trip() {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let limbs = limbs_from_le_bytes(&bytes);
        assert_eq!(limbs[0], 0x0706050403020100);
        assert_eq!(limbs_to_le_bytes(&limbs), bytes);
        assert_eq!(reversed(&reversed(&bytes)), bytes);
    }
}
