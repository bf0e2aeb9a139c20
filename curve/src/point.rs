// E(GF(p)) : y^2 = x^3 + 7 (secp256k1)
// p = 2^256 - 2^32 - 977
// Generator G = (0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798,
//                0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8)
// Curve prime order: 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
// Curve cofactor: 1

use crate::basefield::BaseField;
use crate::errors::CurveError;
use core::ops::{Add, AddAssign, Neg, Sub};
use serde::{Deserialize, Serialize};

/// Affine point on the elliptic curve, or the identity element.
///
/// The identity is its own variant rather than a reserved coordinate pair,
/// so `Point::Affine { x: 0, y: 0 }` is just an (off-curve) affine point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Point {
    /// The additive identity (point at infinity).
    Identity,
    /// A point with affine coordinates.
    Affine { x: BaseField, y: BaseField },
}

impl Point {
    /// The secp256k1 generator.
    pub const GENERATOR: Self = Point::Affine {
        x: BaseField::from_montgomery_limbs([
            0xd7362e5a487e2097,
            0x231e295329bc66db,
            0x979f48c033fd129c,
            0x9981e643e9089f48,
        ]),
        y: BaseField::from_montgomery_limbs([
            0xb15ea6d2d3dbabe2,
            0x8dfc5d5d1f1dc64d,
            0x70b6b59aac19c136,
            0xcf3f851fd4a582d6,
        ]),
    };

    /// Create a new affine point. The coordinates are not checked.
    pub fn new(x: BaseField, y: BaseField) -> Self {
        Point::Affine { x, y }
    }

    #[inline]
    pub fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine coordinates, `None` for the identity.
    #[inline]
    pub fn coordinates(&self) -> Option<(BaseField, BaseField)> {
        match *self {
            Point::Identity => None,
            Point::Affine { x, y } => Some((x, y)),
        }
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    pub fn is_on_curve(&self) -> bool {
        match *self {
            Point::Identity => true,
            Point::Affine { x, y } => y.square() == x.square() * x + BaseField::SEVEN,
        }
    }

    /// Parse little-endian coordinates. Coordinates `>= p` are rejected; curve
    /// membership is not checked.
    pub fn from_le_coordinates(x: &[u8; 32], y: &[u8; 32]) -> Option<Self> {
        Some(Point::new(BaseField::from_le_bytes(x)?, BaseField::from_le_bytes(y)?))
    }

    /// Little-endian coordinates, `None` for the identity.
    pub fn to_le_coordinates(&self) -> Option<([u8; 32], [u8; 32])> {
        self.coordinates()
            .map(|(x, y)| (x.to_le_bytes(), y.to_le_bytes()))
    }

    /// Point doubling: 2*P.
    ///
    /// slope = 3x^2 / 2y, x' = slope^2 - 2x, y' = slope(x - x') - y.
    pub fn double(&self) -> Result<Self, CurveError> {
        let (x, y) = match *self {
            Point::Identity => return Ok(Point::Identity),
            Point::Affine { x, y } => (x, y),
        };

        let numerator = BaseField::THREE * x.square();
        let denominator = BaseField::TWO * y;
        let slope = numerator
            .try_div(&denominator)
            .ok_or(CurveError::DegenerateDoubling)?;

        let x_r = slope.square() - x - x;
        let y_r = slope * (x - x_r) - y;

        Ok(Point::new(x_r, y_r))
    }

    /// Addition of two points with distinct x-coordinates.
    ///
    /// slope = (y0 - y1) / (x0 - x1), x' = slope^2 - x0 - x1,
    /// y' = slope(x0 - x') - y0. The identity is the unit on either side;
    /// equal x-coordinates (including `P + P`) are rejected.
    pub fn add_distinct(&self, other: &Self) -> Result<Self, CurveError> {
        let ((x0, y0), (x1, y1)) = match (*self, *other) {
            (Point::Identity, _) => return Ok(*other),
            (_, Point::Identity) => return Ok(*self),
            (Point::Affine { x: x0, y: y0 }, Point::Affine { x: x1, y: y1 }) => {
                ((x0, y0), (x1, y1))
            }
        };

        let slope = (y0 - y1)
            .try_div(&(x0 - x1))
            .ok_or(CurveError::DegenerateAddition)?;

        let x_r = slope.square() - x0 - x1;
        let y_r = slope * (x0 - x_r) - y0;

        Ok(Point::new(x_r, y_r))
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        match *self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::new(x, -y),
        }
    }
}

/// Complete group law on top of the strict formulas: equal points are
/// doubled, inverse points sum to the identity.
impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        match (self, other) {
            (Point::Affine { x: x0, y: y0 }, Point::Affine { x: x1, y: y1 }) if x0 == x1 => {
                if y0 == y1 {
                    // y = 0 points have order two
                    self.double().unwrap_or(Point::Identity)
                } else {
                    Point::Identity
                }
            }
            // distinct x-coordinates or an identity operand
            _ => self.add_distinct(&other).unwrap_or(Point::Identity),
        }
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use num_bigint::BigUint;

    pub(crate) fn fe(hex: &str) -> BaseField {
        let value = BigUint::parse_bytes(hex.as_bytes(), 16).expect("valid hex");
        let mut be = [0u8; 32];
        let raw = value.to_bytes_be();
        be[32 - raw.len()..].copy_from_slice(&raw);
        BaseField::from_be_bytes(&be).expect("canonical coordinate")
    }

    pub(crate) fn point(x: &str, y: &str) -> Point {
        Point::new(fe(x), fe(y))
    }

    pub(crate) fn two_g() -> Point {
        point(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        )
    }

    pub(crate) fn three_g() -> Point {
        point(
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        )
    }

    #[test]
    fn test_generator_constant() {
        let expected = point(
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
            "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8",
        );
        assert_eq!(Point::generator(), expected);
        assert!(Point::generator().is_on_curve());
        assert!(!Point::generator().is_identity());
    }

    #[test]
    fn test_identity() {
        let id = Point::Identity;
        assert!(id.is_identity());
        assert!(id.is_on_curve());
        assert_eq!(id.double(), Ok(Point::Identity));
        assert_eq!(id.coordinates(), None);
        assert_eq!(id.to_le_coordinates(), None);
    }

    #[test]
    fn test_zero_coordinates_are_not_identity() {
        let zero = Point::new(BaseField::ZERO, BaseField::ZERO);
        assert!(!zero.is_identity());
        assert!(!zero.is_on_curve());
        assert_ne!(zero, Point::Identity);
    }

    #[test]
    fn test_point_doubling() {
        let g = Point::generator();
        let g2 = g.double().expect("G has non-zero y");
        assert_eq!(g2, two_g());
        assert!(g2.is_on_curve());
        assert_eq!(g + g, g2);
    }

    #[test]
    fn test_point_addition() {
        let g = Point::generator();
        let g3 = g.add_distinct(&two_g()).expect("distinct x");
        assert_eq!(g3, three_g());
        assert_eq!(two_g().add_distinct(&g), Ok(three_g()));
    }

    #[test]
    fn test_addition_with_identity() {
        let g = Point::generator();
        assert_eq!(g.add_distinct(&Point::Identity), Ok(g));
        assert_eq!(Point::Identity.add_distinct(&g), Ok(g));
        assert_eq!(g + Point::Identity, g);
        assert_eq!(Point::Identity + Point::Identity, Point::Identity);
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        let g = Point::generator();
        assert_eq!(g.add_distinct(&g), Err(CurveError::DegenerateAddition));
        assert_eq!(
            g.add_distinct(&g.negate()),
            Err(CurveError::DegenerateAddition)
        );

        // Off-curve, but exercises the y = 0 guard
        let flat = Point::new(BaseField::ONE, BaseField::ZERO);
        assert_eq!(flat.double(), Err(CurveError::DegenerateDoubling));
    }

    #[test]
    fn test_point_negation() {
        let g = Point::generator();
        let neg_g = -g;
        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, Point::Identity);
        assert_eq!(three_g() - g, two_g());
    }

    #[test]
    fn test_le_coordinates_round_trip() {
        let g = Point::generator();
        let (x, y) = g.to_le_coordinates().expect("affine");
        assert_eq!(x[31], 0x79);
        assert_eq!(x[0], 0x98);
        assert_eq!(Point::from_le_coordinates(&x, &y), Some(g));
        assert_eq!(Point::from_le_coordinates(&[0xff; 32], &y), None);
    }
}
