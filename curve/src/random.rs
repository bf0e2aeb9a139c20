use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{BaseField, ScalarField};

/// Uniform sampling of canonical field elements.
pub trait RandomField: Sized + PartialEq {
    const ZERO: Self;

    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Resample until the element is non-zero.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let candidate = Self::random(rng);
            if candidate != Self::ZERO {
                return candidate;
            }
        }
    }
}

macro_rules! impl_random_field {
    ($field:ty) => {
        impl RandomField for $field {
            const ZERO: Self = <$field>::ZERO;

            #[inline]
            fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                StandardUniform.sample(rng)
            }
        }
    };
}

impl_random_field!(BaseField);
impl_random_field!(ScalarField);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_samples_are_canonical_and_distinct() {
        let mut rng = StdRng::seed_from_u64(11);
        let a = ScalarField::random_nonzero(&mut rng);
        let b = ScalarField::random_nonzero(&mut rng);
        assert_ne!(a, b);
        assert!(a.as_canonical_biguint() < ScalarField::order());

        let x = BaseField::random(&mut rng);
        assert!(x.as_canonical_biguint() < BaseField::order());
    }
}
