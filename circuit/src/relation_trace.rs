//! The full relation as a fixed-shape trace: the scalar addition witness
//! followed by the generator ladder over the aggregate's bits.

use curve::{BaseField, Point, ScalarField};
use relation::{ClaimedPoint, Verdict};
use tracing::debug;

use crate::errors::TraceError;
use crate::ladder_trace::{
    build_ladder_trace, verify_ladder_trace, LadderTrace, BIT_COL, NUM_COLUMNS,
};
use crate::scalar_arithmetic::ScalarAddWitness;
use crate::witness::RelationWitness;

#[derive(Clone, Debug)]
pub struct RelationTrace {
    pub scalar_add: ScalarAddWitness,
    pub ladder: LadderTrace,
}

pub fn build_relation_trace(witness: &RelationWitness) -> Result<RelationTrace, TraceError> {
    let scalar_add = ScalarAddWitness::new(&witness.secret, &witness.nonce);
    let ladder = build_ladder_trace(&Point::generator(), &witness.bits)?;
    Ok(RelationTrace { scalar_add, ladder })
}

/// Checks the trace's internal consistency, then compares its output with
/// the claimed point.
///
/// A malformed trace is an error. A well-formed trace whose output differs
/// from `claimed`, or a claimed point that is non-canonical or off the curve,
/// yields [`Verdict::Fail`].
pub fn verify_relation_trace(
    trace: &RelationTrace,
    claimed: &ClaimedPoint,
) -> Result<Verdict, TraceError> {
    trace.scalar_add.verify()?;
    let aggregate = trace
        .scalar_add
        .output()
        .ok_or(TraceError::ScalarAddition("c_canonical"))?;

    verify_ladder_trace(&trace.ladder, &Point::generator(), &trace.ladder.output)?;
    check_bit_column(&trace.ladder, &aggregate)?;

    let verdict = match claimed.to_point() {
        Some(point) if point.is_on_curve() && point == trace.ladder.output => Verdict::Pass,
        _ => Verdict::Fail,
    };
    debug!(?verdict, "relation trace checked");
    Ok(verdict)
}

/// The ladder must consume exactly the bits of the witnessed sum.
fn check_bit_column(ladder: &LadderTrace, aggregate: &ScalarField) -> Result<(), TraceError> {
    let rows = ladder.trace.values.chunks_exact(NUM_COLUMNS);
    for (index, (row, bit)) in rows.zip(aggregate.to_bits_le()).enumerate() {
        let expected = if bit { BaseField::ONE } else { BaseField::ZERO };
        if row[BIT_COL] != expected {
            return Err(TraceError::Constraint {
                row: index,
                constraint: "bit_decomposition",
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relation::{MessageDigest, NonceStrategy, RelationChecker, RelationError, Secret};

    fn inputs(seed: u8) -> (Secret, MessageDigest) {
        let mut secret = [0u8; 32];
        secret[1..].fill(seed);
        (
            Secret::from_be_bytes(secret),
            MessageDigest::from_be_bytes([seed.wrapping_mul(3); 32]),
        )
    }

    fn honest_claim(
        strategy: NonceStrategy,
        secret: &Secret,
        digest: &MessageDigest,
    ) -> ClaimedPoint {
        RelationChecker::new(strategy)
            .compute(secret, digest)
            .expect("compute")
            .claimed_point()
            .expect("affine")
    }

    #[test]
    fn test_trace_agrees_with_checker() {
        for strategy in [NonceStrategy::Sha256, NonceStrategy::Poseidon] {
            let (secret, digest) = inputs(0x5c);
            let claimed = honest_claim(strategy, &secret, &digest);
            let output = RelationChecker::new(strategy)
                .compute(&secret, &digest)
                .expect("compute");

            let witness =
                RelationWitness::new(strategy, &secret, &digest, &claimed).expect("witness");
            assert_eq!(witness.aggregate, output.aggregate);
            assert_eq!(
                witness.nonce,
                ScalarField::from_be_bytes_reduced(output.nonce.as_be_bytes())
            );
            assert_eq!(witness.secret + witness.nonce, witness.aggregate);

            let trace = build_relation_trace(&witness).expect("trace");
            assert_eq!(trace.ladder.output, output.point);
            assert_eq!(verify_relation_trace(&trace, &witness.claimed), Ok(Verdict::Pass));
        }
    }

    #[test]
    fn test_wrong_claim_fails() {
        let (secret, digest) = inputs(0x21);
        let mut claimed = honest_claim(NonceStrategy::Sha256, &secret, &digest);
        let witness = RelationWitness::new(NonceStrategy::Sha256, &secret, &digest, &claimed)
            .expect("witness");
        let trace = build_relation_trace(&witness).expect("trace");

        claimed.y[0] ^= 1;
        assert_eq!(verify_relation_trace(&trace, &claimed), Ok(Verdict::Fail));
        let off_curve = ClaimedPoint::new([0; 32], [0; 32]);
        assert_eq!(verify_relation_trace(&trace, &off_curve), Ok(Verdict::Fail));
    }

    #[test]
    fn test_swapped_bits_are_detected() {
        let (secret, digest) = inputs(0x44);
        let claimed = honest_claim(NonceStrategy::Sha256, &secret, &digest);
        let witness = RelationWitness::new(NonceStrategy::Sha256, &secret, &digest, &claimed)
            .expect("witness");

        // A valid ladder over a different scalar does not match the sum
        let mut forged = witness.clone();
        forged.bits = (witness.aggregate + ScalarField::ONE).to_bits_le();
        let trace = build_relation_trace(&forged).expect("trace");
        assert!(matches!(
            verify_relation_trace(&trace, &claimed),
            Err(TraceError::Constraint {
                constraint: "bit_decomposition",
                ..
            })
        ));
    }

    #[test]
    fn test_tampered_scalar_addition_is_detected() {
        let (secret, digest) = inputs(0x07);
        let claimed = honest_claim(NonceStrategy::Poseidon, &secret, &digest);
        let witness = RelationWitness::new(NonceStrategy::Poseidon, &secret, &digest, &claimed)
            .expect("witness");
        let mut trace = build_relation_trace(&witness).expect("trace");
        trace.scalar_add.b[1] ^= 1 << 9;
        assert!(matches!(
            verify_relation_trace(&trace, &claimed),
            Err(TraceError::ScalarAddition(_))
        ));
    }

    #[test]
    fn test_non_canonical_secret_has_no_witness() {
        let (_, digest) = inputs(1);
        let secret = Secret::from_be_bytes([0xff; 32]);
        let claimed = ClaimedPoint::new([0; 32], [0; 32]);
        assert_eq!(
            RelationWitness::new(NonceStrategy::Sha256, &secret, &digest, &claimed).err(),
            Some(RelationError::NonCanonicalSecret)
        );
    }
}
