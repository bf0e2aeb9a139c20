//! The aggregate point relation.
//!
//! ```text
//! nonce     = H(secret, digest)
//! aggregate = secret + nonce  (mod n)
//! assert aggregate * G == claimed
//! ```

use curve::{Point, ScalarField, mul_generator};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::RelationError;
use crate::inputs::{ClaimedPoint, MessageDigest, Nonce, Secret};
use crate::nonce::{NonceDerivation, NonceStrategy};

/// Outcome of a relation check. There is no partial match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

/// Every value the relation computes from `(secret, digest)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RelationOutput {
    pub nonce: Nonce,
    /// `secret + nonce (mod n)`
    pub aggregate: ScalarField,
    /// `aggregate * G`
    pub point: Point,
}

impl RelationOutput {
    /// The claimed point a prover publishes for these inputs, `None` when
    /// the aggregate scalar is zero.
    pub fn claimed_point(&self) -> Option<ClaimedPoint> {
        ClaimedPoint::from_point(&self.point)
    }
}

/// Checks the relation with a fixed nonce strategy.
///
/// The checker holds no state besides the strategy, so one instance can be
/// shared across threads and reused for any number of checks.
#[derive(Copy, Clone, Debug, Default)]
pub struct RelationChecker<N = NonceStrategy> {
    nonce: N,
}

impl<N: NonceDerivation> RelationChecker<N> {
    pub fn new(nonce: N) -> Self {
        Self { nonce }
    }

    pub fn strategy(&self) -> &N {
        &self.nonce
    }

    /// Computes the nonce, the aggregate scalar and the aggregate point.
    ///
    /// # Errors
    ///
    /// - [`RelationError::NonceDerivation`] if the nonce hash fails
    /// - [`RelationError::NonCanonicalSecret`] if the secret is not below n
    /// - [`RelationError::Curve`] if the ladder hits a degenerate division
    pub fn compute(
        &self,
        secret: &Secret,
        digest: &MessageDigest,
    ) -> Result<RelationOutput, RelationError> {
        let nonce = self.nonce.derive(secret, digest)?;

        let secret_scalar = ScalarField::from_be_bytes(secret.as_be_bytes())
            .ok_or(RelationError::NonCanonicalSecret)?;
        // Hash outputs are reduced rather than rejected
        let nonce_scalar = ScalarField::from_be_bytes_reduced(nonce.as_be_bytes());
        let aggregate = secret_scalar + nonce_scalar;

        let point = mul_generator(&aggregate).inspect_err(|err| {
            warn!(?err, "aggregate scalar multiplication failed");
        })?;
        trace!(?point, "computed aggregate point");

        Ok(RelationOutput {
            nonce,
            aggregate,
            point,
        })
    }

    /// Checks `(secret + H(secret, digest)) * G == claimed`.
    ///
    /// A claimed point with a coordinate at or above the field prime, or one
    /// that is not on the curve, can never match and yields
    /// [`Verdict::Fail`].
    pub fn check(
        &self,
        secret: &Secret,
        digest: &MessageDigest,
        claimed: &ClaimedPoint,
    ) -> Result<Verdict, RelationError> {
        let output = self.compute(secret, digest)?;

        let verdict = match claimed.to_point() {
            None => {
                debug!("claimed point has a non-canonical coordinate");
                Verdict::Fail
            }
            Some(point) if !point.is_on_curve() => {
                debug!(?claimed, "claimed point is not on the curve");
                Verdict::Fail
            }
            Some(point) if point == output.point => Verdict::Pass,
            Some(_) => Verdict::Fail,
        };

        debug!(?verdict, "relation checked");
        Ok(verdict)
    }
}

/// One-shot relation check with the given strategy.
pub fn check_relation<N: NonceDerivation>(
    nonce: N,
    secret: &Secret,
    digest: &MessageDigest,
    claimed: &ClaimedPoint,
) -> Result<Verdict, RelationError> {
    RelationChecker::new(nonce).check(secret, digest, claimed)
}
