//! Builds the relation trace for a random secret and checks it natively.

use circuit::{build_relation_trace, verify_relation_trace, RelationWitness, NUM_COLUMNS};
use curve::{RandomField, ScalarField};
use p3_matrix::Matrix;
use relation::{MessageDigest, NonceStrategy, RelationChecker, Secret};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = rand::rng();
    let secret = Secret::from_be_bytes(ScalarField::random(&mut rng).to_be_bytes());
    let digest = MessageDigest::from_be_bytes(ScalarField::random(&mut rng).to_be_bytes());

    for strategy in [NonceStrategy::Sha256, NonceStrategy::Poseidon] {
        let claimed = RelationChecker::new(strategy)
            .compute(&secret, &digest)
            .expect("compute")
            .claimed_point()
            .expect("affine");
        let witness = RelationWitness::new(strategy, &secret, &digest, &claimed).expect("witness");

        let start = Instant::now();
        let trace = build_relation_trace(&witness).expect("trace");
        let build_time = start.elapsed();

        let start = Instant::now();
        let verdict = verify_relation_trace(&trace, &claimed).expect("verify");
        let verify_time = start.elapsed();

        let height = trace.ladder.trace.height();
        println!(
            "{strategy:?}: {height} x {NUM_COLUMNS} cells, built in {build_time:?}, checked in {verify_time:?} -> {verdict:?}"
        );
    }
}
