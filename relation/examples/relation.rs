use relation::{
    ClaimedPoint, MessageDigest, NonceStrategy, RelationChecker, Secret, Verdict,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut secret_bytes = [0u8; 32];
    secret_bytes[..13].copy_from_slice(b"hello nonces!");
    let secret = Secret::from_be_bytes(secret_bytes);
    let digest = MessageDigest::from_be_bytes([0x9f; 32]);

    for strategy in [NonceStrategy::Sha256, NonceStrategy::Poseidon] {
        let checker = RelationChecker::new(strategy);

        // The prover publishes the aggregate point; the strategy travels as config
        let output = checker.compute(&secret, &digest).expect("compute");
        let claimed = output.claimed_point().expect("non-zero aggregate");
        let claimed_bytes = bincode::serialize(&claimed).expect("serialize claimed point");
        let strategy_bytes = bincode::serialize(&strategy).expect("serialize strategy");

        let claimed2: ClaimedPoint =
            bincode::deserialize(&claimed_bytes).expect("deserialize claimed point");
        let strategy2: NonceStrategy =
            bincode::deserialize(&strategy_bytes).expect("deserialize strategy");

        let verdict = RelationChecker::new(strategy2)
            .check(&secret, &digest, &claimed2)
            .expect("check");
        assert_eq!(verdict, Verdict::Pass);
        println!("{strategy:?}: aggregate point {:?} -> {verdict:?}", output.point);
    }
}
