use proptest::prelude::*;

use anticheat_crypto::{decode, encode, transform, ScoreOp};

proptest! {
    /// decode(encode(v)) == v for every finite value.
    #[test]
    fn codec_roundtrip(v in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
        prop_assert_eq!(decode(&encode(v)).unwrap(), v);
    }

    /// Scores in the dashboard range survive with exact equality.
    #[test]
    fn score_range_roundtrip(v in 0.0f64..=100.0) {
        prop_assert_eq!(decode(&encode(v)).unwrap(), v);
    }

    /// Transforming agrees with applying the operation to the plain value.
    #[test]
    fn transform_matches_plain_arithmetic(v in -1.0e6f64..1.0e6, which in 0usize..4) {
        let op = [
            ScoreOp::Increase10Percent,
            ScoreOp::Decrease10Percent,
            ScoreOp::Double,
            ScoreOp::Identity,
        ][which];
        let out = decode(&transform(&encode(v), op).unwrap()).unwrap();
        prop_assert_eq!(out, op.apply(v));
    }

    /// Decoding arbitrary text never panics.
    #[test]
    fn decode_never_panics(s in ".*") {
        let _ = decode(&s);
        let _ = decode(&format!("FHE-{s}"));
    }
}
