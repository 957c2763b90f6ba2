//! Loading validated parameters from serialized config.

use bp_math::{BetaPrime, BetaPrimeParams, ParamError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("bp_math=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn deserializes_valid_params() {
    let dist: BetaPrime = serde_json::from_str(r#"{"alpha": 5.0, "beta": 2.0}"#).unwrap();
    assert_eq!(dist.alpha(), 5.0);
    assert_eq!(dist.beta(), 2.0);
    assert_eq!(dist.mode(), 4.0 / 3.0);
}

#[test]
fn serializes_as_plain_params() {
    let dist = BetaPrime::new(0.5, 2.0).unwrap();
    let json = serde_json::to_value(dist).unwrap();
    assert_eq!(json, serde_json::json!({"alpha": 0.5, "beta": 2.0}));

    let back: BetaPrime = serde_json::from_value(json).unwrap();
    assert_eq!(back, dist);
}

#[test]
fn rejects_non_positive_shapes() {
    init_tracing();
    let err = serde_json::from_str::<BetaPrime>(r#"{"alpha": -1.0, "beta": 2.0}"#).unwrap_err();
    assert!(err.to_string().contains("invalid alpha: -1"), "{err}");

    let err = serde_json::from_str::<BetaPrime>(r#"{"alpha": 2.0, "beta": 0.0}"#).unwrap_err();
    assert!(err.to_string().contains("invalid beta: 0"), "{err}");
}

#[test]
fn rejects_unknown_fields() {
    let err = serde_json::from_str::<BetaPrimeParams>(r#"{"alpha": 1.0, "beta": 2.0, "gamma": 3.0}"#)
        .unwrap_err();
    assert!(err.to_string().contains("unknown field"), "{err}");
}

#[test]
fn raw_params_accept_invalid_values_until_converted() {
    init_tracing();
    let params: BetaPrimeParams = serde_json::from_str(r#"{"alpha": 0.0, "beta": 1.0}"#).unwrap();
    assert_eq!(BetaPrime::try_from(params), Err(ParamError::InvalidAlpha(0.0)));
}
