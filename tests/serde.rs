#![cfg(feature = "serde")]
use descalc::{EvalOptions, Evaluator, ExErrorKind, DEFAULT_MAX_DEPTH};

#[test]
fn test_options_from_toml() {
    let options: EvalOptions = toml::from_str("max_depth = 2").unwrap();
    assert_eq!(options.max_depth, 2);
    assert!(!options.require_full_consumption);

    let options: EvalOptions = toml::from_str("require_full_consumption = true").unwrap();
    assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
    assert!(options.require_full_consumption);

    let evaluator = Evaluator::<f64>::with_options(options);
    assert_eq!(
        evaluator.eval("1 + 2 )").unwrap_err().kind,
        ExErrorKind::MismatchedParentheses
    );
}

#[test]
fn test_options_json() {
    let options = EvalOptions::default().max_depth(7);
    let serialized = serde_json::to_string(&options).unwrap();
    assert_eq!(
        serialized,
        r#"{"max_depth":7,"require_full_consumption":false}"#
    );
    let deserialized = serde_json::from_str::<EvalOptions>(&serialized).unwrap();
    assert_eq!(deserialized, options);
    assert_eq!(
        serde_json::from_str::<EvalOptions>("{}").unwrap(),
        EvalOptions::default()
    );
}

#[test]
fn test_error_kind_json() {
    let serialized = serde_json::to_string(&ExErrorKind::NestingTooDeep).unwrap();
    assert_eq!(serialized, r#""NestingTooDeep""#);
    assert_eq!(
        serde_json::from_str::<ExErrorKind>(&serialized).unwrap(),
        ExErrorKind::NestingTooDeep
    );
}
