//! Signature parsing tests.

use rstest::rstest;
use docgen::parser::{SignatureError, parse_signature};

// =============================================================================
// ACCEPTED SIGNATURES
// =============================================================================

#[rstest]
#[case("io.vertx.core.Vertx", "io.vertx.core.Vertx", None, None)]
#[case("Vertx#vertx", "Vertx", Some("vertx"), None)]
#[case("Vertx#vertx()", "Vertx", Some("vertx"), Some(vec![]))]
#[case("Vertx#close(Handler)", "Vertx", Some("close"), Some(vec!["Handler"]))]
#[case(
    "Buffer#setBytes(int, byte[])",
    "Buffer",
    Some("setBytes"),
    Some(vec!["int", "byte[]"])
)]
#[case("  Buffer#getInt( int )  ", "Buffer", Some("getInt"), Some(vec!["int"]))]
#[case("a.B#$inner_1", "a.B", Some("$inner_1"), None)]
#[case("Buffer#getInt(int,)", "Buffer", Some("getInt"), Some(vec!["int"]))]
fn test_parse_signature(
    #[case] input: &str,
    #[case] target: &str,
    #[case] member: Option<&str>,
    #[case] params: Option<Vec<&str>>,
) {
    let parsed = parse_signature(input).unwrap();
    assert_eq!(parsed.target_name, target);
    assert_eq!(parsed.member_name.as_deref(), member);
    assert_eq!(
        parsed.param_types,
        params.map(|p| p.into_iter().map(String::from).collect::<Vec<_>>())
    );
    assert_eq!(parsed.has_parens, parsed.param_types.is_some());
}

#[test]
fn test_empty_parens_mean_zero_argument_call() {
    assert!(parse_signature("Vertx#vertx()").unwrap().is_empty_call());
    assert!(!parse_signature("Vertx#vertx").unwrap().is_empty_call());
    assert!(!parse_signature("Vertx").unwrap().is_member());
}

// =============================================================================
// REJECTED SIGNATURES
// =============================================================================

#[rstest]
#[case("")]
#[case("   ")]
fn test_empty_signature_rejected(#[case] input: &str) {
    assert_eq!(parse_signature(input), Err(SignatureError::Empty));
}

#[rstest]
#[case("#vertx")]
#[case("#vertx()")]
fn test_missing_target_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_signature(input),
        Err(SignatureError::MissingTarget(_))
    ));
}

#[rstest]
#[case("Vertx#")]
#[case("Vertx#1abc")]
#[case("Vertx#close(")]
#[case("Vertx#close() extra")]
fn test_malformed_member_rejected(#[case] input: &str) {
    assert!(matches!(
        parse_signature(input),
        Err(SignatureError::MalformedMember(_))
    ));
}
