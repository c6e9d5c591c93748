use jsjson::{parse, parse_str, parse_with_options, ErrorKind, ParseOptions, Value};
use rstest::rstest;

fn first(input: &str) -> Value {
    let value = parse_str(&format!("[{input}]")).unwrap();
    value[0].clone()
}

#[rstest]
#[case("399", 399.0)]
#[case("1.53", 1.53)]
#[case("-0.344", -0.344)]
#[case("1.3e4", 13000.0)]
#[case("1.3E+4", 13000.0)]
#[case("25e-2", 0.25)]
#[case("0", 0.0)]
#[case("-7", -7.0)]
fn numbers(#[case] input: &str, #[case] expected: f64) {
    assert_eq!(first(input).as_number(), Some(expected));
}

#[rstest]
#[case("true", Some(true))]
#[case("false", Some(false))]
fn booleans(#[case] input: &str, #[case] expected: Option<bool>) {
    assert_eq!(first(input).as_bool(), expected);
}

#[rstest]
fn null_literal() {
    assert!(first("null").is_null());
}

#[rstest]
#[case(r#""plain""#, "plain")]
#[case(r#""""#, "")]
#[case(r#""tab\there""#, "tab\there")]
#[case(r#""line\nbreak""#, "line\nbreak")]
#[case(r#""quote\"inside""#, "quote\"inside")]
#[case(r#""back\\slash""#, "back\\slash")]
#[case(r#""sl\/ash""#, "sl/ash")]
#[case(r#""\b\f\r""#, "\u{8}\u{c}\r")]
#[case(r#""Aß中""#, "Aß中")]
#[case(r#""😀""#, "😀")]
#[case(r#""Pariz, Francija – 2015""#, "Pariz, Francija – 2015")]
fn strings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(first(input).as_str(), Some(expected));
}

#[rstest]
fn keys_are_unescaped() {
    let value = parse(br#"{"a\nb": 1, "c": 2}"#).unwrap();
    assert_eq!(value["a\nb"].as_number(), Some(1.0));
    assert_eq!(value["c"].as_number(), Some(2.0));
}

#[rstest]
fn primitives_end_at_every_terminator() {
    let value = parse(b"[1,2\t,3\r,4\n,5 ,true]").unwrap();
    assert_eq!(value.len(), 6);
    let value = parse(br#"{"a":1}"#).unwrap();
    assert_eq!(value["a"].as_number(), Some(1.0));
}

#[rstest]
fn getters_reject_mismatched_variants() {
    let value = parse(br#"[1, "1", true, null]"#).unwrap();
    assert_eq!(value[0].as_str(), None);
    assert_eq!(value[1].as_number(), None);
    assert_eq!(value[2].as_number(), None);
    assert_eq!(value[3].as_bool(), None);
    assert_eq!(value.get_index(4), None);
    assert_eq!(value.get("0"), None);
}

#[rstest]
fn lenient_mode_classifies_literals_by_first_byte() {
    let options = ParseOptions::lenient();
    let value = parse_with_options(b"[nope, tx, fy]", &options).unwrap();
    assert!(value[0].is_null());
    assert_eq!(value[1].as_bool(), Some(true));
    assert_eq!(value[2].as_bool(), Some(false));

    let err = parse(b"[nope]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidPrimitive);
}

#[rstest]
fn lenient_mode_accepts_raw_control_bytes() {
    let input = b"[\"a\tb\"]";
    assert_eq!(parse(input).unwrap_err().kind, ErrorKind::StringUnexpectedSymbol);
    let value = parse_with_options(input, &ParseOptions::lenient()).unwrap();
    assert_eq!(value[0].as_str(), Some("a\tb"));
}

#[rstest]
fn depth_limit_is_configurable() {
    let deep = format!("{}{}", "[".repeat(300), "]".repeat(300));
    let err = parse_str(&deep).unwrap_err();
    assert_eq!(err.kind, ErrorKind::DepthLimitExceeded);

    let options = ParseOptions::new().with_max_depth(300);
    let value = parse_with_options(deep.as_bytes(), &options).unwrap();
    assert_eq!(value.len(), 1);

    let options = ParseOptions::new().with_max_depth(2);
    assert!(parse_with_options(b"[[1]]", &options).is_ok());
    assert_eq!(
        parse_with_options(br#"[{"a":[]}]"#, &options).unwrap_err().kind,
        ErrorKind::DepthLimitExceeded
    );
}

#[rstest]
fn validate_and_tokenize() {
    assert!(jsjson::validate(br#"{"ok": [1, 2]}"#).is_ok());
    assert_eq!(jsjson::validate(b"[1,").unwrap_err().kind, ErrorKind::InvalidArray);

    let tokens = jsjson::tokenize(br#"{"k": [1, true]}"#).unwrap();
    let lexemes: Vec<&str> = tokens
        .iter()
        .map(|token| std::str::from_utf8(token.lexeme).unwrap())
        .collect();
    assert_eq!(lexemes, vec!["{", "k", ":", "[", "1", ",", "true", "]", "}"]);
}
