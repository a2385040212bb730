use super::*;

#[derive(Debug, serde::Deserialize, PartialEq)]
struct Row {
    id: i64,
}

#[test]
fn strip_banner_removes_prefix_and_whitespace() {
    assert_eq!(strip_banner("Connected successfully\n[1]"), "[1]");
    assert_eq!(strip_banner("Connected successfully   {\"a\":1}  "), "{\"a\":1}");
    assert_eq!(strip_banner("  [2]\n"), "[2]");
}

#[test]
fn strip_banner_only_touches_a_leading_banner() {
    let body = "[\"Connected successfully\"]";
    assert_eq!(strip_banner(body), body);
}

#[test]
fn parse_payload_accepts_banner_prefixed_json() {
    let rows: Vec<Row> =
        parse_payload("Connected successfully[{\"id\":1},{\"id\":2}]", "rows").unwrap();
    assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
}

#[test]
fn parse_payload_failure_is_transport_not_empty() {
    let err = parse_payload::<Vec<Row>>("Connected successfully", "rows").unwrap_err();
    assert!(matches!(err, ConsoleError::Transport { .. }));

    let err = parse_payload::<Vec<Row>>("<html>oops</html>", "rows").unwrap_err();
    assert!(err.to_string().contains("parse rows"));
}
