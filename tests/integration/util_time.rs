use checkverify::util::time::parse_rfc3339;

#[test]
fn parses_offset_datetime() {
    let parsed = parse_rfc3339("2026-02-23T20:15:30+09:00").expect("valid datetime");
    assert_eq!(parsed.offset().local_minus_utc(), 9 * 3600);
    assert_eq!(parsed.to_rfc3339(), "2026-02-23T20:15:30+09:00");
}

#[test]
fn keeps_fractional_seconds() {
    let parsed = parse_rfc3339("2026-02-23T20:15:30.123456Z").expect("valid datetime");
    assert_eq!(parsed.timestamp_subsec_micros(), 123_456);
}

#[test]
fn invalid_datetime_returns_none() {
    assert!(parse_rfc3339("not-a-datetime").is_none());
    assert!(parse_rfc3339("2026-02-23").is_none());
}
