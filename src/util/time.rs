use chrono::{DateTime, FixedOffset};

/// Parses an RFC 3339 timestamp, keeping its original offset.
pub fn parse_rfc3339(input: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).ok()
}
