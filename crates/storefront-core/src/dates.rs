//! Lenient parsing for the date strings carried by products and orders.
//!
//! Sample data mixes plain ISO dates (`"2024-03-15"`) with full RFC 3339
//! timestamps (`"2024-03-15T10:30:00Z"`). Both sort on the same timeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses an ISO date or RFC 3339 timestamp into UTC.
///
/// Plain dates resolve to midnight UTC. Returns `None` for anything else.
#[must_use]
pub fn parse_loose_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Sort key for an optional date string: unparsable or missing dates count
/// as the Unix epoch, i.e. older than anything real.
#[must_use]
pub fn sort_timestamp(raw: Option<&str>) -> i64 {
    raw.and_then(parse_loose_date)
        .map_or(0, |ts| ts.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_iso_date_as_midnight_utc() {
        let ts = parse_loose_date("2024-03-15").expect("plain date should parse");
        assert_eq!(ts.to_rfc3339(), "2024-03-15T00:00:00+00:00");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let ts = parse_loose_date("2024-03-15T10:30:00+02:00").expect("rfc3339 should parse");
        assert_eq!(ts.to_rfc3339(), "2024-03-15T08:30:00+00:00");
    }

    #[test]
    fn parses_timestamp_without_zone() {
        assert!(parse_loose_date("2024-03-15T10:30:00").is_some());
    }

    #[test]
    fn rejects_garbage_and_empty() {
        assert!(parse_loose_date("not a date").is_none());
        assert!(parse_loose_date("   ").is_none());
    }

    #[test]
    fn missing_date_sorts_as_epoch() {
        assert_eq!(sort_timestamp(None), 0);
        assert_eq!(sort_timestamp(Some("yesterday")), 0);
        assert!(sort_timestamp(Some("2020-01-01")) > 0);
    }
}
