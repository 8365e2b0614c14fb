//! Fixed-offset timestamp helpers.
//!
//! Calendar payloads carry Korea civil time with a literal `+09:00` suffix.
//! No conversion happens here: the naive value is printed as-is.

use anyhow::{Result, anyhow};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Asia::Seoul;

pub const KST_OFFSET: &str = "+09:00";

/// Render a civil timestamp as `YYYY-MM-DDTHH:MM:SS+09:00`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    format!("{}{}", ts.format("%Y-%m-%dT%H:%M:%S"), KST_OFFSET)
}

/// Current wall-clock time in Seoul.
pub fn korea_now() -> NaiveDateTime {
    Utc::now().with_timezone(&Seoul).naive_local()
}

/// Parse a reference time supplied by a client or on the command line.
///
/// Accepts RFC 3339 with any offset (converted to Seoul time), or a naive
/// `YYYY-MM-DDTHH:MM:SS` / `YYYY-MM-DD HH:MM` already in Seoul time.
pub fn parse_reference_time(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Seoul).naive_local());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(naive);
        }
    }

    Err(anyhow!(
        "Invalid reference time '{}'. Use YYYY-MM-DDTHH:MM:SS or RFC 3339",
        input
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    #[test]
    fn test_format_timestamp_pads_fields() {
        assert_eq!(format_timestamp(&at(2025, 4, 8, 7, 5, 3)), "2025-04-08T07:05:03+09:00");
        assert_eq!(format_timestamp(&at(2025, 12, 31, 23, 0, 0)), "2025-12-31T23:00:00+09:00");
    }

    #[test]
    fn test_format_timestamp_drops_subseconds() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 2)
            .unwrap()
            .and_hms_milli_opt(3, 4, 5, 678)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2025-01-02T03:04:05+09:00");
    }

    #[test]
    fn test_parse_reference_time_naive() {
        assert_eq!(parse_reference_time("2025-04-01T10:30:00").unwrap(), at(2025, 4, 1, 10, 30, 0));
        assert_eq!(parse_reference_time("2025-04-01 10:30").unwrap(), at(2025, 4, 1, 10, 30, 0));
    }

    #[test]
    fn test_parse_reference_time_converts_offset_to_seoul() {
        assert_eq!(
            parse_reference_time("2025-04-01T01:00:00Z").unwrap(),
            at(2025, 4, 1, 10, 0, 0)
        );
        assert_eq!(
            parse_reference_time("2025-04-01T10:00:00+09:00").unwrap(),
            at(2025, 4, 1, 10, 0, 0)
        );
    }

    #[test]
    fn test_parse_reference_time_rejects_garbage() {
        assert!(parse_reference_time("tomorrow").is_err());
        assert!(parse_reference_time("").is_err());
    }
}
