//! Response timestamps in `YYYY-MM-DD HH:MM:SS UTC` form.

use chrono::{DateTime, Utc};

use crate::config::TIMESTAMP_FORMAT;

/// Current time, formatted for responses. Computed fresh on every call.
pub fn now() -> String {
    format(Utc::now())
}

pub fn format(time: DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Inverse of [`format`]
#[cfg(test)]
pub(crate) fn parse(value: &str) -> Option<DateTime<Utc>> {
    chrono::NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(format(time), "2024-01-01 00:00:00 UTC");
    }

    #[test]
    fn test_now_parses_back() {
        let stamp = now();
        assert_eq!(stamp.len(), "2024-01-01 00:00:00 UTC".len());
        assert!(parse(&stamp).is_some());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(parse("2024-01-01T00:00:00Z").is_none());
        assert!(parse("2024-01-01 00:00:00").is_none());
        assert!(parse("").is_none());
    }
}
