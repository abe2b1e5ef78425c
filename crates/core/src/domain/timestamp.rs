//! Conversions between epoch seconds and the strings shown to (and typed by)
//! the user.
//!
//! Display strings look like `2024-03-09 14:05:07`; the editable shape used by
//! the base-time field looks like `2024-03-09T14:05:07`. Every function has a
//! `*_in` variant taking an explicit [`TimeZone`] so callers can pin a zone.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use std::fmt;

use crate::error::{CoreError, Result};

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const EDITABLE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Shapes accepted when parsing edited text, tried in order.
/// `%.f` consumes an optional fractional part.
const EDITABLE_PARSE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// The UTC instant for `sec`, saturating at chrono's representable range.
pub fn instant(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap_or(if sec < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}

/// `YYYY-MM-DD HH:MM:SS` in the given zone
pub fn format_in<Tz>(sec: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant(sec).with_timezone(tz).format(DISPLAY_FORMAT).to_string()
}

/// `YYYY-MM-DD HH:MM:SS` in the local zone
pub fn format_local(sec: i64) -> String {
    format_in(sec, &Local)
}

/// `YYYY-MM-DD HH:MM:SS` in UTC
pub fn format_utc(sec: i64) -> String {
    format_in(sec, &Utc)
}

/// `YYYY-MM-DDTHH:MM:SS` in the given zone
pub fn to_editable_in<Tz>(sec: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    instant(sec).with_timezone(tz).format(EDITABLE_FORMAT).to_string()
}

/// `YYYY-MM-DDTHH:MM:SS` in the local zone
pub fn to_editable_local(sec: i64) -> String {
    to_editable_in(sec, &Local)
}

/// Parse edited text as wall-clock time in `tz`.
///
/// Ambiguous wall-clock times resolve to the earliest instant. Times that do
/// not exist in `tz` (skipped by a DST transition) are rejected. Fractional
/// seconds are truncated toward zero.
pub fn from_editable_in<Tz: TimeZone>(text: &str, tz: &Tz) -> Result<i64> {
    let trimmed = text.trim();
    let naive = EDITABLE_PARSE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| parse_failure(text))?;

    let resolved = tz
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| parse_failure(text))?;

    let secs = resolved.timestamp();
    let nanos = resolved.timestamp_subsec_nanos();
    if secs < 0 && nanos % NANOS_PER_SECOND != 0 {
        Ok(secs + 1)
    } else {
        Ok(secs)
    }
}

/// Parse edited text as local wall-clock time.
pub fn from_editable_local(text: &str) -> Result<i64> {
    from_editable_in(text, &Local)
}

fn parse_failure(text: &str) -> CoreError {
    CoreError::ParseFailure {
        input: text.to_string(),
    }
}

/// `86400` -> `86,400`
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn east(hours: i32, minutes: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600 + minutes * 60).expect("valid offset")
    }

    #[test]
    fn test_format_utc_epoch() {
        assert_eq!(format_utc(0), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_format_pads_every_field() {
        // 2001-02-03 04:05:06 UTC
        assert_eq!(format_utc(981_173_106), "2001-02-03 04:05:06");
    }

    #[test]
    fn test_format_in_fixed_offset() {
        assert_eq!(format_in(0, &east(2, 0)), "1970-01-01 02:00:00");
        assert_eq!(format_in(0, &east(-5, 0)), "1969-12-31 19:00:00");
        assert_eq!(format_in(0, &east(5, 30)), "1970-01-01 05:30:00");
    }

    #[test]
    fn test_editable_shape() {
        assert_eq!(to_editable_in(981_173_106, &Utc), "2001-02-03T04:05:06");
        assert_eq!(to_editable_in(0, &east(-5, 0)), "1969-12-31T19:00:00");
    }

    #[test]
    fn test_round_trip_fixed_zones() {
        let zones = [east(0, 0), east(2, 0), east(-5, 0), east(5, 30), east(14, 0)];
        let samples = [0, 1, -1, 59, 86_399, 981_173_106, 1_700_000_000, -1_000_000_000, 4_102_444_800];
        for tz in &zones {
            for sec in samples {
                let text = to_editable_in(sec, tz);
                assert_eq!(from_editable_in(&text, tz), Ok(sec), "{text} in {tz}");
            }
        }
    }

    #[test]
    fn test_round_trip_local_zone() {
        for sec in [0, 1_700_000_000, 1_718_000_000] {
            assert_eq!(from_editable_local(&to_editable_local(sec)), Ok(sec));
        }
    }

    #[test]
    fn test_parse_failure_is_distinct() {
        for bad in ["not-a-date", "", "2024-13-01T00:00:00", "2024-02-30T00:00:00", "2024-01-01", "2024-01-01T25:00:00"] {
            assert_eq!(
                from_editable_in(bad, &Utc),
                Err(CoreError::ParseFailure { input: bad.to_string() }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_accepts_minute_granularity() {
        assert_eq!(from_editable_in("1970-01-01T00:01", &Utc), Ok(60));
        assert_eq!(from_editable_in("1970-01-01T02:00", &east(2, 0)), Ok(0));
    }

    #[test]
    fn test_parse_accepts_display_shape_and_whitespace() {
        assert_eq!(from_editable_in(" 2001-02-03 04:05:06 ", &Utc), Ok(981_173_106));
    }

    #[test]
    fn test_fraction_truncates_toward_zero() {
        assert_eq!(from_editable_in("1970-01-01T00:00:01.9", &Utc), Ok(1));
        assert_eq!(from_editable_in("1969-12-31T23:59:58.5", &Utc), Ok(-1));
    }

    #[test]
    fn test_instant_saturates() {
        assert_eq!(instant(i64::MAX), DateTime::<Utc>::MAX_UTC);
        assert_eq!(instant(i64::MIN), DateTime::<Utc>::MIN_UTC);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(86_400), "86,400");
        assert_eq!(group_thousands(2_592_000), "2,592,000");
        assert_eq!(group_thousands(-1_234), "-1,234");
    }
}
