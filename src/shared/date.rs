//! Date/time arguments for endpoints that take a moment or a calendar day.
//!
//! Text input is parsed deterministically. Naive values (no offset) are read
//! as UTC. Forms where day and month could be swapped (`03/05/2024`) are
//! rejected rather than guessed.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::ApiError;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%d %B %Y"];

/// Anything that can be turned into a UTC instant for a request parameter.
pub trait DateArg {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError>;

    /// Seconds since the Unix epoch.
    fn to_unix_seconds(&self) -> Result<i64, ApiError> {
        Ok(self.to_datetime()?.timestamp())
    }

    /// Calendar day as `YYYY-MM-DD`.
    fn to_ymd(&self) -> Result<String, ApiError> {
        Ok(self.to_datetime()?.format("%Y-%m-%d").to_string())
    }
}

impl DateArg for str {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        parse_datetime(self)
    }
}

impl DateArg for String {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        parse_datetime(self)
    }
}

impl DateArg for NaiveDate {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        Ok(self.and_time(NaiveTime::MIN).and_utc())
    }
}

impl DateArg for NaiveDateTime {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        Ok(self.and_utc())
    }
}

impl DateArg for DateTime<Utc> {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        Ok(*self)
    }
}

impl DateArg for DateTime<FixedOffset> {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        Ok(self.with_timezone(&Utc))
    }
}

impl<T: DateArg + ?Sized> DateArg for &T {
    fn to_datetime(&self) -> Result<DateTime<Utc>, ApiError> {
        (**self).to_datetime()
    }
}

/// Parse a textual date or date/time.
///
/// Accepted, in order: `YYYYMMDD` or Unix seconds, RFC 3339, RFC 2822, `YYYY-MM-DD[ T]HH:MM[:SS[.f]]`,
/// `YYYY-MM-DD`, `YYYY/MM/DD`, `March 5, 2024`, `5 March 2024`.
pub fn parse_datetime(input: &str) -> Result<DateTime<Utc>, ApiError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ApiError::invalid("date cannot be empty"));
    }

    if s.bytes().all(|b| b.is_ascii_digit()) {
        return parse_digits(s);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.and_utc());
        }
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.to_datetime();
        }
    }

    Err(ApiError::invalid(format!("unrecognized date '{}'", s)))
}

/// Eight digits are a compact `YYYYMMDD` day; nine or ten are Unix seconds
/// (1973 through 2286). Any other length is rejected.
fn parse_digits(s: &str) -> Result<DateTime<Utc>, ApiError> {
    match s.len() {
        8 => NaiveDate::parse_from_str(s, "%Y%m%d")
            .map_err(|_| ApiError::invalid(format!("unrecognized compact date '{}'", s)))?
            .to_datetime(),
        9 | 10 => {
            let secs: i64 = s
                .parse()
                .map_err(|_| ApiError::invalid(format!("timestamp '{}' is out of range", s)))?;
            DateTime::from_timestamp(secs, 0)
                .ok_or_else(|| ApiError::invalid(format!("timestamp '{}' is out of range", s)))
        }
        _ => Err(ApiError::invalid(format!(
            "ambiguous numeric date '{}' (use YYYYMMDD or Unix seconds)",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_plain_date() {
        assert_eq!("2024-03-05".to_ymd().unwrap(), "2024-03-05");
        assert_eq!("2024/03/05".to_ymd().unwrap(), "2024-03-05");
        assert_eq!("2024-03-05".to_unix_seconds().unwrap(), 1_709_596_800);
    }

    #[test]
    fn test_named_month_forms() {
        assert_eq!("March 5, 2024".to_ymd().unwrap(), "2024-03-05");
        assert_eq!("5 March 2024".to_ymd().unwrap(), "2024-03-05");
    }

    #[test]
    fn test_datetime_forms_are_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 13, 30, 0).unwrap();
        assert_eq!(parse_datetime("2024-03-05 13:30:00").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05T13:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05T13:30:00Z").unwrap(), expected);
        assert_eq!(parse_datetime("2024-03-05T15:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_datetime("Tue, 5 Mar 2024 13:30:00 +0000").unwrap(), expected);
    }

    #[test]
    fn test_unix_seconds() {
        assert_eq!("1709596800".to_ymd().unwrap(), "2024-03-05");
        assert_eq!("123456789".to_unix_seconds().unwrap(), 123_456_789);
    }

    #[test]
    fn test_compact_date_is_not_a_timestamp() {
        assert_eq!("20240305".to_ymd().unwrap(), "2024-03-05");
        assert_eq!("20240305".to_unix_seconds().unwrap(), 1_709_596_800);
        assert!(parse_datetime("20241305").is_err());
    }

    #[test]
    fn test_other_digit_lengths_rejected() {
        assert!(matches!(parse_datetime("99999999999"), Err(ApiError::InvalidArgument(_))));
        assert!(parse_datetime("2024").is_err());
        assert!(parse_datetime("0").is_err());
    }

    #[test]
    fn test_rejects_garbage_and_ambiguous() {
        assert!(matches!(parse_datetime("not-a-date"), Err(ApiError::InvalidArgument(_))));
        assert!(parse_datetime("").is_err());
        assert!(parse_datetime("03/05/2024").is_err());
        assert!(parse_datetime("2024-02-30").is_err());
    }

    #[test]
    fn test_chrono_values() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day.to_ymd().unwrap(), "2024-03-05");

        let moment = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 10).unwrap();
        assert_eq!(moment.to_unix_seconds().unwrap(), 1_709_596_810);
        assert_eq!(String::from("2024-03-05").to_ymd().unwrap(), "2024-03-05");
    }
}
