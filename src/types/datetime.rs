//! DATE and DATE-TIME values (RFC 5545 3.3.4, 3.3.5).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::Tz;

lazy_static! {
    static ref RE_DATE: Regex = Regex::new(r"^(\d{4})(\d{2})(\d{2})$").unwrap();
    static ref RE_DATETIME_LOCAL: Regex =
        Regex::new(r"^(\d{4})(\d{2})(\d{2})T(\d{2})(\d{2})(\d{2})$").unwrap();
    static ref RE_DATETIME_UTC: Regex =
        Regex::new(r"^(\d{4})(\d{2})(\d{2})T(\d{2})(\d{2})(\d{2})Z$").unwrap();
}

const DATE_FORMAT: &str = "%Y%m%d";
const UTC_DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalDateTimeError {
    #[error("invalid date {0:?}, expected YYYYMMDD")]
    InvalidDate(String),
    #[error("invalid date-time {0:?}, expected YYYYMMDDTHHMMSS[Z]")]
    InvalidDateTime(String),
    #[error("unknown timezone {0:?}")]
    UnknownTimezone(String),
    #[error("local time {0:?} does not exist in timezone {1}")]
    NonexistentLocalTime(String, String),
}

/// How a DATE-TIME without `TZID` and without a trailing `Z` is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FloatingTime {
    /// Read it as UTC.
    #[default]
    Utc,
    /// Keep it as floating local time ([`Tz::Floating`]).
    Local,
}

impl FloatingTime {
    pub fn zone(self) -> Tz {
        match self {
            Self::Utc => Tz::UTC,
            Self::Local => Tz::Floating,
        }
    }
}

fn number<T: std::str::FromStr>(captures: &Captures, index: usize) -> Option<T> {
    captures.get(index)?.as_str().parse().ok()
}

fn date_from(captures: &Captures) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(
        number(captures, 1)?,
        number(captures, 2)?,
        number(captures, 3)?,
    )
}

fn datetime_from(captures: &Captures) -> Option<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(
        number(captures, 4)?,
        number(captures, 5)?,
        number(captures, 6)?,
    )?;
    Some(date_from(captures)?.and_time(time))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, CalDateTimeError> {
    RE_DATE
        .captures(value)
        .as_ref()
        .and_then(date_from)
        .ok_or_else(|| CalDateTimeError::InvalidDate(value.to_owned()))
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a DATE-TIME.
///
/// The local form (`YYYYMMDDTHHMMSS`) is tried first and interpreted in `zone`; when that fails,
/// the UTC form (`YYYYMMDDTHHMMSSZ`) is tried.
pub fn parse_datetime(value: &str, zone: Tz) -> Result<DateTime<Tz>, CalDateTimeError> {
    if let Some(local) = RE_DATETIME_LOCAL
        .captures(value)
        .as_ref()
        .and_then(datetime_from)
    {
        // Ambiguous local times resolve to the earlier instant
        return zone.from_local_datetime(&local).earliest().ok_or_else(|| {
            CalDateTimeError::NonexistentLocalTime(value.to_owned(), zone.name().to_owned())
        });
    }

    RE_DATETIME_UTC
        .captures(value)
        .as_ref()
        .and_then(datetime_from)
        .map(|utc| Tz::UTC.from_utc_datetime(&utc))
        .ok_or_else(|| CalDateTimeError::InvalidDateTime(value.to_owned()))
}

/// Format any datetime in the explicit UTC form.
pub fn format_datetime<T: TimeZone>(datetime: &DateTime<T>) -> String {
    datetime
        .with_timezone(&Utc)
        .format(UTC_DATETIME_FORMAT)
        .to_string()
}
