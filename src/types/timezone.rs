use chrono::{MappedLocalTime, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};
use derive_more::{Display, From};
use std::{collections::HashMap, str::FromStr};

/// Timezone of a decoded DATE-TIME.
#[derive(Debug, Clone, Copy, From, PartialEq, Eq)]
pub enum Tz {
    /// Floating local time, not bound to any timezone.
    Floating,
    Olson(chrono_tz::Tz),
}

impl Tz {
    pub const UTC: Self = Self::Olson(chrono_tz::UTC);

    pub fn is_floating(&self) -> bool {
        matches!(self, Self::Floating)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Floating => "Floating",
            Self::Olson(tz) => tz.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum CalTimezoneOffset {
    Floating,
    Olson(chrono_tz::TzOffset),
}

impl Offset for CalTimezoneOffset {
    fn fix(&self) -> chrono::FixedOffset {
        match self {
            Self::Floating => Utc.fix(),
            Self::Olson(olson) => olson.fix(),
        }
    }
}

impl TimeZone for Tz {
    type Offset = CalTimezoneOffset;

    fn from_offset(offset: &Self::Offset) -> Self {
        match offset {
            CalTimezoneOffset::Floating => Self::Floating,
            CalTimezoneOffset::Olson(offset) => Self::Olson(chrono_tz::Tz::from_offset(offset)),
        }
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_local_date(&self, local: &NaiveDate) -> MappedLocalTime<Self::Offset> {
        match self {
            Self::Floating => MappedLocalTime::Single(CalTimezoneOffset::Floating),
            Self::Olson(tz) => tz
                .offset_from_local_date(local)
                .map(CalTimezoneOffset::Olson),
        }
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> MappedLocalTime<Self::Offset> {
        match self {
            Self::Floating => MappedLocalTime::Single(CalTimezoneOffset::Floating),
            Self::Olson(tz) => tz
                .offset_from_local_datetime(local)
                .map(CalTimezoneOffset::Olson),
        }
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        match self {
            Self::Floating => CalTimezoneOffset::Floating,
            Self::Olson(tz) => CalTimezoneOffset::Olson(tz.offset_from_utc_datetime(utc)),
        }
    }

    #[cfg(not(tarpaulin_include))] // Only used by deprecated chrono::Date type
    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        match self {
            Self::Floating => CalTimezoneOffset::Floating,
            Self::Olson(tz) => CalTimezoneOffset::Olson(tz.offset_from_utc_date(utc)),
        }
    }
}

/// Looks up the timezone named by a `TZID` parameter.
pub trait TimezoneResolver {
    fn resolve(&self, tzid: &str) -> Option<Tz>;
}

/// Resolves IANA timezone names such as `Europe/Berlin`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OlsonResolver;

impl TimezoneResolver for OlsonResolver {
    fn resolve(&self, tzid: &str) -> Option<Tz> {
        chrono_tz::Tz::from_str(tzid).ok().map(Tz::Olson)
    }
}

/// Timezones already resolved from the VTIMEZONE components of a calendar, keyed by TZID.
/// `None` marks a TZID that is known but could not be mapped.
impl TimezoneResolver for HashMap<String, Option<chrono_tz::Tz>> {
    fn resolve(&self, tzid: &str) -> Option<Tz> {
        self.get(tzid).copied().flatten().map(Tz::Olson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn olson_resolver() {
        assert_eq!(
            OlsonResolver.resolve("Europe/Berlin"),
            Some(Tz::Olson(chrono_tz::Europe::Berlin))
        );
        assert_eq!(OlsonResolver.resolve("Mars/Olympus_Mons"), None);
    }

    #[test]
    fn map_resolver() {
        let timezones = HashMap::from([
            ("Custom".to_owned(), Some(chrono_tz::Asia::Tokyo)),
            ("Unmapped".to_owned(), None),
        ]);
        assert_eq!(
            timezones.resolve("Custom"),
            Some(Tz::Olson(chrono_tz::Asia::Tokyo))
        );
        assert_eq!(timezones.resolve("Unmapped"), None);
        assert_eq!(timezones.resolve("Missing"), None);
    }

    #[test]
    fn floating_has_no_offset() {
        let naive = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let datetime = Tz::Floating.from_local_datetime(&naive).unwrap();
        assert!(datetime.timezone().is_floating());
        assert_eq!(datetime.naive_utc(), naive);
        assert_eq!(Tz::UTC.name(), "UTC");
    }
}
