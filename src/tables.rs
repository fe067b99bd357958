//! Static RFC 5545 data: component, property and parameter names, default value types and the
//! per-component cardinality lists used by the validator.

use phf::phf_map;

use crate::types::ValueType;

pub const BEGIN: &str = "BEGIN";
pub const END: &str = "END";

/// Component names (RFC 5545 3.6)
pub mod comp {
    pub const CALENDAR: &str = "VCALENDAR";
    pub const EVENT: &str = "VEVENT";
    pub const TODO: &str = "VTODO";
    pub const JOURNAL: &str = "VJOURNAL";
    pub const FREEBUSY: &str = "VFREEBUSY";
    pub const TIMEZONE: &str = "VTIMEZONE";
    pub const STANDARD: &str = "STANDARD";
    pub const DAYLIGHT: &str = "DAYLIGHT";
    pub const ALARM: &str = "VALARM";
}

/// Property names used by the library itself (RFC 5545 3.7, 3.8)
pub mod prop {
    pub const CALSCALE: &str = "CALSCALE";
    pub const METHOD: &str = "METHOD";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";
    pub const DTSTART: &str = "DTSTART";
    pub const DTEND: &str = "DTEND";
    pub const DUE: &str = "DUE";
    pub const DURATION: &str = "DURATION";
    pub const DTSTAMP: &str = "DTSTAMP";
    pub const UID: &str = "UID";
}

/// Parameter names (RFC 5545 3.2)
pub mod param {
    pub const ENCODING: &str = "ENCODING";
    pub const TZID: &str = "TZID";
    pub const VALUE: &str = "VALUE";
}

/// Default value type of every property defined by RFC 5545.
pub static DEFAULT_VALUE_TYPES: phf::Map<&'static str, ValueType> = phf_map! {
    "CALSCALE" => ValueType::Text,
    "METHOD" => ValueType::Text,
    "PRODID" => ValueType::Text,
    "VERSION" => ValueType::Text,
    "ATTACH" => ValueType::Uri,
    "CATEGORIES" => ValueType::Text,
    "CLASS" => ValueType::Text,
    "COMMENT" => ValueType::Text,
    "DESCRIPTION" => ValueType::Text,
    "GEO" => ValueType::Float,
    "LOCATION" => ValueType::Text,
    "PERCENT-COMPLETE" => ValueType::Integer,
    "PRIORITY" => ValueType::Integer,
    "RESOURCES" => ValueType::Text,
    "STATUS" => ValueType::Text,
    "SUMMARY" => ValueType::Text,
    "COMPLETED" => ValueType::DateTime,
    "DTEND" => ValueType::DateTime,
    "DUE" => ValueType::DateTime,
    "DTSTART" => ValueType::DateTime,
    "DURATION" => ValueType::Duration,
    "FREEBUSY" => ValueType::Period,
    "TRANSP" => ValueType::Text,
    "TZID" => ValueType::Text,
    "TZNAME" => ValueType::Text,
    "TZOFFSETFROM" => ValueType::UtcOffset,
    "TZOFFSETTO" => ValueType::UtcOffset,
    "TZURL" => ValueType::Uri,
    "ATTENDEE" => ValueType::CalAddress,
    "CONTACT" => ValueType::Text,
    "ORGANIZER" => ValueType::CalAddress,
    "RECURRENCE-ID" => ValueType::DateTime,
    "RELATED-TO" => ValueType::Text,
    "URL" => ValueType::Uri,
    "UID" => ValueType::Text,
    "EXDATE" => ValueType::DateTime,
    "RDATE" => ValueType::DateTime,
    "RRULE" => ValueType::Recur,
    "ACTION" => ValueType::Text,
    "REPEAT" => ValueType::Integer,
    "TRIGGER" => ValueType::Duration,
    "CREATED" => ValueType::DateTime,
    "DTSTAMP" => ValueType::DateTime,
    "LAST-MODIFIED" => ValueType::DateTime,
    "SEQUENCE" => ValueType::Integer,
    "REQUEST-STATUS" => ValueType::Text,
};

/// Properties a component MUST carry exactly once.
pub static EXACTLY_ONE: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "VCALENDAR" => &["PRODID", "VERSION"],
    "VEVENT" => &["DTSTAMP", "UID"],
    "VTODO" => &["DTSTAMP", "UID"],
    "VJOURNAL" => &["DTSTAMP", "UID"],
    "VFREEBUSY" => &["DTSTAMP", "UID"],
    "VTIMEZONE" => &["TZID"],
    "STANDARD" => &["DTSTART", "TZOFFSETTO", "TZOFFSETFROM"],
    "DAYLIGHT" => &["DTSTART", "TZOFFSETTO", "TZOFFSETFROM"],
    "VALARM" => &["ACTION", "TRIGGER"],
};

/// Properties a component MUST NOT carry more than once.
pub static AT_MOST_ONE: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "VCALENDAR" => &["CALSCALE", "METHOD"],
    "VEVENT" => &[
        "DTSTART", "CLASS", "CREATED", "DESCRIPTION", "GEO", "LAST-MODIFIED", "LOCATION",
        "ORGANIZER", "PRIORITY", "SEQUENCE", "STATUS", "SUMMARY", "TRANSP", "URL",
        "RECURRENCE-ID", "DTEND", "DURATION",
    ],
    "VTODO" => &[
        "CLASS", "COMPLETED", "CREATED", "DESCRIPTION", "DTSTART", "GEO", "LAST-MODIFIED",
        "LOCATION", "ORGANIZER", "PERCENT-COMPLETE", "PRIORITY", "RECURRENCE-ID", "SEQUENCE",
        "STATUS", "SUMMARY", "URL", "DUE", "DURATION",
    ],
    "VJOURNAL" => &[
        "CLASS", "CREATED", "DTSTART", "LAST-MODIFIED", "ORGANIZER", "RECURRENCE-ID",
        "SEQUENCE", "STATUS", "SUMMARY", "URL",
    ],
    "VFREEBUSY" => &["CONTACT", "DTSTART", "DTEND", "ORGANIZER", "URL"],
    "VTIMEZONE" => &["LAST-MODIFIED", "TZURL"],
};

#[inline]
pub fn default_value_type(property: &str) -> Option<ValueType> {
    DEFAULT_VALUE_TYPES.get(property).cloned()
}

#[inline]
pub fn exactly_one(component: &str) -> &'static [&'static str] {
    EXACTLY_ONE.get(component).copied().unwrap_or_default()
}

#[inline]
pub fn at_most_one(component: &str) -> &'static [&'static str] {
    AT_MOST_ONE.get(component).copied().unwrap_or_default()
}
