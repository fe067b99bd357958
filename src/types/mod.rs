use derive_more::Display;
use std::{convert::Infallible, str::FromStr};

mod text;
pub use text::*;
mod duration;
pub use duration::*;
mod datetime;
pub use datetime::*;
mod timezone;
pub use timezone::*;

/// Value data types (RFC 5545 3.3).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ValueType {
    #[display("BINARY")]
    Binary,
    #[display("BOOLEAN")]
    Boolean,
    #[display("CAL-ADDRESS")]
    CalAddress,
    #[display("DATE")]
    Date,
    #[display("DATE-TIME")]
    DateTime,
    #[display("DURATION")]
    Duration,
    #[display("FLOAT")]
    Float,
    #[display("INTEGER")]
    Integer,
    #[display("PERIOD")]
    Period,
    #[display("RECUR")]
    Recur,
    #[display("TEXT")]
    Text,
    #[display("TIME")]
    Time,
    #[display("URI")]
    Uri,
    #[display("UTC-OFFSET")]
    UtcOffset,
    /// An iana-token or x-name value type, kept uppercased.
    #[display("{_0}")]
    Other(String),
}

impl FromStr for ValueType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        Ok(match upper.as_str() {
            "BINARY" => Self::Binary,
            "BOOLEAN" => Self::Boolean,
            "CAL-ADDRESS" => Self::CalAddress,
            "DATE" => Self::Date,
            "DATE-TIME" => Self::DateTime,
            "DURATION" => Self::Duration,
            "FLOAT" => Self::Float,
            "INTEGER" => Self::Integer,
            "PERIOD" => Self::Period,
            "RECUR" => Self::Recur,
            "TEXT" => Self::Text,
            "TIME" => Self::Time,
            "URI" => Self::Uri,
            "UTC-OFFSET" => Self::UtcOffset,
            _ => Self::Other(upper),
        })
    }
}
