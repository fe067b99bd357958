//! DURATION values (RFC 5545 3.3.6).
//!
//! ```text
//! dur-value  = (["+"] / "-") "P" (dur-date / dur-time / dur-week)
//! dur-date   = dur-day [dur-time]
//! dur-time   = "T" (dur-hour / dur-minute / dur-second)
//! ```

use chrono::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDuration {
    #[error("invalid duration {0:?}: expected \"P\"")]
    MissingDesignator(String),
    #[error("invalid duration {0:?}: expected digits")]
    ExpectedDigits(String),
    #[error("invalid duration {0:?}: expected a unit after the digits")]
    MissingUnit(String),
    #[error("invalid duration {0:?}: unexpected unit {1:?}")]
    InvalidUnit(String, char),
    #[error("invalid duration {0:?}: no quantity given")]
    Empty(String),
    #[error("invalid duration {0:?}: out of range")]
    Overflow(String),
}

pub fn parse_duration(value: &str) -> Result<Duration, InvalidDuration> {
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let Some(mut rest) = unsigned.strip_prefix('P') else {
        return Err(InvalidDuration::MissingDesignator(value.to_owned()));
    };

    let mut in_time = false;
    let mut quantities = 0;
    let mut seconds: i64 = 0;
    while !rest.is_empty() {
        if !in_time && let Some(time) = rest.strip_prefix('T') {
            in_time = true;
            quantities = 0;
            rest = time;
            continue;
        }

        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(InvalidDuration::ExpectedDigits(value.to_owned()));
        }
        let count: i64 = rest[..digits]
            .parse()
            .map_err(|_| InvalidDuration::Overflow(value.to_owned()))?;

        let mut unit = rest[digits..].chars();
        let factor = match (in_time, unit.next()) {
            (false, Some('W')) => 7 * 24 * 60 * 60,
            (false, Some('D')) => 24 * 60 * 60,
            (true, Some('H')) => 60 * 60,
            (true, Some('M')) => 60,
            (true, Some('S')) => 1,
            (_, Some(other)) => return Err(InvalidDuration::InvalidUnit(value.to_owned(), other)),
            (_, None) => return Err(InvalidDuration::MissingUnit(value.to_owned())),
        };
        seconds = count
            .checked_mul(factor)
            .and_then(|part| seconds.checked_add(part))
            .ok_or_else(|| InvalidDuration::Overflow(value.to_owned()))?;
        quantities += 1;
        rest = unit.as_str();
    }

    // "P" and "PT" alone carry no quantity
    if quantities == 0 {
        return Err(InvalidDuration::Empty(value.to_owned()));
    }

    let seconds = if negative { -seconds } else { seconds };
    Duration::try_seconds(seconds).ok_or_else(|| InvalidDuration::Overflow(value.to_owned()))
}

/// Format a duration as a whole number of seconds, e.g. `PT3600S` or `-PT90S`.
/// Sub-second precision is truncated.
pub fn format_duration(duration: &Duration) -> String {
    let seconds = duration.num_seconds();
    let sign = if seconds < 0 { "-" } else { "" };
    format!("{sign}PT{}S", seconds.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("PT3600S", 3600)]
    #[case("+PT1H", 3600)]
    #[case("-P1D", -86400)]
    #[case("P2W", 14 * 86400)]
    #[case("P1DT2H3M4S", 86400 + 7200 + 180 + 4)]
    #[case("PT15M", 900)]
    #[case("-PT0S", 0)]
    fn valid(#[case] input: &str, #[case] seconds: i64) {
        assert_eq!(parse_duration(input).unwrap(), Duration::seconds(seconds));
    }

    #[rstest]
    #[case("P1X", InvalidDuration::InvalidUnit("P1X".to_owned(), 'X'))]
    #[case("PT1D", InvalidDuration::InvalidUnit("PT1D".to_owned(), 'D'))]
    #[case("P1H", InvalidDuration::InvalidUnit("P1H".to_owned(), 'H'))]
    #[case("1D", InvalidDuration::MissingDesignator("1D".to_owned()))]
    #[case("PD", InvalidDuration::ExpectedDigits("PD".to_owned()))]
    #[case("P1DTT1H", InvalidDuration::ExpectedDigits("P1DTT1H".to_owned()))]
    #[case("P12", InvalidDuration::MissingUnit("P12".to_owned()))]
    #[case("P", InvalidDuration::Empty("P".to_owned()))]
    #[case("P1DT", InvalidDuration::Empty("P1DT".to_owned()))]
    #[case(
        "P99999999999999999999D",
        InvalidDuration::Overflow("P99999999999999999999D".to_owned())
    )]
    fn invalid(#[case] input: &str, #[case] expected: InvalidDuration) {
        assert_eq!(parse_duration(input), Err(expected));
    }

    #[rstest]
    #[case(Duration::hours(1), "PT3600S")]
    #[case(-Duration::days(1), "-PT86400S")]
    #[case(Duration::zero(), "PT0S")]
    #[case(Duration::milliseconds(1500), "PT1S")]
    fn format(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format_duration(&duration), expected);
    }

    #[test]
    fn normalised_roundtrip() {
        let duration = parse_duration("PT3600S").unwrap();
        assert_eq!(format_duration(&duration), "PT3600S");
        let duration = parse_duration("P1W").unwrap();
        assert_eq!(format_duration(&duration), "PT604800S");
    }
}
