//! Conversion between `"HH:MM"` wall-clock strings and minute-of-day values.
//!
//! Ads store their availability window as integer minutes since midnight and
//! expose it over the wire as zero-padded `"HH:MM"` strings.

/// Number of minutes in a day. Valid minute-of-day values are `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i32 = 24 * 60;

const SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("invalid time format '{0}', expected HH:MM")]
    InvalidFormat(String),

    #[error("minute-of-day {0} is out of range 0..=1439")]
    OutOfRange(i64),
}

/// Parse an `"HH:MM"` string into minutes since midnight.
///
/// Each component is one or two ASCII digits; hours must be in `0..=23` and
/// minutes in `0..=59`.
///
/// ```
/// use duo_core::time_codec::to_minutes;
///
/// assert_eq!(to_minutes("09:30"), Ok(570));
/// assert_eq!(to_minutes("9:30"), Ok(570));
/// assert!(to_minutes("24:00").is_err());
/// ```
pub fn to_minutes(s: &str) -> Result<i32, TimeError> {
    let invalid = || TimeError::InvalidFormat(s.to_string());

    let (hours, minutes) = s.split_once(SEPARATOR).ok_or_else(invalid)?;
    let hours = parse_component(hours, 23).ok_or_else(invalid)?;
    let minutes = parse_component(minutes, 59).ok_or_else(invalid)?;

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded `"HH:MM"` string.
///
/// ```
/// use duo_core::time_codec::to_hour_string;
///
/// assert_eq!(to_hour_string(570).as_deref(), Ok("09:30"));
/// assert!(to_hour_string(1440).is_err());
/// ```
pub fn to_hour_string(minutes: i32) -> Result<String, TimeError> {
    if !(0..MINUTES_PER_DAY).contains(&minutes) {
        return Err(TimeError::OutOfRange(i64::from(minutes)));
    }

    Ok(format!("{:02}:{:02}", minutes / 60, minutes % 60))
}

/// Parse a 1-2 digit component, rejecting signs, whitespace and values above `max`.
fn parse_component(part: &str, max: i32) -> Option<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i32 = part.parse().ok()?;
    (value <= max).then_some(value)
}
