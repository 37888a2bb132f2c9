//! Departure time-of-day handling.
//!
//! The GDS gives times as "HH:MM" strings. Ordering the board only
//! needs the minute-of-day key, so there is no date arithmetic here;
//! every aggregation covers a single calendar date.

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse an "HH:MM" string into its minute-of-day key (`hours * 60 + minutes`).
///
/// Only the first two colon-separated components matter, so a seconds
/// field is tolerated, as is a single-digit hour.
///
/// # Examples
///
/// ```
/// use terminal_server::schedule::minute_of_day;
///
/// assert_eq!(minute_of_day("08:00").unwrap(), 480);
/// assert_eq!(minute_of_day("7:45").unwrap(), 465);
/// assert_eq!(minute_of_day("23:59:30").unwrap(), 23 * 60 + 59);
/// assert!(minute_of_day("0800").is_err());
/// assert!(minute_of_day("24:00").is_err());
/// ```
pub fn minute_of_day(s: &str) -> Result<u16, TimeError> {
    let mut parts = s.split(':');

    let hour: u16 = parts
        .next()
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| TimeError::new("invalid hour digits"))?;
    let minute: u16 = parts
        .next()
        .ok_or_else(|| TimeError::new("expected HH:MM format"))?
        .parse()
        .map_err(|_| TimeError::new("invalid minute digits"))?;

    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    Ok(hour * 60 + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(minute_of_day("00:00").unwrap(), 0);
        assert_eq!(minute_of_day("23:59").unwrap(), 23 * 60 + 59);
        assert_eq!(minute_of_day("14:30").unwrap(), 14 * 60 + 30);
    }

    #[test]
    fn parse_unpadded_hour() {
        assert_eq!(minute_of_day("7:30").unwrap(), 7 * 60 + 30);
    }

    #[test]
    fn trailing_seconds_ignored() {
        assert_eq!(minute_of_day("09:05:59").unwrap(), 9 * 60 + 5);
    }

    #[test]
    fn parse_invalid_format() {
        assert!(minute_of_day("1430").is_err());
        assert!(minute_of_day("14-30").is_err());
        assert!(minute_of_day("ab:cd").is_err());
        assert!(minute_of_day("14:").is_err());
        assert!(minute_of_day("").is_err());
    }

    #[test]
    fn parse_out_of_range() {
        assert!(minute_of_day("24:00").is_err());
        assert!(minute_of_day("12:60").is_err());
    }
}
