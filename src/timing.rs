/// Race time normalisation
///
/// Score-sheets record elapsed time as `h:mm:ss`, or as `mm:ss` when the
/// competitor finished inside the hour. Both become a `chrono::Duration`.
use chrono::Duration;
use thiserror::Error;

/// A time value that is neither `h:mm:ss` nor `mm:ss`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFormatError {
    #[error("'{0}' is not h:mm:ss or mm:ss")]
    Shape(String),

    #[error("'{value}' has a non-numeric component '{component}'")]
    Component { value: String, component: String },

    /// Minutes or seconds of 60 or more, or a total too large to represent
    #[error("'{0}' is out of range")]
    OutOfRange(String),
}

/// Parse a score-sheet time into a duration.
///
/// `mm:ss` is read as `0:mm:ss`; any other number of components fails.
pub fn parse_race_time(raw: &str) -> Result<Duration, TimeFormatError> {
    let value = raw.trim();
    let parts: Vec<&str> = value.split(':').collect();

    let (h, m, s) = match parts.as_slice() {
        [m, s] => ("0", *m, *s),
        [h, m, s] => (*h, *m, *s),
        _ => return Err(TimeFormatError::Shape(value.to_string())),
    };

    let hours = parse_component(value, h)?;
    let minutes = parse_component(value, m)?;
    let seconds = parse_component(value, s)?;

    if minutes >= 60 || seconds >= 60 {
        return Err(TimeFormatError::OutOfRange(value.to_string()));
    }

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .and_then(Duration::try_seconds)
        .ok_or_else(|| TimeFormatError::OutOfRange(value.to_string()))
}

fn parse_component(value: &str, component: &str) -> Result<i64, TimeFormatError> {
    // i64::from_str would accept a leading '+'
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeFormatError::Component { value: value.to_string(), component: component.to_string() });
    }
    component
        .parse::<i64>()
        .map_err(|_| TimeFormatError::Component { value: value.to_string(), component: component.to_string() })
}

/// Render a duration as `HH:MM:SS`.
///
/// Only the clock part is emitted; a day or more keeps counting hours.
pub fn format_duration(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Sum durations, treating an empty input as zero.
///
/// Saturates at `Duration::MAX` rather than overflowing.
pub fn sum_durations<I>(durations: I) -> Duration
where
    I: IntoIterator<Item = Duration>,
{
    durations
        .into_iter()
        .fold(Duration::zero(), |acc, d| acc.checked_add(&d).unwrap_or(Duration::MAX))
}
