//! Error types for civil-calendar validation.

use thiserror::Error;

/// Errors from date validation, hour-slot parsing, or the supported-year check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The date does not exist in the Gregorian calendar (e.g. Feb 30).
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The year lies outside the window covered by the solar-term table.
    #[error("year {year} outside supported range {first}..={last}")]
    UnsupportedYearRange { year: i32, first: i32, last: i32 },
    /// Julian Day Number outside the range that maps back to a calendar date.
    #[error("julian day number {0} out of range")]
    JulianDayOutOfRange(i64),
    /// Hour slot index is not in 0..=11.
    #[error("invalid hour slot {0} (expected 0-11)")]
    InvalidHourSlot(u8),
    /// Clock time is not a valid HH:MM.
    #[error("invalid clock time {hour:02}:{minute:02}")]
    InvalidClock { hour: u32, minute: u32 },
    /// Text could not be parsed into a date or time.
    #[error("parse error: {0}")]
    Parse(String),
}
