//! Engine error taxonomy.

use thiserror::Error;

use saju_classify::ClassifyError;
use saju_time::CalendarError;

use crate::lunar::ConversionError;

/// Errors returned by [`Engine`](crate::Engine). Every variant is terminal
/// for the request that produced it; the engine never retries.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The input names no real date (solar or lunar), or carries a
    /// malformed time.
    #[error("invalid input: {0}")]
    InvalidDate(CalendarError),
    /// The (solar) year lies outside the supported window.
    #[error("year {year} outside supported range {first}..={last}")]
    UnsupportedYearRange { year: i32, first: i32, last: i32 },
    /// The lunar collaborator was unavailable or returned inconsistent data.
    #[error("lunar conversion failed: {0}")]
    ConversionFailure(#[source] ConversionError),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// A config file could not be read or parsed.
    #[error("config load error: {0}")]
    ConfigLoad(String),
    /// The global engine was used before [`init`](crate::init).
    #[error("engine not initialized; call init() first")]
    NotInitialized,
    #[error("engine already initialized")]
    AlreadyInitialized,
}

impl From<CalendarError> for EngineError {
    fn from(e: CalendarError) -> Self {
        match e {
            CalendarError::UnsupportedYearRange { year, first, last } => {
                Self::UnsupportedYearRange { year, first, last }
            }
            other => Self::InvalidDate(other),
        }
    }
}

impl From<ConversionError> for EngineError {
    fn from(e: ConversionError) -> Self {
        match e {
            // The converter answered; the lunar date itself does not exist.
            ConversionError::DayOutOfRange { date, .. } => {
                Self::InvalidDate(CalendarError::InvalidDate {
                    year: date.year(),
                    month: date.month(),
                    day: date.day(),
                })
            }
            other => Self::ConversionFailure(other),
        }
    }
}

impl From<ClassifyError> for EngineError {
    fn from(e: ClassifyError) -> Self {
        match e {
            ClassifyError::InvalidConfig(msg) => Self::InvalidConfig(msg),
            ClassifyError::Calendar(c) => c.into(),
            other => Self::ConfigLoad(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::LunarDate;

    #[test]
    fn unsupported_year_keeps_bounds() {
        let e: EngineError = CalendarError::UnsupportedYearRange {
            year: 1850,
            first: 1900,
            last: 2100,
        }
        .into();
        assert_eq!(
            e,
            EngineError::UnsupportedYearRange {
                year: 1850,
                first: 1900,
                last: 2100
            }
        );
        assert_eq!(e.to_string(), "year 1850 outside supported range 1900..=2100");
    }

    #[test]
    fn bad_date_is_invalid_date() {
        let e: EngineError = CalendarError::InvalidDate {
            year: 2023,
            month: 2,
            day: 30,
        }
        .into();
        assert!(matches!(e, EngineError::InvalidDate(_)));
        assert_eq!(e.to_string(), "invalid input: invalid date: 2023-02-30");
    }

    #[test]
    fn missing_lunar_day_is_invalid_date() {
        let date = LunarDate::new(2024, 1, 30, false).unwrap();
        let e: EngineError = ConversionError::DayOutOfRange { date, days: 29 }.into();
        assert_eq!(
            e,
            EngineError::InvalidDate(CalendarError::InvalidDate {
                year: 2024,
                month: 1,
                day: 30
            })
        );
        let e: EngineError = ConversionError::Unavailable("offline".into()).into();
        assert!(matches!(e, EngineError::ConversionFailure(_)));
    }

    #[test]
    fn classifier_config_errors_map_through() {
        let e: EngineError = ClassifyError::InvalidConfig("bad").into();
        assert_eq!(e, EngineError::InvalidConfig("bad"));
        let e: EngineError = ClassifyError::Parse("eof".into()).into();
        assert!(matches!(e, EngineError::ConfigLoad(_)));
    }
}
