//! Error types for classifier configuration and calibration.

use saju_time::CalendarError;
use thiserror::Error;

/// Errors from config loading, type-code parsing, or calibration runs.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ClassifyError {
    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
    /// Config TOML could not be parsed.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Config values are inconsistent.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Calibration span is empty or malformed.
    #[error("invalid calibration span: {0}")]
    InvalidSpan(&'static str),
    /// Text is not one of the 16 type codes.
    #[error("invalid type code {0:?}")]
    InvalidTypeCode(String),
    /// Calendar error while sampling dates.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
}

impl From<std::io::Error> for ClassifyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<toml::de::Error> for ClassifyError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
