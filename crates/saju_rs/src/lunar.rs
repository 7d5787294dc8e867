//! Lunar calendar input and the conversion seam.
//!
//! The pillar calculator only ever sees solar dates. Lunar input is handed
//! to a [`LunarConverter`] first; the engine re-validates what comes back.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use saju_time::{CalendarError, SolarDate};

/// Which calendar the caller's date is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar { leap_month: bool },
}

/// A lunar date as the caller wrote it. Lunar months have 29 or 30 days;
/// whether a given month really has 30 is only known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunarDate {
    year: i32,
    month: u32,
    day: u32,
    leap_month: bool,
}

impl LunarDate {
    pub fn new(year: i32, month: u32, day: u32, leap_month: bool) -> Result<Self, CalendarError> {
        if !(1..=12).contains(&month) || !(1..=30).contains(&day) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self {
            year,
            month,
            day,
            leap_month,
        })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    pub const fn is_leap_month(self) -> bool {
        self.leap_month
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}{}",
            self.year,
            self.month,
            self.day,
            leap_suffix(&self.leap_month)
        )
    }
}

fn leap_suffix(leap_month: &bool) -> &'static str {
    if *leap_month { " (leap)" } else { "" }
}

/// Unvalidated solar triple returned by a converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolarParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<SolarDate> for SolarParts {
    fn from(d: SolarDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConversionError {
    /// No converter is configured, or it could not be reached.
    #[error("lunar converter unavailable: {0}")]
    Unavailable(String),
    /// The converter has no data for this lunar month.
    #[error("no data for lunar month {year}-{month:02}{}", leap_suffix(.leap_month))]
    NotCovered { year: i32, month: u32, leap_month: bool },
    /// Day 30 requested in a 29-day month.
    #[error("lunar {date} does not exist (month has {days} days)")]
    DayOutOfRange { date: LunarDate, days: u32 },
    /// The converter answered with something that is not a real solar date.
    #[error("converter returned inconsistent date {0:?}")]
    Inconsistent(SolarParts),
    /// A conversion table could not be loaded.
    #[error("conversion table: {0}")]
    Table(String),
}

/// Lunar-to-solar conversion collaborator.
///
/// Implementations must be [`Send`] + [`Sync`] so one engine can be shared
/// across threads.
pub trait LunarConverter: Send + Sync {
    fn name(&self) -> &'static str;
    fn to_solar(&self, date: LunarDate) -> Result<SolarParts, ConversionError>;
}

impl<T: LunarConverter + ?Sized> LunarConverter for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn to_solar(&self, date: LunarDate) -> Result<SolarParts, ConversionError> {
        (**self).to_solar(date)
    }
}

/// Converter for solar-only deployments. Every lunar request fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarConverter;

impl LunarConverter for NoLunarConverter {
    fn name(&self) -> &'static str {
        "none"
    }

    fn to_solar(&self, _date: LunarDate) -> Result<SolarParts, ConversionError> {
        Err(ConversionError::Unavailable(
            "no lunar conversion table configured".into(),
        ))
    }
}

/// One lunar month in a conversion table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LunarMonth {
    pub year: i32,
    pub month: u32,
    pub leap_month: bool,
    /// Solar date of day 1.
    pub start: SolarDate,
    /// 29 or 30.
    pub days: u32,
}

#[derive(Deserialize)]
struct TableFile {
    #[serde(default)]
    month: Vec<MonthEntry>,
}

#[derive(Deserialize)]
struct MonthEntry {
    year: i32,
    month: u32,
    #[serde(default)]
    leap: bool,
    start: String,
    days: u32,
}

/// Offline converter backed by a table of month starts.
///
/// ```toml
/// [[month]]
/// year = 2023
/// month = 2
/// leap = true
/// start = "2023-03-22"
/// days = 29
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableConverter {
    months: HashMap<(i32, u32, bool), LunarMonth>,
}

impl TableConverter {
    pub fn from_months(months: impl IntoIterator<Item = LunarMonth>) -> Result<Self, ConversionError> {
        let mut table = HashMap::new();
        for m in months {
            if !(1..=12).contains(&m.month) {
                return Err(ConversionError::Table(format!(
                    "{}: month {} out of range",
                    m.year, m.month
                )));
            }
            if !(29..=30).contains(&m.days) {
                return Err(ConversionError::Table(format!(
                    "{}-{:02}: month length {} (expected 29 or 30)",
                    m.year, m.month, m.days
                )));
            }
            if table.insert((m.year, m.month, m.leap_month), m).is_some() {
                return Err(ConversionError::Table(format!(
                    "{}-{:02}: duplicate entry",
                    m.year, m.month
                )));
            }
        }
        Ok(Self { months: table })
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConversionError> {
        let file: TableFile =
            toml::from_str(contents).map_err(|e| ConversionError::Table(e.to_string()))?;
        let mut months = Vec::with_capacity(file.month.len());
        for entry in file.month {
            let start: SolarDate = entry
                .start
                .parse()
                .map_err(|e: CalendarError| ConversionError::Table(e.to_string()))?;
            months.push(LunarMonth {
                year: entry.year,
                month: entry.month,
                leap_month: entry.leap,
                start,
                days: entry.days,
            });
        }
        Self::from_months(months)
    }

    pub fn load(path: &Path) -> Result<Self, ConversionError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConversionError::Table(format!("{}: {e}", path.display())))?;
        let table = Self::from_toml_str(&contents)?;
        tracing::debug!(path = %path.display(), months = table.len(), "loaded lunar table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

impl LunarConverter for TableConverter {
    fn name(&self) -> &'static str {
        "table"
    }

    fn to_solar(&self, date: LunarDate) -> Result<SolarParts, ConversionError> {
        let month = self
            .months
            .get(&(date.year, date.month, date.leap_month))
            .ok_or(ConversionError::NotCovered {
                year: date.year,
                month: date.month,
                leap_month: date.leap_month,
            })?;
        if date.day > month.days {
            return Err(ConversionError::DayOutOfRange {
                date,
                days: month.days,
            });
        }
        let jdn = month.start.julian_day_number() + i64::from(date.day) - 1;
        SolarDate::from_julian_day_number(jdn)
            .map(SolarParts::from)
            .map_err(|e| ConversionError::Table(e.to_string()))
    }
}
