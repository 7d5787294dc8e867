//! Solar (proleptic Gregorian) civil dates and Julian Day Numbers.
//!
//! `SolarDate` is the only date type the pillar calculator accepts. Every
//! constructor validates through [`SolarDate::new`], so every value in
//! circulation names a day that exists.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// First year accepted by the fixed solar-term boundary table.
pub const FIRST_SUPPORTED_YEAR: i32 = 1900;

/// Last year accepted by the fixed solar-term boundary table.
pub const LAST_SUPPORTED_YEAR: i32 = 2100;

/// Largest Julian Day Number [`SolarDate::from_julian_day_number`] accepts
/// (9999-12-31). The smallest is 0 (-4713-11-24).
pub const MAX_JULIAN_DAY_NUMBER: i64 = 5_373_484;

/// Validated Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawDate", into = "RawDate")]
pub struct SolarDate {
    year: i32,
    month: u32,
    day: u32,
}

#[derive(Serialize, Deserialize)]
struct RawDate {
    year: i32,
    month: u32,
    day: u32,
}

impl TryFrom<RawDate> for SolarDate {
    type Error = CalendarError;

    fn try_from(raw: RawDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl From<SolarDate> for RawDate {
    fn from(d: SolarDate) -> Self {
        Self {
            year: d.year,
            month: d.month,
            day: d.day,
        }
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for an invalid month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

impl SolarDate {
    /// Build a date, rejecting days that do not exist.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
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

    /// Reject years outside [`FIRST_SUPPORTED_YEAR`]..=[`LAST_SUPPORTED_YEAR`].
    pub fn check_supported(self) -> Result<Self, CalendarError> {
        if (FIRST_SUPPORTED_YEAR..=LAST_SUPPORTED_YEAR).contains(&self.year) {
            Ok(self)
        } else {
            Err(CalendarError::UnsupportedYearRange {
                year: self.year,
                first: FIRST_SUPPORTED_YEAR,
                last: LAST_SUPPORTED_YEAR,
            })
        }
    }

    /// Integer Julian Day Number (the day beginning at the civil midnight
    /// of this date carries the JDN of the following noon).
    ///
    /// 2000-01-01 = 2451545.
    pub fn julian_day_number(self) -> i64 {
        let a = (14 - self.month as i64) / 12;
        let y = self.year as i64 + 4800 - a;
        let m = self.month as i64 + 12 * a - 3;
        self.day as i64 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Inverse of [`julian_day_number`](Self::julian_day_number) over
    /// `0..=MAX_JULIAN_DAY_NUMBER`.
    pub fn from_julian_day_number(jdn: i64) -> Result<Self, CalendarError> {
        if !(0..=MAX_JULIAN_DAY_NUMBER).contains(&jdn) {
            return Err(CalendarError::JulianDayOutOfRange(jdn));
        }
        let f = jdn + 1401 + (((4 * jdn + 274_277) / 146_097) * 3) / 4 - 38;
        let e = 4 * f + 3;
        let g = (e % 1461) / 4;
        let h = 5 * g + 2;
        let day = ((h % 153) / 5 + 1) as u32;
        let month = ((h / 153 + 2) % 12 + 1) as u32;
        let year = (e / 1461 - 4716 + (14 - month as i64) / 12) as i32;
        Self::new(year, month, day)
    }

    /// The following calendar day.
    pub fn succ(self) -> Self {
        if self.day < days_in_month(self.year, self.month) {
            Self {
                day: self.day + 1,
                ..self
            }
        } else if self.month < 12 {
            Self {
                month: self.month + 1,
                day: 1,
                ..self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
            }
        }
    }
}

impl Display for SolarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Split `YYYY-MM-DD` into its numeric fields without checking that the
/// day exists. Lunar input goes through this too.
pub fn parse_date_parts(s: &str) -> Result<(i32, u32, u32), CalendarError> {
    let parts: Vec<&str> = s.trim().split('-').collect();
    if parts.len() != 3 {
        return Err(CalendarError::Parse(format!("expected YYYY-MM-DD, got {s}")));
    }
    let year: i32 = parts[0]
        .parse()
        .map_err(|e| CalendarError::Parse(format!("year {:?}: {e}", parts[0])))?;
    let month: u32 = parts[1]
        .parse()
        .map_err(|e| CalendarError::Parse(format!("month {:?}: {e}", parts[1])))?;
    let day: u32 = parts[2]
        .parse()
        .map_err(|e| CalendarError::Parse(format!("day {:?}: {e}", parts[2])))?;
    Ok((year, month, day))
}

impl FromStr for SolarDate {
    type Err = CalendarError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_date_parts(s)?;
        Self::new(year, month, day)
    }
}
