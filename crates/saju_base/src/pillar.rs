//! Four-pillar (사주) calculation from a solar date and hour slot.
//!
//! - Year: sexagenary year of the solar year (boundary at Ipchun).
//! - Month: branch fixed by the solar-term month (Ipchun month = In 寅);
//!   stem from the year stem via [`month_stem_start`], advancing one per month.
//! - Day: sexagenary day from the Julian Day Number.
//! - Hour: branch equals the slot; stem from the day stem via
//!   [`hour_stem_start`], advancing one per slot.

use serde::Serialize;
use saju_time::{CalendarError, HourSlot, SolarDate, TimeSlot, solar_month, solar_year};

use crate::branch::Branch;
use crate::sexagenary::Sexagenary;
use crate::stem::Stem;

/// Role of a pillar within the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 roles in chart order.
pub const ALL_ROLES: [PillarRole; 4] = [
    PillarRole::Year,
    PillarRole::Month,
    PillarRole::Day,
    PillarRole::Hour,
];

impl PillarRole {
    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }
}

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Position of this pair in the 60-cycle. Every computed pillar has one.
    pub const fn sexagenary(self) -> Option<Sexagenary> {
        Sexagenary::from_parts(self.stem, self.branch)
    }
}

impl From<Sexagenary> for Pillar {
    fn from(s: Sexagenary) -> Self {
        Self::new(s.stem(), s.branch())
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// One pillar per role. The day stem is the reference point ("self") for
/// every relational computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

impl FourPillars {
    pub const fn get(&self, role: PillarRole) -> Pillar {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }

    /// Pillars in chart order (year, month, day, hour).
    pub const fn as_array(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Stem of the first solar month (In 寅) in a year with the given year stem.
///
/// Gap/Gi → Byeong, Eul/Gyeong → Mu, Byeong/Sin → Gyeong,
/// Jeong/Im → Im, Mu/Gye → Gap.
pub const fn month_stem_start(year_stem: Stem) -> Stem {
    match year_stem {
        Stem::Gap | Stem::Gi => Stem::Byeong,
        Stem::Eul | Stem::Gyeong => Stem::Mu,
        Stem::Byeong | Stem::Sin => Stem::Gyeong,
        Stem::Jeong | Stem::Im => Stem::Im,
        Stem::Mu | Stem::Gye => Stem::Gap,
    }
}

/// Stem of the Ja (子) hour, slot 0, on a day with the given day stem.
///
/// Gap/Gi → Gap, Eul/Gyeong → Byeong, Byeong/Sin → Mu,
/// Jeong/Im → Gyeong, Mu/Gye → Im.
pub const fn hour_stem_start(day_stem: Stem) -> Stem {
    match day_stem {
        Stem::Gap | Stem::Gi => Stem::Gap,
        Stem::Eul | Stem::Gyeong => Stem::Byeong,
        Stem::Byeong | Stem::Sin => Stem::Mu,
        Stem::Jeong | Stem::Im => Stem::Gyeong,
        Stem::Mu | Stem::Gye => Stem::Im,
    }
}

/// Year pillar for a solar date.
pub fn year_pillar(date: SolarDate) -> Pillar {
    Sexagenary::for_solar_year(solar_year(date)).into()
}

/// Month pillar for a solar date, given that date's year stem.
pub fn month_pillar(date: SolarDate, year_stem: Stem) -> Pillar {
    let month = solar_month(date);
    // The Ipchun month is always In (寅).
    let branch = Branch::In.advance(month.index);
    let stem = month_stem_start(year_stem).advance(month.index);
    Pillar::new(stem, branch)
}

/// Day pillar for a solar date.
pub fn day_pillar(date: SolarDate) -> Pillar {
    Sexagenary::for_julian_day(date.julian_day_number()).into()
}

/// Hour pillar for a slot on a day with the given day stem.
pub const fn hour_pillar(slot: HourSlot, day_stem: Stem) -> Pillar {
    Pillar::new(
        hour_stem_start(day_stem).advance(slot.index()),
        Branch::from_index(slot.index()),
    )
}

/// Compute the four pillars for a solar date and time slot.
///
/// `TimeSlot::Unknown` resolves to [`saju_time::UNKNOWN_TIME_SLOT`].
/// Fails with [`CalendarError::UnsupportedYearRange`] outside the
/// solar-term table window.
pub fn compute_pillars(date: SolarDate, time: TimeSlot) -> Result<FourPillars, CalendarError> {
    let date = date.check_supported()?;
    let slot = time.resolve();

    let year = year_pillar(date);
    let month = month_pillar(date, year.stem);
    let day = day_pillar(date);
    let hour = hour_pillar(slot, day.stem);

    tracing::trace!(%date, slot = slot.index(), %year, %month, %day, %hour, "computed pillars");

    Ok(FourPillars {
        year,
        month,
        day,
        hour,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> SolarDate {
        SolarDate::new(y, m, d).unwrap()
    }

    fn slot(i: u8) -> TimeSlot {
        TimeSlot::Known(HourSlot::new(i).unwrap())
    }

    #[test]
    fn month_start_table_matches_formula() {
        // start = 2 * (year_stem mod 5) + 2
        for i in 0..10u8 {
            let s = Stem::from_index(i);
            assert_eq!(month_stem_start(s).index(), (2 * (i % 5) + 2) % 10);
        }
    }

    #[test]
    fn hour_start_table_matches_formula() {
        // start = 2 * (day_stem mod 5)
        for i in 0..10u8 {
            let s = Stem::from_index(i);
            assert_eq!(hour_stem_start(s).index(), (2 * (i % 5)) % 10);
        }
    }

    #[test]
    fn gapjin_new_year_2024() {
        let p = compute_pillars(date(2024, 2, 10), slot(0)).unwrap();
        assert_eq!(p.to_string(), "甲辰 丙寅 甲辰 甲子");
    }

    #[test]
    fn j2000_noon() {
        let p = compute_pillars(date(2000, 1, 1), slot(6)).unwrap();
        assert_eq!(p.to_string(), "己卯 丙子 戊午 戊午");
    }

    #[test]
    fn ipchun_switches_year_and_month() {
        let before = compute_pillars(date(1984, 2, 3), slot(6)).unwrap();
        let after = compute_pillars(date(1984, 2, 4), slot(6)).unwrap();
        assert_eq!(before.year.to_string(), "癸亥");
        assert_eq!(before.month.to_string(), "乙丑");
        assert_eq!(after.year.to_string(), "甲子");
        assert_eq!(after.month.to_string(), "丙寅");
    }

    #[test]
    fn every_pillar_is_in_the_cycle() {
        let p = compute_pillars(date(1975, 8, 8), slot(9)).unwrap();
        for pillar in p.as_array() {
            assert!(pillar.sexagenary().is_some(), "{pillar} has mixed parity");
        }
    }

    #[test]
    fn unknown_time_matches_noon_slot() {
        let d = date(1990, 5, 15);
        let unknown = compute_pillars(d, TimeSlot::Unknown).unwrap();
        let noon = compute_pillars(d, TimeSlot::Known(saju_time::UNKNOWN_TIME_SLOT)).unwrap();
        assert_eq!(unknown, noon);
        assert_eq!(unknown.hour.branch, Branch::O);
    }

    #[test]
    fn rejects_unsupported_year() {
        assert!(matches!(
            compute_pillars(date(1850, 6, 1), TimeSlot::Unknown),
            Err(CalendarError::UnsupportedYearRange { year: 1850, .. })
        ));
    }

    #[test]
    fn role_accessors() {
        let p = compute_pillars(date(2024, 2, 10), slot(0)).unwrap();
        for role in ALL_ROLES {
            assert_eq!(p.get(role), p.as_array()[role.index() as usize]);
        }
        assert_eq!(p.day_stem(), Stem::Gap);
    }
}
