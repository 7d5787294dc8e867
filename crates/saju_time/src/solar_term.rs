//! Sectional solar terms (절기) that open each solar month.
//!
//! The solar year is divided into 12 months, each opened by one of the
//! "sectional" terms. The first month opens at Ipchun (입춘, start of
//! spring), which is also the year boundary for the year pillar.
//!
//! The table uses a fixed Gregorian day per term: the median Korean
//! Standard Time date of that term over 1900-2100. A date on or after the
//! table day belongs to the new month. The true term can fall a day either
//! side of the table day, so a chart within a day of a term may disagree
//! with an almanac on the month pillar.

use serde::Serialize;

use crate::civil::SolarDate;

/// The 12 sectional solar terms, starting from Ipchun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Ipchun,
    Gyeongchip,
    Cheongmyeong,
    Ipha,
    Mangjong,
    Soseo,
    Ipchu,
    Baengno,
    Hallo,
    Ipdong,
    Daeseol,
    Sohan,
}

/// All 12 sectional terms in solar-month order (index 0 = Ipchun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Ipchun,
    SolarTerm::Gyeongchip,
    SolarTerm::Cheongmyeong,
    SolarTerm::Ipha,
    SolarTerm::Mangjong,
    SolarTerm::Soseo,
    SolarTerm::Ipchu,
    SolarTerm::Baengno,
    SolarTerm::Hallo,
    SolarTerm::Ipdong,
    SolarTerm::Daeseol,
    SolarTerm::Sohan,
];

/// Median day of month (KST, 1900-2100) on which the sectional term falls,
/// indexed by Gregorian month - 1 (Jan = Sohan, Feb = Ipchun, ...).
const TERM_DAY_BY_GREGORIAN_MONTH: [u32; 12] = [6, 4, 6, 5, 5, 6, 7, 7, 8, 8, 7, 7];

impl SolarTerm {
    /// 0-based index in solar-month order (Ipchun=0 .. Sohan=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ipchun => 0,
            Self::Gyeongchip => 1,
            Self::Cheongmyeong => 2,
            Self::Ipha => 3,
            Self::Mangjong => 4,
            Self::Soseo => 5,
            Self::Ipchu => 6,
            Self::Baengno => 7,
            Self::Hallo => 8,
            Self::Ipdong => 9,
            Self::Daeseol => 10,
            Self::Sohan => 11,
        }
    }

    /// Hangul name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ipchun => "입춘",
            Self::Gyeongchip => "경칩",
            Self::Cheongmyeong => "청명",
            Self::Ipha => "입하",
            Self::Mangjong => "망종",
            Self::Soseo => "소서",
            Self::Ipchu => "입추",
            Self::Baengno => "백로",
            Self::Hallo => "한로",
            Self::Ipdong => "입동",
            Self::Daeseol => "대설",
            Self::Sohan => "소한",
        }
    }

    /// Gregorian month (1-12) in which the term falls.
    pub const fn gregorian_month(self) -> u32 {
        // Ipchun is in February; each later term is one month on, wrapping at 12.
        (self.index() as u32 + 1) % 12 + 1
    }

    /// Fixed day of the Gregorian month on which the term begins.
    pub const fn start_day(self) -> u32 {
        TERM_DAY_BY_GREGORIAN_MONTH[self.gregorian_month() as usize - 1]
    }
}

/// Solar month in force on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SolarMonth {
    /// The sectional term that opened this month.
    pub term: SolarTerm,
    /// 0-based month index counted from the Ipchun month.
    pub index: u8,
}

/// Determine which solar month `date` falls in.
pub fn solar_month(date: SolarDate) -> SolarMonth {
    let m = date.month();
    // Gregorian month whose term has most recently passed (0 = previous December).
    let opened = if date.day() >= TERM_DAY_BY_GREGORIAN_MONTH[m as usize - 1] {
        m
    } else {
        m - 1
    };
    // February (Ipchun) maps to index 0.
    let index = ((opened as i32 - 2).rem_euclid(12)) as u8;
    SolarMonth {
        term: ALL_SOLAR_TERMS[index as usize],
        index,
    }
}

/// The solar year containing `date`: the calendar year whose Ipchun has
/// most recently passed.
pub fn solar_year(date: SolarDate) -> i32 {
    let ipchun_day = SolarTerm::Ipchun.start_day();
    if date.month() > 2 || (date.month() == 2 && date.day() >= ipchun_day) {
        date.year()
    } else {
        date.year() - 1
    }
}
