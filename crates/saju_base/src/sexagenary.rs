//! The 60-term sexagenary (육십갑자) cycle.
//!
//! Stems cycle every 10 and branches every 12, both advancing by one per
//! step, so a stem-branch pair repeats every lcm(10, 12) = 60 steps. Only
//! pairs with matching parity occur.
//!
//! Epochs:
//! - Day: JDN 2433191 (1949-10-01) is a Gap-Ja (甲子) day.
//! - Year: 1984 is a Gap-Ja (甲子) year, counted from its Ipchun.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::branch::Branch;
use crate::stem::Stem;

/// Length of the sexagenary cycle.
pub const CYCLE_LEN: u8 = 60;

/// A Julian Day Number whose day pillar is Gap-Ja (1949-10-01).
pub const DAY_EPOCH_JDN: i64 = 2_433_191;

/// A solar year whose year pillar is Gap-Ja.
pub const YEAR_EPOCH: i32 = 1984;

/// Position in the 60-term cycle (0 = Gap-Ja .. 59 = Gye-Hae).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Sexagenary(u8);

impl Sexagenary {
    /// Cycle position at `index` modulo 60.
    pub const fn from_index(index: u8) -> Self {
        Self(index % CYCLE_LEN)
    }

    /// Combine a stem and branch. Returns `None` when their parities
    /// differ (such pairs never occur in the cycle).
    pub const fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        let s = stem.index();
        let b = branch.index();
        if s % 2 != b % 2 {
            return None;
        }
        // Solve i ≡ s (mod 10), i ≡ b (mod 12): step through the six
        // candidates sharing the stem.
        let mut i = s;
        while i < CYCLE_LEN {
            if i % 12 == b {
                return Some(Self(i));
            }
            i += 10;
        }
        None
    }

    /// Day pillar for a Julian Day Number.
    pub const fn for_julian_day(jdn: i64) -> Self {
        Self((jdn - DAY_EPOCH_JDN).rem_euclid(CYCLE_LEN as i64) as u8)
    }

    /// Year pillar for a solar year (already adjusted for the Ipchun boundary).
    pub const fn for_solar_year(year: i32) -> Self {
        Self((year - YEAR_EPOCH).rem_euclid(CYCLE_LEN as i32) as u8)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn stem(self) -> Stem {
        Stem::from_index(self.0 % 10)
    }

    pub const fn branch(self) -> Branch {
        Branch::from_index(self.0 % 12)
    }

    /// Next position, wrapping after Gye-Hae.
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % CYCLE_LEN)
    }

    /// Hangul name, e.g. "갑자".
    pub fn name(self) -> String {
        format!("{}{}", self.stem().hangul(), self.branch().hangul())
    }

    /// Hanja name, e.g. "甲子".
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem().hanja(), self.branch().hanja())
    }
}

impl Display for Sexagenary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem().hanja(), self.branch().hanja())
    }
}
