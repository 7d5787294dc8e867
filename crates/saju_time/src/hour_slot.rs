//! Two-hour branch windows (시) and the unknown-time policy.
//!
//! The day is split into 12 windows of two hours, shifted by 30 minutes
//! against the clock: slot 0 covers 23:30-01:29, slot 1 covers 01:30-03:29,
//! and so on up to slot 11 at 21:30-23:29. Slot 0 is assigned to the civil
//! date it is given with; there is no day roll-over at 23:30.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Minutes by which slot windows are shifted against the whole-hour clock.
const SLOT_SHIFT_MINUTES: u32 = 30;

/// A validated hour slot index (0..=11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HourSlot(u8);

/// Slot used when the birth time is unknown: the noon-equivalent window
/// (slot 6, 11:30-13:29).
///
/// This is a policy, not a calendar fact. It is the only default the engine
/// ever substitutes, and it is applied in [`TimeSlot::resolve`] alone.
pub const UNKNOWN_TIME_SLOT: HourSlot = HourSlot(6);

impl HourSlot {
    /// Validate a slot index.
    pub const fn new(index: u8) -> Result<Self, CalendarError> {
        if index < 12 {
            Ok(Self(index))
        } else {
            Err(CalendarError::InvalidHourSlot(index))
        }
    }

    /// Slot containing a local clock time.
    pub fn from_clock(hour: u32, minute: u32) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 {
            return Err(CalendarError::InvalidClock { hour, minute });
        }
        let shifted = hour * 60 + minute + SLOT_SHIFT_MINUTES;
        Ok(Self(((shifted / 120) % 12) as u8))
    }

    /// 0-based slot index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Inclusive start and end clock labels, e.g. `("23:30", "01:29")`.
    pub fn window(self) -> (String, String) {
        let start = (self.0 as u32 * 120 + 24 * 60 - SLOT_SHIFT_MINUTES) % (24 * 60);
        let end = (start + 119) % (24 * 60);
        (
            format!("{:02}:{:02}", start / 60, start % 60),
            format!("{:02}:{:02}", end / 60, end % 60),
        )
    }

    /// All 12 slots in order.
    pub fn all() -> impl Iterator<Item = HourSlot> {
        (0..12).map(HourSlot)
    }
}

impl TryFrom<u8> for HourSlot {
    type Error = CalendarError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<HourSlot> for u8 {
    fn from(slot: HourSlot) -> Self {
        slot.0
    }
}

impl Display for HourSlot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Birth time as supplied by the caller: a known slot or explicitly unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlot {
    Known(HourSlot),
    Unknown,
}

impl TimeSlot {
    /// The slot to compute with. `Unknown` becomes [`UNKNOWN_TIME_SLOT`].
    pub const fn resolve(self) -> HourSlot {
        match self {
            Self::Known(slot) => slot,
            Self::Unknown => UNKNOWN_TIME_SLOT,
        }
    }

    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl From<HourSlot> for TimeSlot {
    fn from(slot: HourSlot) -> Self {
        Self::Known(slot)
    }
}

impl FromStr for TimeSlot {
    type Err = CalendarError;

    /// Parse `HH:MM`, a bare slot index, or `unknown`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("unknown") {
            return Ok(Self::Unknown);
        }
        if let Some((h, m)) = s.split_once(':') {
            let hour: u32 = h
                .parse()
                .map_err(|e| CalendarError::Parse(format!("hour {h:?}: {e}")))?;
            let minute: u32 = m
                .parse()
                .map_err(|e| CalendarError::Parse(format!("minute {m:?}: {e}")))?;
            return Ok(Self::Known(HourSlot::from_clock(hour, minute)?));
        }
        let index: u8 = s
            .parse()
            .map_err(|e| CalendarError::Parse(format!("slot {s:?}: {e}")))?;
        Ok(Self::Known(HourSlot::new(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_slot_twelve() {
        assert_eq!(HourSlot::new(12), Err(CalendarError::InvalidHourSlot(12)));
        assert!(HourSlot::new(11).is_ok());
    }

    #[test]
    fn clock_boundaries() {
        assert_eq!(HourSlot::from_clock(23, 30).unwrap().index(), 0);
        assert_eq!(HourSlot::from_clock(0, 0).unwrap().index(), 0);
        assert_eq!(HourSlot::from_clock(1, 29).unwrap().index(), 0);
        assert_eq!(HourSlot::from_clock(1, 30).unwrap().index(), 1);
        assert_eq!(HourSlot::from_clock(11, 30).unwrap().index(), 6);
        assert_eq!(HourSlot::from_clock(13, 29).unwrap().index(), 6);
        assert_eq!(HourSlot::from_clock(23, 29).unwrap().index(), 11);
    }

    #[test]
    fn clock_rejects_out_of_range() {
        assert!(HourSlot::from_clock(24, 0).is_err());
        assert!(HourSlot::from_clock(12, 60).is_err());
    }

    #[test]
    fn windows() {
        assert_eq!(
            HourSlot::new(0).unwrap().window(),
            ("23:30".to_string(), "01:29".to_string())
        );
        assert_eq!(
            UNKNOWN_TIME_SLOT.window(),
            ("11:30".to_string(), "13:29".to_string())
        );
        assert_eq!(
            HourSlot::new(11).unwrap().window(),
            ("21:30".to_string(), "23:29".to_string())
        );
    }

    #[test]
    fn unknown_resolves_to_noon_slot() {
        assert_eq!(TimeSlot::Unknown.resolve(), UNKNOWN_TIME_SLOT);
        assert_eq!(UNKNOWN_TIME_SLOT.index(), 6);
    }

    #[test]
    fn parse_time_slot() {
        assert_eq!("unknown".parse::<TimeSlot>().unwrap(), TimeSlot::Unknown);
        assert_eq!(
            "07:45".parse::<TimeSlot>().unwrap(),
            TimeSlot::Known(HourSlot::new(4).unwrap())
        );
        assert_eq!(
            "3".parse::<TimeSlot>().unwrap(),
            TimeSlot::Known(HourSlot::new(3).unwrap())
        );
        assert!("13".parse::<TimeSlot>().is_err());
    }
}
