//! Civil-calendar primitives for the four-pillars engine.
//!
//! This crate provides:
//! - Validated Gregorian dates and Julian Day Numbers
//! - The sectional solar-term table that defines solar months and the year boundary
//! - Two-hour slots and the unknown-time default
//!
//! Lunar dates never enter this crate; they are converted to solar dates
//! by an external collaborator first.

pub mod civil;
pub mod error;
pub mod hour_slot;
pub mod solar_term;

pub use civil::{
    FIRST_SUPPORTED_YEAR, LAST_SUPPORTED_YEAR, MAX_JULIAN_DAY_NUMBER, SolarDate, days_in_month,
    is_leap_year, parse_date_parts,
};
pub use error::CalendarError;
pub use hour_slot::{HourSlot, TimeSlot, UNKNOWN_TIME_SLOT};
pub use solar_term::{ALL_SOLAR_TERMS, SolarMonth, SolarTerm, solar_month, solar_year};
