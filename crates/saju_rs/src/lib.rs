//! High-level four-pillars engine.
//!
//! Wraps the calendar, pillar, and classifier layers behind one call that
//! takes birth data as the caller wrote it (solar or lunar, known or
//! unknown time) and returns an immutable [`Reading`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init(EngineConfig::default(), NoLunarConverter).expect("engine init");
//!
//! let date: SolarDate = "1990-05-15".parse().unwrap();
//! let r = solar_reading(date, TimeSlot::Unknown).unwrap();
//! println!("{} {}", r.pillars, r.type_code);
//! ```

pub mod convenience;
pub mod engine;
pub mod error;
pub mod global;
pub mod lunar;

pub use convenience::{lunar_reading, pillars, reading, solar_reading, stats, tallies, type_code};
pub use engine::{BirthInput, Engine, EngineConfig, EngineStats, Reading};
pub use error::EngineError;
pub use global::{init, is_initialized};
pub use lunar::{
    CalendarKind, ConversionError, LunarConverter, LunarDate, LunarMonth, NoLunarConverter,
    SolarParts, TableConverter,
};

// Re-export the layer types so callers need only this crate.
pub use saju_base::{
    Branch, Element, ElementTally, FourPillars, Pillar, PillarRole, Polarity, Stem, TenGod,
    TenGodTally,
};
pub use saju_classify::{AxisScores, ClassifierConfig, TypeCode};
pub use saju_time::{CalendarError, HourSlot, SolarDate, TimeSlot, UNKNOWN_TIME_SLOT};
