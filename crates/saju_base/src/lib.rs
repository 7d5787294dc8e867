//! Symbolic core of the four-pillars engine.
//!
//! This crate provides:
//! - The five elements with their generating and overcoming cycles
//! - Heavenly stems, earthly branches, and the 60-term sexagenary cycle
//! - Four-pillar calculation from a solar date and hour slot
//! - Ten-god relations to the day stem and the element/ten-god tallies
//!
//! Every function here is pure; lookup tables are `const` and freely
//! shared across threads.

pub mod branch;
pub mod element;
pub mod pillar;
pub mod sexagenary;
pub mod stem;
pub mod tally;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use pillar::{
    ALL_ROLES, FourPillars, Pillar, PillarRole, compute_pillars, day_pillar, hour_pillar,
    hour_stem_start, month_pillar, month_stem_start, year_pillar,
};
pub use sexagenary::{CYCLE_LEN, DAY_EPOCH_JDN, Sexagenary, YEAR_EPOCH};
pub use stem::{ALL_STEMS, Stem};
pub use tally::{ElementTally, TenGodTally, element_tally, tally, ten_god_tally};
pub use ten_god::{
    ALL_TEN_GODS, Glyph, PlacedGlyph, PolarityMatch, RelationKind, TenGod, glyphs,
    relation_kind, ten_god, ten_gods,
};
