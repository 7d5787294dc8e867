//! Ten-god (십신) relations between the day stem and every other glyph.
//!
//! A glyph's relation to the day stem is fixed by two facts:
//! - which of the five element relations holds (same, day generates glyph,
//!   glyph generates day, day overcomes glyph, glyph overcomes day), and
//! - whether the polarities match.
//!
//! The 5 × 2 pairs partition all comparisons into exactly ten categories.
//!
//! Branch glyphs are compared through the branch's own element and polarity
//! (Ja = Yang Water, Chuk = Yin Earth, ...), not through hidden stems.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::pillar::{ALL_ROLES, FourPillars, PillarRole};
use crate::stem::Stem;

/// Element relation from the day stem's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RelationKind {
    /// Same element.
    Same,
    /// Day stem generates the glyph.
    GeneratesOut,
    /// Glyph generates the day stem.
    GeneratesIn,
    /// Day stem overcomes the glyph.
    OvercomesOut,
    /// Glyph overcomes the day stem.
    OvercomesIn,
}

/// Whether two glyphs share polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PolarityMatch {
    Same,
    Different,
}

impl PolarityMatch {
    pub fn of(a: Polarity, b: Polarity) -> Self {
        if a == b { Self::Same } else { Self::Different }
    }
}

/// Relation kind between the day stem's element and another element.
///
/// Total: any two distinct elements stand in exactly one of the four
/// directed relations.
pub const fn relation_kind(day: Element, other: Element) -> RelationKind {
    if day as u8 == other as u8 {
        RelationKind::Same
    } else if day.generates() as u8 == other as u8 {
        RelationKind::GeneratesOut
    } else if other.generates() as u8 == day as u8 {
        RelationKind::GeneratesIn
    } else if day.overcomes() as u8 == other as u8 {
        RelationKind::OvercomesOut
    } else {
        RelationKind::OvercomesIn
    }
}

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TenGod {
    /// 비견: same element, same polarity.
    Peer,
    /// 겁재: same element, different polarity.
    Rival,
    /// 식신: day generates glyph, same polarity.
    OutputSame,
    /// 상관: day generates glyph, different polarity.
    OutputDiff,
    /// 편재: day overcomes glyph, same polarity.
    AssertSame,
    /// 정재: day overcomes glyph, different polarity.
    AssertDiff,
    /// 편관: glyph overcomes day, same polarity.
    PressureSame,
    /// 정관: glyph overcomes day, different polarity.
    PressureDiff,
    /// 편인: glyph generates day, same polarity.
    InputSame,
    /// 정인: glyph generates day, different polarity.
    InputDiff,
}

/// All 10 ten-god categories in order.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Peer,
    TenGod::Rival,
    TenGod::OutputSame,
    TenGod::OutputDiff,
    TenGod::AssertSame,
    TenGod::AssertDiff,
    TenGod::PressureSame,
    TenGod::PressureDiff,
    TenGod::InputSame,
    TenGod::InputDiff,
];

impl TenGod {
    pub const fn index(self) -> u8 {
        match self {
            Self::Peer => 0,
            Self::Rival => 1,
            Self::OutputSame => 2,
            Self::OutputDiff => 3,
            Self::AssertSame => 4,
            Self::AssertDiff => 5,
            Self::PressureSame => 6,
            Self::PressureDiff => 7,
            Self::InputSame => 8,
            Self::InputDiff => 9,
        }
    }

    /// Category for a relation kind and polarity match.
    pub const fn from_parts(kind: RelationKind, polarity: PolarityMatch) -> Self {
        use PolarityMatch as P;
        use RelationKind as K;
        match (kind, polarity) {
            (K::Same, P::Same) => Self::Peer,
            (K::Same, P::Different) => Self::Rival,
            (K::GeneratesOut, P::Same) => Self::OutputSame,
            (K::GeneratesOut, P::Different) => Self::OutputDiff,
            (K::OvercomesOut, P::Same) => Self::AssertSame,
            (K::OvercomesOut, P::Different) => Self::AssertDiff,
            (K::OvercomesIn, P::Same) => Self::PressureSame,
            (K::OvercomesIn, P::Different) => Self::PressureDiff,
            (K::GeneratesIn, P::Same) => Self::InputSame,
            (K::GeneratesIn, P::Different) => Self::InputDiff,
        }
    }

    /// Inverse of [`from_parts`](Self::from_parts).
    pub const fn parts(self) -> (RelationKind, PolarityMatch) {
        use PolarityMatch as P;
        use RelationKind as K;
        match self {
            Self::Peer => (K::Same, P::Same),
            Self::Rival => (K::Same, P::Different),
            Self::OutputSame => (K::GeneratesOut, P::Same),
            Self::OutputDiff => (K::GeneratesOut, P::Different),
            Self::AssertSame => (K::OvercomesOut, P::Same),
            Self::AssertDiff => (K::OvercomesOut, P::Different),
            Self::PressureSame => (K::OvercomesIn, P::Same),
            Self::PressureDiff => (K::OvercomesIn, P::Different),
            Self::InputSame => (K::GeneratesIn, P::Same),
            Self::InputDiff => (K::GeneratesIn, P::Different),
        }
    }

    /// Hangul name.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Peer => "비견",
            Self::Rival => "겁재",
            Self::OutputSame => "식신",
            Self::OutputDiff => "상관",
            Self::AssertSame => "편재",
            Self::AssertDiff => "정재",
            Self::PressureSame => "편관",
            Self::PressureDiff => "정관",
            Self::InputSame => "편인",
            Self::InputDiff => "정인",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Peer => "Peer",
            Self::Rival => "Rival",
            Self::OutputSame => "Output-Same",
            Self::OutputDiff => "Output-Diff",
            Self::AssertSame => "Assert-Same",
            Self::AssertDiff => "Assert-Diff",
            Self::PressureSame => "Pressure-Same",
            Self::PressureDiff => "Pressure-Diff",
            Self::InputSame => "Input-Same",
            Self::InputDiff => "Input-Diff",
        }
    }
}

/// One of the eight glyphs of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Glyph {
    Stem(Stem),
    Branch(Branch),
}

impl Glyph {
    pub const fn element(self) -> Element {
        match self {
            Self::Stem(s) => s.element(),
            Self::Branch(b) => b.element(),
        }
    }

    pub const fn polarity(self) -> Polarity {
        match self {
            Self::Stem(s) => s.polarity(),
            Self::Branch(b) => b.polarity(),
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Stem(s) => s.hanja(),
            Self::Branch(b) => b.hanja(),
        }
    }
}

/// Ten-god category of `glyph` relative to `day_stem`.
pub fn ten_god(day_stem: Stem, glyph: Glyph) -> TenGod {
    let kind = relation_kind(day_stem.element(), glyph.element());
    let polarity = PolarityMatch::of(day_stem.polarity(), glyph.polarity());
    TenGod::from_parts(kind, polarity)
}

/// A glyph together with the pillar it sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedGlyph {
    pub role: PillarRole,
    pub glyph: Glyph,
}

/// All eight glyphs in chart order (each pillar's stem, then its branch).
pub fn glyphs(pillars: &FourPillars) -> [PlacedGlyph; 8] {
    let mut out = [PlacedGlyph {
        role: PillarRole::Year,
        glyph: Glyph::Stem(Stem::Gap),
    }; 8];
    for role in ALL_ROLES {
        let p = pillars.get(role);
        let i = role.index() as usize * 2;
        out[i] = PlacedGlyph {
            role,
            glyph: Glyph::Stem(p.stem),
        };
        out[i + 1] = PlacedGlyph {
            role,
            glyph: Glyph::Branch(p.branch),
        };
    }
    out
}

/// The seven glyphs compared against the day stem (every glyph except the
/// day stem itself), each with its ten-god category.
pub fn ten_gods(pillars: &FourPillars) -> Vec<(PlacedGlyph, TenGod)> {
    let day_stem = pillars.day_stem();
    glyphs(pillars)
        .into_iter()
        .filter(|g| !(g.role == PillarRole::Day && matches!(g.glyph, Glyph::Stem(_))))
        .map(|g| (g, ten_god(day_stem, g.glyph)))
        .collect()
}
