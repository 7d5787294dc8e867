//! Element and ten-god counts over a chart.

use std::ops::Index;

use serde::Serialize;

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::FourPillars;
use crate::ten_god::{ALL_TEN_GODS, TenGod, glyphs, ten_gods};

/// Glyph count per element over all 8 glyphs. Always sums to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ElementTally {
    counts: [u8; 5],
}

impl ElementTally {
    pub fn count(&self, element: Element) -> u8 {
        self.counts[element.index() as usize]
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// Number of elements with at least one glyph.
    pub fn present_count(&self) -> u8 {
        self.counts.iter().filter(|&&c| c > 0).count() as u8
    }

    /// Largest single-element count.
    pub fn max_count(&self) -> u8 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(element, count)` pairs in element order.
    pub fn iter(&self) -> impl Iterator<Item = (Element, u8)> + '_ {
        ALL_ELEMENTS.iter().map(|&e| (e, self.count(e)))
    }
}

impl Index<Element> for ElementTally {
    type Output = u8;

    fn index(&self, element: Element) -> &u8 {
        &self.counts[element.index() as usize]
    }
}

/// Count per ten-god category over the 7 non-day-stem glyphs. Always sums to 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TenGodTally {
    counts: [u8; 10],
}

impl TenGodTally {
    pub fn count(&self, category: TenGod) -> u8 {
        self.counts[category.index() as usize]
    }

    /// Sum of counts for several categories.
    pub fn sum_of(&self, categories: &[TenGod]) -> u8 {
        categories.iter().map(|&c| self.count(c)).sum()
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }

    /// `(category, count)` pairs in category order.
    pub fn iter(&self) -> impl Iterator<Item = (TenGod, u8)> + '_ {
        ALL_TEN_GODS.iter().map(|&c| (c, self.count(c)))
    }
}

impl Index<TenGod> for TenGodTally {
    type Output = u8;

    fn index(&self, category: TenGod) -> &u8 {
        &self.counts[category.index() as usize]
    }
}

/// Count elements over all 8 glyphs.
pub fn element_tally(pillars: &FourPillars) -> ElementTally {
    let mut tally = ElementTally::default();
    for placed in glyphs(pillars) {
        tally.counts[placed.glyph.element().index() as usize] += 1;
    }
    tally
}

/// Count ten-god categories over the 7 glyphs other than the day stem.
pub fn ten_god_tally(pillars: &FourPillars) -> TenGodTally {
    let mut tally = TenGodTally::default();
    for (_, category) in ten_gods(pillars) {
        tally.counts[category.index() as usize] += 1;
    }
    tally
}

/// Both tallies for a chart. This is the only place glyph relations are
/// counted; every consumer goes through it.
pub fn tally(pillars: &FourPillars) -> (ElementTally, TenGodTally) {
    (element_tally(pillars), ten_god_tally(pillars))
}
