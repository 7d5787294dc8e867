//! The five elements (오행) and yin-yang polarity.
//!
//! Two fixed cycles relate the elements:
//! - Generates (상생): Water → Wood → Fire → Earth → Metal → Water
//! - Overcomes (상극): Water → Fire → Metal → Wood → Earth → Water
//!
//! Both are total permutations of period 5.

use serde::Serialize;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 elements in generating order starting from Wood.
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// 0-based index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// Hanja glyph (木火土金水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// The element this one generates.
    pub const fn generates(self) -> Element {
        match self {
            Self::Water => Self::Wood,
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
        }
    }

    /// The element that generates this one.
    pub const fn generated_by(self) -> Element {
        match self {
            Self::Wood => Self::Water,
            Self::Fire => Self::Wood,
            Self::Earth => Self::Fire,
            Self::Metal => Self::Earth,
            Self::Water => Self::Metal,
        }
    }

    /// The element this one overcomes.
    pub const fn overcomes(self) -> Element {
        match self {
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
        }
    }

    /// The element that overcomes this one.
    pub const fn overcome_by(self) -> Element {
        match self {
            Self::Fire => Self::Water,
            Self::Metal => Self::Fire,
            Self::Wood => Self::Metal,
            Self::Earth => Self::Wood,
            Self::Water => Self::Earth,
        }
    }
}

/// Yin-yang polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    /// Polarity of the n-th symbol in an alternating cycle (even = Yang).
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "Yang",
            Self::Yin => "Yin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, e) in ALL_ELEMENTS.iter().enumerate() {
            assert_eq!(e.index() as usize, i);
        }
    }

    #[test]
    fn generates_cycle_has_period_five() {
        for e in ALL_ELEMENTS {
            let mut x = e;
            for step in 1..=5 {
                x = x.generates();
                if step < 5 {
                    assert_ne!(x, e, "{e:?} returned early after {step}");
                }
            }
            assert_eq!(x, e);
        }
    }

    #[test]
    fn overcomes_cycle_has_period_five() {
        for e in ALL_ELEMENTS {
            let mut x = e;
            for step in 1..=5 {
                x = x.overcomes();
                if step < 5 {
                    assert_ne!(x, e, "{e:?} returned early after {step}");
                }
            }
            assert_eq!(x, e);
        }
    }

    #[test]
    fn inverses() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.generates().generated_by(), e);
            assert_eq!(e.overcomes().overcome_by(), e);
        }
    }

    #[test]
    fn tables_are_permutations() {
        let mut gen_seen = [false; 5];
        let mut ovr_seen = [false; 5];
        for e in ALL_ELEMENTS {
            gen_seen[e.generates().index() as usize] = true;
            ovr_seen[e.overcomes().index() as usize] = true;
        }
        assert!(gen_seen.iter().all(|&s| s));
        assert!(ovr_seen.iter().all(|&s| s));
    }

    #[test]
    fn overcomes_skips_one_in_generating_order() {
        for e in ALL_ELEMENTS {
            assert_eq!(e.overcomes(), e.generates().generates());
        }
    }

    #[test]
    fn water_generates_wood() {
        assert_eq!(Element::Water.generates(), Element::Wood);
        assert_eq!(Element::Water.overcomes(), Element::Fire);
    }

    #[test]
    fn parity_polarity() {
        assert_eq!(Polarity::from_parity(0), Polarity::Yang);
        assert_eq!(Polarity::from_parity(7), Polarity::Yin);
    }
}
