//! Earthly branches (지지).
//!
//! Twelve branches with a fixed element and polarity each. Polarity follows
//! index parity (Ja=Yang, Chuk=Yin, ...). The zodiac animal is display-only.

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 12 earthly branches starting from Ja (子).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Branch {
    Ja,
    Chuk,
    In,
    Myo,
    Jin,
    Sa,
    O,
    Mi,
    Sin,
    Yu,
    Sul,
    Hae,
}

/// All 12 branches in order (0 = Ja, 11 = Hae).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

impl Branch {
    /// 0-based index (Ja=0 .. Hae=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Branch at `index` modulo 12.
    pub const fn from_index(index: u8) -> Self {
        ALL_BRANCHES[(index % 12) as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Zodiac animal (display only).
    pub const fn zodiac(self) -> &'static str {
        match self {
            Self::Ja => "Rat",
            Self::Chuk => "Ox",
            Self::In => "Tiger",
            Self::Myo => "Rabbit",
            Self::Jin => "Dragon",
            Self::Sa => "Snake",
            Self::O => "Horse",
            Self::Mi => "Goat",
            Self::Sin => "Monkey",
            Self::Yu => "Rooster",
            Self::Sul => "Dog",
            Self::Hae => "Pig",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Ja | Self::Hae => Element::Water,
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Chuk | Self::Jin | Self::Mi | Self::Sul => Element::Earth,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Branch `n` steps later in the cycle.
    pub const fn advance(self, n: u8) -> Self {
        Self::from_index((self.index() + n % 12) % 12)
    }
}
