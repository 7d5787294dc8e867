//! Heavenly stems (천간).
//!
//! Ten stems cycle in pairs over the five elements in generating order,
//! each pair Yang then Yin.

use serde::Serialize;

use crate::element::{Element, Polarity};

/// The 10 heavenly stems starting from Gap (甲).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Stem {
    Gap,
    Eul,
    Byeong,
    Jeong,
    Mu,
    Gi,
    Gyeong,
    Sin,
    Im,
    Gye,
}

/// All 10 stems in order (0 = Gap, 9 = Gye).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

impl Stem {
    /// 0-based index (Gap=0 .. Gye=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Stem at `index` modulo 10.
    pub const fn from_index(index: u8) -> Self {
        ALL_STEMS[(index % 10) as usize]
    }

    /// Hanja glyph.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// Hangul reading.
    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Stem `n` steps later in the cycle.
    pub const fn advance(self, n: u8) -> Self {
        Self::from_index((self.index() + n % 10) % 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), *s);
        }
    }

    #[test]
    fn polarity_alternates() {
        for s in ALL_STEMS {
            let expected = if s.index() % 2 == 0 { Polarity::Yang } else { Polarity::Yin };
            assert_eq!(s.polarity(), expected);
        }
    }

    #[test]
    fn elements_pair_up() {
        for pair in ALL_STEMS.chunks(2) {
            assert_eq!(pair[0].element(), pair[1].element());
        }
        assert_eq!(Stem::Gap.element(), Element::Wood);
        assert_eq!(Stem::Gye.element(), Element::Water);
    }

    #[test]
    fn advance_wraps() {
        assert_eq!(Stem::Im.advance(3), Stem::Eul);
        assert_eq!(Stem::Gap.advance(10), Stem::Gap);
        assert_eq!(Stem::Gye.advance(255), Stem::Mu);
    }

    #[test]
    fn glyphs_nonempty() {
        for s in ALL_STEMS {
            assert!(!s.hanja().is_empty());
            assert!(!s.hangul().is_empty());
        }
    }
}
