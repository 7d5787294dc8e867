//! The 4-letter type code: one two-valued letter per axis.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// The four independent classification axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Axis {
    Energy,
    Perception,
    Judgement,
    Lifestyle,
}

/// All 4 axes in code order.
pub const ALL_AXES: [Axis; 4] = [Axis::Energy, Axis::Perception, Axis::Judgement, Axis::Lifestyle];

impl Axis {
    pub const fn index(self) -> u8 {
        match self {
            Self::Energy => 0,
            Self::Perception => 1,
            Self::Judgement => 2,
            Self::Lifestyle => 3,
        }
    }

    /// The two letters of this axis, first letter first.
    pub const fn letters(self) -> [char; 2] {
        match self {
            Self::Energy => ['W', 'N'],
            Self::Perception => ['S', 'G'],
            Self::Judgement => ['I', 'H'],
            Self::Lifestyle => ['J', 'Y'],
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Energy => "Energy",
            Self::Perception => "Perception",
            Self::Judgement => "Judgement",
            Self::Lifestyle => "Lifestyle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Energy {
    W,
    N,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Perception {
    S,
    G,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Judgement {
    I,
    H,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Lifestyle {
    J,
    Y,
}

/// A complete type code. 16 possible values; immutable once computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode {
    pub energy: Energy,
    pub perception: Perception,
    pub judgement: Judgement,
    pub lifestyle: Lifestyle,
}

/// All 16 type codes, ordered by [`TypeCode::index`].
pub const ALL_TYPE_CODES: [TypeCode; 16] = {
    let mut out = [TypeCode::from_index(0); 16];
    let mut i = 0;
    while i < 16 {
        out[i] = TypeCode::from_index(i as u8);
        i += 1;
    }
    out
};

impl TypeCode {
    pub const fn new(
        energy: Energy,
        perception: Perception,
        judgement: Judgement,
        lifestyle: Lifestyle,
    ) -> Self {
        Self {
            energy,
            perception,
            judgement,
            lifestyle,
        }
    }

    /// Dense index 0..16; bit 3 = energy, bit 0 = lifestyle (second letter = 1).
    pub const fn index(self) -> u8 {
        (matches!(self.energy, Energy::N) as u8) << 3
            | (matches!(self.perception, Perception::G) as u8) << 2
            | (matches!(self.judgement, Judgement::H) as u8) << 1
            | matches!(self.lifestyle, Lifestyle::Y) as u8
    }

    /// Inverse of [`index`](Self::index), taken modulo 16.
    pub const fn from_index(index: u8) -> Self {
        Self {
            energy: if index & 0b1000 == 0 { Energy::W } else { Energy::N },
            perception: if index & 0b0100 == 0 { Perception::S } else { Perception::G },
            judgement: if index & 0b0010 == 0 { Judgement::I } else { Judgement::H },
            lifestyle: if index & 0b0001 == 0 { Lifestyle::J } else { Lifestyle::Y },
        }
    }

    /// Whether the code carries the first letter of `axis` (W, S, I, J).
    pub const fn is_first_letter(self, axis: Axis) -> bool {
        let bit = 3 - axis.index();
        self.index() & (1 << bit) == 0
    }

    /// Letter chosen on `axis`.
    pub const fn letter(self, axis: Axis) -> char {
        let [first, second] = axis.letters();
        if self.is_first_letter(axis) { first } else { second }
    }
}

impl Display for TypeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for axis in ALL_AXES {
            write!(f, "{}", self.letter(axis))?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = ClassifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().map(|c| c.to_ascii_uppercase()).collect();
        if chars.len() != 4 {
            return Err(ClassifyError::InvalidTypeCode(s.to_string()));
        }
        let mut index = 0u8;
        for (axis, c) in ALL_AXES.iter().zip(&chars) {
            let [first, second] = axis.letters();
            let bit = if *c == first {
                0
            } else if *c == second {
                1
            } else {
                return Err(ClassifyError::InvalidTypeCode(s.to_string()));
            };
            index |= bit << (3 - axis.index());
        }
        Ok(Self::from_index(index))
    }
}

impl TryFrom<String> for TypeCode {
    type Error = ClassifyError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
