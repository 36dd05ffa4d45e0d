//! Die faces, ordered by rank for bet comparisons.

use serde::{Deserialize, Serialize};

/// One of the six faces of a die.
///
/// Faces compare by rank: `Ace < Two < ... < Six`. The Ace is the lowest
/// rank for "same quantity, higher face" raises, but it is also the wildcard
/// while the wildcard rule is in force.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    Ace = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
}

impl Face {
    /// All faces in rank order.
    pub const ALL: [Face; 6] = [
        Face::Ace,
        Face::Two,
        Face::Three,
        Face::Four,
        Face::Five,
        Face::Six,
    ];

    /// Rank 1-6.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Face for a rank in 1-6.
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// Face for a 0-based index, wrapping modulo 6.
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(6) as usize]
    }

    /// Whether this face is the Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Face::Ace)
    }

    /// The name used at Chilean tables.
    #[must_use]
    pub const fn traditional_name(self) -> &'static str {
        match self {
            Face::Ace => "As",
            Face::Two => "Tonto",
            Face::Three => "Tren",
            Face::Four => "Cuadra",
            Face::Five => "Quina",
            Face::Six => "Sexto",
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.traditional_name())
    }
}
