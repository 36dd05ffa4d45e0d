//! Bets: "at least N dice show face F".

use serde::{Deserialize, Serialize};

use crate::core::BetError;
use crate::dice::Face;

/// An immutable claim about the dice in play. The quantity is always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBet")]
pub struct Bet {
    quantity: u32,
    face: Face,
}

#[derive(Deserialize)]
struct RawBet {
    quantity: u32,
    face: Face,
}

impl TryFrom<RawBet> for Bet {
    type Error = BetError;

    fn try_from(raw: RawBet) -> Result<Self, Self::Error> {
        Bet::new(raw.quantity, raw.face)
    }
}

impl Bet {
    /// Create a bet. Fails for a quantity of zero.
    ///
    /// ```
    /// use dudo::dice::Face;
    /// use dudo::rules::Bet;
    ///
    /// let bet = Bet::new(3, Face::Three).unwrap();
    /// assert_eq!(bet.quantity(), 3);
    /// assert!(Bet::new(0, Face::Two).is_err());
    /// ```
    pub fn new(quantity: u32, face: Face) -> Result<Self, BetError> {
        if quantity == 0 {
            return Err(BetError::ZeroQuantity);
        }
        Ok(Self { quantity, face })
    }

    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    #[must_use]
    pub const fn face(&self) -> Face {
        self.face
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {}", self.quantity, self.face)
    }
}
