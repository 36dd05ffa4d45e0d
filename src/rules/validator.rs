//! Bet ordering.
//!
//! A bet must raise the previous one. Rules, first match wins:
//!
//! 1. No dice in play: never legal.
//! 2. Opening bet: legal unless it is on Aces with more than one die in play.
//! 3. Same face, higher quantity: legal.
//! 4. Same quantity, higher face rank: legal.
//! 5. Non-Ace to Aces: legal iff quantity is `previous / 2 + 1` (floor division).
//! 6. Aces to non-Ace: legal iff quantity is at least `previous * 2 + 1`.
//! 7. Anything else: illegal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::bet::Bet;

/// Why a proposed bet does not follow the previous one.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum BetRejection {
    #[error("no dice in play")]
    NoDiceInPlay,

    #[error("the opening bet may only be on Aces with a single die in play")]
    OpeningOnAces,

    #[error("switching to Aces requires exactly {required}")]
    WrongAceConversion { required: u64 },

    #[error("leaving Aces requires at least {minimum}")]
    TooFewAfterAces { minimum: u64 },

    #[error("the bet does not raise the previous one")]
    NotHigher,
}

/// Stateless bet legality checks.
pub struct BetValidator;

impl BetValidator {
    /// Whether `proposed` legally follows `previous` with `dice_in_play` dice.
    ///
    /// `previous` is `None` for the opening bet of a round.
    #[must_use]
    pub fn is_valid(previous: Option<&Bet>, proposed: &Bet, dice_in_play: usize) -> bool {
        Self::check(previous, proposed, dice_in_play).is_ok()
    }

    /// Like [`BetValidator::is_valid`], reporting which rule rejected the bet.
    pub fn check(
        previous: Option<&Bet>,
        proposed: &Bet,
        dice_in_play: usize,
    ) -> Result<(), BetRejection> {
        if dice_in_play < 1 {
            return Err(BetRejection::NoDiceInPlay);
        }

        let Some(previous) = previous else {
            if proposed.face().is_ace() && dice_in_play > 1 {
                return Err(BetRejection::OpeningOnAces);
            }
            return Ok(());
        };

        let quantity = u64::from(proposed.quantity());
        let previous_quantity = u64::from(previous.quantity());

        if proposed.face() == previous.face() && quantity > previous_quantity {
            return Ok(());
        }

        if quantity == previous_quantity && proposed.face().rank() > previous.face().rank() {
            return Ok(());
        }

        if proposed.face().is_ace() && !previous.face().is_ace() {
            let required = previous_quantity / 2 + 1;
            return if quantity == required {
                Ok(())
            } else {
                Err(BetRejection::WrongAceConversion { required })
            };
        }

        if !proposed.face().is_ace() && previous.face().is_ace() {
            let minimum = previous_quantity * 2 + 1;
            return if quantity >= minimum {
                Ok(())
            } else {
                Err(BetRejection::TooFewAfterAces { minimum })
            };
        }

        Err(BetRejection::NotHigher)
    }
}
