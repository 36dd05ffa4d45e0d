//! Player actions and their results.
//!
//! An action is one of three moves: raise the bet, doubt the previous bet, or
//! call it exact. The match answers every action with an `ActionResult`;
//! misuse (unknown seat, doubting with no bet, acting after the match is
//! over) yields `ActionResult::Ignored` instead of an error.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::rules::{Bet, DoubtOutcome, ExactOutcome};

/// A move by the player whose turn it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Propose a new bet.
    PlaceBet(Bet),
    /// Challenge the previous player's bet as false.
    Doubt,
    /// Claim the current bet is exactly right.
    ExactChallenge,
}

/// Why an action had no effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    /// The seat does not exist.
    UnknownPlayer,
    /// The seat's player has been eliminated.
    InactivePlayer,
    /// A challenge was made before any bet this round.
    NoCurrentBet,
    /// A sole winner already exists.
    MatchOver,
}

/// What happened when an action was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionResult {
    Bet { valid: bool },
    Doubt { outcome: DoubtOutcome },
    ExactChallenge { outcome: ExactOutcome },
    Ignored { reason: IgnoredReason },
}

impl ActionResult {
    /// `Some(valid)` for a bet result.
    #[must_use]
    pub fn valid(&self) -> Option<bool> {
        match self {
            ActionResult::Bet { valid } => Some(*valid),
            _ => None,
        }
    }

    /// The outcome string of a challenge result.
    #[must_use]
    pub fn outcome(&self) -> Option<&'static str> {
        match self {
            ActionResult::Doubt { outcome } => Some(outcome.as_str()),
            ActionResult::ExactChallenge { outcome } => Some(outcome.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, ActionResult::Ignored { .. })
    }
}

/// A recorded action with its result, for history and replay.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// What the action produced.
    pub result: ActionResult,

    /// Round in which the action was taken.
    pub round: u32,

    /// Position in the match's history (0-based).
    pub sequence: u32,
}
