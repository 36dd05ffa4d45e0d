//! # dudo
//!
//! Rule engine for Dudo, the Chilean variant of Liar's Dice.
//!
//! ## Design Principles
//!
//! 1. **Rules are pure**: bet ordering, pip counting and challenge
//!    resolution take everything they need as arguments, including whether
//!    Aces are wild.
//!
//! 2. **One entry point mutates a match**: `MatchManager::apply` takes a
//!    tagged `Action` and answers with an `ActionResult`. Misuse produces an
//!    `Ignored` result, never a panic.
//!
//! 3. **Randomness is injected**: every die is rolled from an explicit
//!    `RandomSource`; the same seed replays the same match.
//!
//! ## Modules
//!
//! - `core`: seats, RNG, configuration, actions, errors
//! - `dice`: faces, dice and cups
//! - `rules`: bets, bet validation, pip counting, challenge resolution
//! - `game`: players, match state and the match manager
//!
//! The library logs through `tracing` and never installs a subscriber.

pub mod core;
pub mod dice;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ActionResult, BetError, ConfigError, CupError, DiceRng, DiceRngState,
    IgnoredReason, MatchConfig, PlayerId, PlayerMap, RandomSource, TurnRotation,
};

pub use crate::dice::{Cup, Die, Face};

pub use crate::rules::{
    Bet, BetRejection, BetValidator, DoubtOutcome, ExactOutcome, PipCounter, PipSource,
    RoundReferee,
};

pub use crate::game::{MatchManager, MatchState, Player};
