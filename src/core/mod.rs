//! Core engine types: seats, RNG, configuration, actions, errors.
//!
//! These are the building blocks shared by the dice, rules and match layers.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceRng, DiceRngState, RandomSource};
pub use config::{MatchConfig, TurnRotation, DEFAULT_CUP_CAPACITY};
pub use action::{Action, ActionRecord, ActionResult, IgnoredReason};
pub use error::{BetError, ConfigError, CupError};
