//! Error types.
//!
//! Only construction, configuration and snapshot loading can fail. Rule violations during play
//! are reported as values (`BetRejection`, outcomes, `ActionResult::Ignored`).

use thiserror::Error;

/// A bet could not be constructed.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet quantity must be greater than zero")]
    ZeroQuantity,
}

/// A match configuration was rejected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be between 2 and 255 (got {0})")]
    PlayerCount(usize),

    #[error("cup capacity must be at least 1")]
    ZeroCapacity,

    #[error("dice per player must be between 1 and the cup capacity {capacity} (got {got})")]
    DicePerPlayer { got: usize, capacity: usize },

    #[error("{names} player names given for {players} players")]
    NameCount { names: usize, players: usize },

    #[error("snapshot seats {snapshot} players but the configuration has {players}")]
    SnapshotPlayers { snapshot: usize, players: usize },
}

/// A cup could not be rebuilt from serialized data.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CupError {
    #[error("cup capacity must be at least 1")]
    ZeroCapacity,

    #[error("cup holds {dice} dice but its capacity is {capacity}")]
    Overfull { dice: usize, capacity: usize },
}
