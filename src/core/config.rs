//! Match configuration.
//!
//! Hosts configure a match at startup with a `MatchConfig`: how many seats,
//! how many dice each cup starts with, the cup capacity, seat names, the seed
//! for the dice, and how turns rotate past eliminated players.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Dice a cup holds at most, and the baseline above which won dice are banked.
pub const DEFAULT_CUP_CAPACITY: usize = 5;

/// Seats in a match created with `MatchConfig::default()`.
pub const DEFAULT_PLAYER_COUNT: usize = 3;

/// How `next_player` walks the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnRotation {
    /// Every seat in order, eliminated ones included.
    #[default]
    AllSeats,
    /// Skip seats whose player has been eliminated.
    ActiveOnly,
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seats (2-255).
    pub player_count: usize,

    /// Dice in each cup at the start of the match.
    pub dice_per_player: usize,

    /// Maximum physical dice per cup.
    pub cup_capacity: usize,

    /// Seat names. `None` means "Player 1", "Player 2", ...
    pub player_names: Option<Vec<String>>,

    /// Seed for the match's dice.
    pub seed: u64,

    /// Turn rotation policy.
    pub turn_rotation: TurnRotation,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PLAYER_COUNT)
    }
}

impl MatchConfig {
    /// Create a configuration for `player_count` seats with default dice.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            dice_per_player: DEFAULT_CUP_CAPACITY,
            cup_capacity: DEFAULT_CUP_CAPACITY,
            player_names: None,
            seed: 0,
            turn_rotation: TurnRotation::AllSeats,
        }
    }

    /// Set the starting dice per cup.
    #[must_use]
    pub fn with_dice_per_player(mut self, dice: usize) -> Self {
        self.dice_per_player = dice;
        self
    }

    /// Set the cup capacity.
    #[must_use]
    pub fn with_cup_capacity(mut self, capacity: usize) -> Self {
        self.cup_capacity = capacity;
        self
    }

    /// Name the seats, in seat order.
    #[must_use]
    pub fn with_player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Set the dice seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the turn rotation policy.
    #[must_use]
    pub fn with_turn_rotation(mut self, rotation: TurnRotation) -> Self {
        self.turn_rotation = rotation;
        self
    }

    /// Check the configuration for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=255).contains(&self.player_count) {
            return Err(ConfigError::PlayerCount(self.player_count));
        }
        if self.cup_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.dice_per_player == 0 || self.dice_per_player > self.cup_capacity {
            return Err(ConfigError::DicePerPlayer {
                got: self.dice_per_player,
                capacity: self.cup_capacity,
            });
        }
        if let Some(names) = &self.player_names {
            if names.len() != self.player_count {
                return Err(ConfigError::NameCount {
                    names: names.len(),
                    players: self.player_count,
                });
            }
        }
        Ok(())
    }

    /// Name of the seat at `index`.
    #[must_use]
    pub fn player_name(&self, index: usize) -> String {
        self.player_names
            .as_ref()
            .and_then(|names| names.get(index).cloned())
            .unwrap_or_else(|| format!("Player {}", index + 1))
    }
}
