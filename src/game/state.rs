//! Match state snapshot.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::core::{ActionRecord, PlayerId, PlayerMap};
use crate::rules::Bet;

/// Everything that changes during a match.
///
/// Only `MatchManager` mutates it. Cloning is cheap enough to snapshot after
/// every action: the history is a persistent vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) players: PlayerMap<Player>,
    pub(crate) current_bet: Option<Bet>,
    pub(crate) current_player: PlayerId,
    pub(crate) round: u32,
    pub(crate) aces_wild: bool,
    pub(crate) history: Vector<ActionRecord>,
}

impl MatchState {
    pub(crate) fn new(players: PlayerMap<Player>) -> Self {
        let mut state = Self {
            players,
            current_bet: None,
            current_player: PlayerId::new(0),
            round: 0,
            aces_wild: true,
            history: Vector::new(),
        };
        state.aces_wild = state.wildcard_rule();
        state
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// The bet standing this round, if any.
    #[must_use]
    pub fn current_bet(&self) -> Option<Bet> {
        self.current_bet
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Completed rounds.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Whether Aces counted as wild after the last action.
    #[must_use]
    pub fn aces_wild(&self) -> bool {
        self.aces_wild
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Aces are wild unless some active player is down to a single die.
    #[must_use]
    pub fn wildcard_rule(&self) -> bool {
        !self
            .players
            .values()
            .any(|p| p.active && p.cup.len() == 1)
    }

    /// Sum of every cup's dice.
    #[must_use]
    pub fn dice_in_play(&self) -> usize {
        self.players.values().map(|p| p.cup.len()).sum()
    }

    /// Seats still in the match, in seat order.
    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.active)
            .map(|(id, _)| id)
            .collect()
    }

    /// Seats whose cup holds exactly one die.
    #[must_use]
    pub fn players_with_one_die(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.cup.len() == 1)
            .map(|(id, _)| id)
            .collect()
    }

    /// The sole remaining player, if exactly one is left.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self.active_players().as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
