//! The match: seats, round lifecycle, dice bookkeeping and the wildcard rule.
//!
//! `MatchManager` is the single entry point that mutates a match. It checks
//! bets with `BetValidator`, settles challenges with `RoundReferee`, moves
//! dice between cups and the bonus bank, and keeps the Ace wildcard rule in
//! step with the cup sizes.

mod player;
mod state;
mod manager;

pub use player::Player;
pub use state::MatchState;
pub use manager::MatchManager;
