//! Dudo rules: bets, bet ordering, pip counting and challenge resolution.
//!
//! Everything here is free of match state. The wildcard rule is passed into
//! each call as `aces_wild`, and the match recomputes it from cup sizes
//! before every resolution.

pub mod bet;
pub mod validator;
pub mod counter;
pub mod referee;

pub use bet::Bet;
pub use validator::{BetRejection, BetValidator};
pub use counter::{PipCounter, PipSource};
pub use referee::{DoubtOutcome, ExactOutcome, RoundReferee};
