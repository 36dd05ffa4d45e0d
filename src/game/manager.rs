//! Match orchestration.

use im::Vector;
use tracing::{debug, info, warn};

use super::player::Player;
use super::state::MatchState;
use crate::core::{
    Action, ActionRecord, ActionResult, ConfigError, DiceRng, DiceRngState, IgnoredReason,
    MatchConfig, PlayerId, PlayerMap, RandomSource, TurnRotation,
};
use crate::dice::Cup;
use crate::rules::{Bet, BetValidator, DoubtOutcome, ExactOutcome, RoundReferee};

/// Drives one match of Dudo.
///
/// ## Lifecycle
///
/// A round is open while bets are placed. A doubt or an exact challenge
/// settles it: dice change hands, cups are hidden and shaken, the bet is
/// cleared and the round counter advances. Once a single player remains the
/// match is over and further actions are ignored.
///
/// ## Example
///
/// ```
/// use dudo::core::{MatchConfig, PlayerId};
/// use dudo::dice::Face;
/// use dudo::game::MatchManager;
/// use dudo::rules::Bet;
///
/// let mut game = MatchManager::new(MatchConfig::new(3).with_seed(7)).unwrap();
///
/// let result = game.place_bet(PlayerId::new(0), Bet::new(2, Face::Three).unwrap());
/// assert_eq!(result.valid(), Some(true));
///
/// let result = game.doubt(PlayerId::new(1));
/// assert!(result.outcome().is_some());
/// assert_eq!(game.round(), 1);
/// assert!(game.current_bet().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct MatchManager<R: RandomSource = DiceRng> {
    config: MatchConfig,
    rng: R,
    state: MatchState,
}

impl MatchManager<DiceRng> {
    /// Create a match whose dice come from `DiceRng::new(config.seed)`.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        info!(seed = config.seed, "seeding match dice");
        let rng = DiceRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Resume a match from a state snapshot and the RNG checkpoint taken
    /// with it. Later rolls are identical to the uninterrupted match.
    pub fn from_snapshot(
        config: MatchConfig,
        state: MatchState,
        rng_state: &DiceRngState,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let seats = state.players.player_count();
        if seats != config.player_count {
            return Err(ConfigError::SnapshotPlayers {
                snapshot: seats,
                players: config.player_count,
            });
        }

        info!(round = state.round, seats, "match resumed from snapshot");

        Ok(Self {
            config,
            rng: DiceRng::from_state(rng_state),
            state,
        })
    }

    /// Checkpoint of the dice generator, to pair with [`Self::state`].
    #[must_use]
    pub fn rng_state(&self) -> DiceRngState {
        self.rng.state()
    }
}

impl<R: RandomSource> MatchManager<R> {
    /// Create a match rolling its dice from `rng`.
    pub fn with_rng(config: MatchConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let players = PlayerMap::new(config.player_count, |id| {
            let cup = Cup::with_dice(&mut rng, config.dice_per_player, config.cup_capacity);
            Player::new(config.player_name(id.index()), cup)
        });

        info!(
            players = config.player_count,
            dice_per_player = config.dice_per_player,
            "match created"
        );

        Ok(Self {
            config,
            rng,
            state: MatchState::new(players),
        })
    }

    // === Actions ===

    /// Apply one action by `player`.
    ///
    /// Every action except an ignored one is recorded in the history, and the
    /// wildcard rule is refreshed afterwards.
    pub fn apply(&mut self, player: PlayerId, action: Action) -> ActionResult {
        if let Some(reason) = self.ignore_reason(player) {
            warn!(%player, ?action, ?reason, "action ignored");
            return ActionResult::Ignored { reason };
        }

        let round = self.state.round;
        let result = match (action, self.state.current_bet) {
            (Action::PlaceBet(bet), _) => self.handle_bet(player, bet),
            (Action::Doubt, Some(bet)) => self.handle_doubt(player, bet),
            (Action::ExactChallenge, Some(bet)) => self.handle_exact_challenge(player, bet),
            (Action::Doubt | Action::ExactChallenge, None) => {
                let reason = IgnoredReason::NoCurrentBet;
                warn!(%player, ?action, ?reason, "action ignored");
                return ActionResult::Ignored { reason };
            }
        };

        self.refresh_wildcard_rule();

        let sequence = self.state.history.len() as u32;
        self.state.history.push_back(ActionRecord {
            player,
            action,
            result,
            round,
            sequence,
        });

        result
    }

    /// Propose `bet` on behalf of `player`.
    pub fn place_bet(&mut self, player: PlayerId, bet: Bet) -> ActionResult {
        self.apply(player, Action::PlaceBet(bet))
    }

    /// `player` doubts the bet of the seat before them.
    pub fn doubt(&mut self, player: PlayerId) -> ActionResult {
        self.apply(player, Action::Doubt)
    }

    /// `player` claims the current bet is exact.
    pub fn exact_challenge(&mut self, player: PlayerId) -> ActionResult {
        self.apply(player, Action::ExactChallenge)
    }

    fn ignore_reason(&self, player: PlayerId) -> Option<IgnoredReason> {
        let Some(seat) = self.state.players.try_get(player) else {
            return Some(IgnoredReason::UnknownPlayer);
        };
        if self.state.winner().is_some() {
            return Some(IgnoredReason::MatchOver);
        }
        if !seat.active {
            return Some(IgnoredReason::InactivePlayer);
        }
        None
    }

    fn handle_bet(&mut self, player: PlayerId, bet: Bet) -> ActionResult {
        // The acting player's own cup size stands in for the dice in play.
        let dice_in_play = self.state.players[player].cup.len();

        match BetValidator::check(self.state.current_bet.as_ref(), &bet, dice_in_play) {
            Ok(()) => {
                debug!(%player, %bet, "bet accepted");
                self.state.current_bet = Some(bet);
                ActionResult::Bet { valid: true }
            }
            Err(rejection) => {
                debug!(%player, %bet, %rejection, "bet rejected");
                ActionResult::Bet { valid: false }
            }
        }
    }

    fn handle_doubt(&mut self, challenger: PlayerId, bet: Bet) -> ActionResult {
        let bettor = self.bettor_before(challenger);
        let aces_wild = self.state.wildcard_rule();

        let outcome =
            RoundReferee::resolve_doubt(self.state.players.as_mut_slice(), &bet, aces_wild);
        let loser = match outcome {
            DoubtOutcome::LosesChallenger => challenger,
            DoubtOutcome::LosesBettor => bettor,
        };

        info!(
            %challenger,
            %bettor,
            %bet,
            aces_wild,
            outcome = outcome.as_str(),
            round = self.state.round,
            "doubt resolved"
        );

        self.take_die(loser);
        self.finish_round();

        ActionResult::Doubt { outcome }
    }

    fn handle_exact_challenge(&mut self, challenger: PlayerId, bet: Bet) -> ActionResult {
        let aces_wild = self.state.wildcard_rule();

        let outcome = RoundReferee::resolve_exact_challenge(
            self.state.players.as_mut_slice(),
            &bet,
            challenger.index(),
            aces_wild,
        );

        info!(
            %challenger,
            %bet,
            aces_wild,
            outcome = outcome.as_str(),
            round = self.state.round,
            "exact challenge resolved"
        );

        match outcome {
            ExactOutcome::ChallengerWins => {
                self.give_die(challenger);
            }
            ExactOutcome::ChallengerLoses => {
                self.take_die(challenger);
            }
            ExactOutcome::Ineligible => {}
        }
        self.finish_round();

        ActionResult::ExactChallenge { outcome }
    }

    /// The seat whose bet `challenger` is doubting.
    fn bettor_before(&self, challenger: PlayerId) -> PlayerId {
        let count = self.state.players.player_count();
        let mut seat = challenger.previous(count);
        if self.config.turn_rotation == TurnRotation::ActiveOnly {
            for _ in 0..count {
                if self.state.players[seat].active {
                    break;
                }
                seat = seat.previous(count);
            }
        }
        seat
    }

    // === Dice bookkeeping ===

    /// Take a die from `player`, spending a bonus die first.
    ///
    /// Returns `false` for unknown or eliminated seats, which are left alone.
    pub fn remove_die(&mut self, player: PlayerId) -> bool {
        let changed = self.take_die(player);
        self.refresh_wildcard_rule();
        changed
    }

    /// Give `player` a die, banking it as a bonus die if the cup is full.
    ///
    /// Returns `false` for unknown or eliminated seats, which are left alone.
    pub fn add_die(&mut self, player: PlayerId) -> bool {
        let changed = self.give_die(player);
        self.refresh_wildcard_rule();
        changed
    }

    fn take_die(&mut self, player: PlayerId) -> bool {
        let Some(seat) = self.state.players.try_get_mut(player) else {
            return false;
        };
        if !seat.active {
            return false;
        }

        if seat.bonus_dice > 0 {
            seat.bonus_dice -= 1;
            debug!(%player, bonus_dice = seat.bonus_dice, "bonus die spent");
            return true;
        }

        if !seat.cup.remove_die() {
            return false;
        }
        debug!(%player, dice = seat.cup.len(), "die lost");

        if seat.cup.is_empty() {
            seat.active = false;
            info!(%player, name = %seat.name, "player eliminated");
        }
        true
    }

    fn give_die(&mut self, player: PlayerId) -> bool {
        let Some(seat) = self.state.players.try_get_mut(player) else {
            return false;
        };
        if !seat.active {
            return false;
        }

        if seat.cup.len() < seat.cup.capacity() {
            seat.cup.add_die(&mut self.rng);
            debug!(%player, dice = seat.cup.len(), "die won");
        } else {
            seat.bonus_dice += 1;
            debug!(%player, bonus_dice = seat.bonus_dice, "die banked");
        }
        true
    }

    fn refresh_wildcard_rule(&mut self) {
        let aces_wild = self.state.wildcard_rule();
        if aces_wild != self.state.aces_wild {
            self.state.aces_wild = aces_wild;
            info!(aces_wild, round = self.state.round, "wildcard rule changed");
        }
    }

    // === Rounds and turns ===

    fn finish_round(&mut self) {
        self.state.current_bet = None;

        if let Some(winner) = self.state.winner() {
            info!(%winner, name = %self.state.players[winner].name, "match won");
            return;
        }
        self.new_round();
    }

    /// Start the next round: advance the counter, hide and shake every
    /// active cup, clear the bet.
    pub fn new_round(&mut self) {
        self.state.round += 1;
        for (_, seat) in self.state.players.iter_mut() {
            seat.cup.set_hidden();
            if seat.active {
                seat.cup.shake(&mut self.rng);
            }
        }
        self.state.current_bet = None;
        debug!(round = self.state.round, "round started");
    }

    /// Advance the turn and return the new current seat.
    pub fn next_player(&mut self) -> PlayerId {
        let count = self.state.players.player_count();
        let mut seat = self.state.current_player.next(count);

        if self.config.turn_rotation == TurnRotation::ActiveOnly {
            for _ in 0..count {
                if self.state.players[seat].active {
                    break;
                }
                seat = seat.next(count);
            }
        }

        self.state.current_player = seat;
        seat
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Put `player` on turn. Returns `false` for an unknown seat.
    pub fn set_starting_player(&mut self, player: PlayerId) -> bool {
        if !self.state.players.contains(player) {
            return false;
        }
        self.state.current_player = player;
        true
    }

    /// Draw a random seat to open the match. Does not change whose turn it is.
    pub fn determine_starting_player(&mut self) -> PlayerId {
        let last = self.state.players.player_count() as i64 - 1;
        let drawn = self.rng.next_int(0, last).clamp(0, last);
        PlayerId::new(drawn as u8)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn current_bet(&self) -> Option<Bet> {
        self.state.current_bet
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    /// Whether Aces are currently wild.
    #[must_use]
    pub fn aces_wild(&self) -> bool {
        self.state.aces_wild
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> Option<&Player> {
        self.state.players.try_get(player)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.state.players
    }

    #[must_use]
    pub fn dice_in_play(&self) -> usize {
        self.state.dice_in_play()
    }

    #[must_use]
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.state.active_players()
    }

    #[must_use]
    pub fn players_with_one_die(&self) -> Vec<PlayerId> {
        self.state.players_with_one_die()
    }

    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.state.winner().is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.state.winner().map(|id| self.state.players[id].name())
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.state.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Face;

    fn bet(quantity: u32, face: Face) -> Bet {
        Bet::new(quantity, face).unwrap()
    }

    fn game(players: usize) -> MatchManager {
        MatchManager::new(MatchConfig::new(players).with_seed(42)).unwrap()
    }

    #[test]
    fn test_new_match() {
        let game = game(3);

        assert_eq!(game.players().player_count(), 3);
        for (_, p) in game.players().iter() {
            assert_eq!(p.dice_count(), 5);
            assert_eq!(p.bonus_dice(), 0);
            assert!(p.is_active());
            assert!(!p.cup().is_visible());
        }
        assert_eq!(game.round(), 0);
        assert!(game.current_bet().is_none());
        assert!(game.aces_wild());
        assert_eq!(game.player(PlayerId::new(1)).unwrap().name(), "Player 2");
    }

    #[test]
    fn test_invalid_config() {
        assert_eq!(
            MatchManager::new(MatchConfig::new(1)).unwrap_err(),
            ConfigError::PlayerCount(1)
        );
    }

    #[test]
    fn test_dice_per_player() {
        let game = MatchManager::new(MatchConfig::new(2).with_dice_per_player(3)).unwrap();
        assert_eq!(game.dice_in_play(), 6);
    }

    #[test]
    fn test_bet_is_stored_only_when_valid() {
        let mut game = game(2);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(game.place_bet(p0, bet(3, Face::Four)), ActionResult::Bet { valid: true });
        assert_eq!(game.place_bet(p1, bet(2, Face::Four)), ActionResult::Bet { valid: false });
        assert_eq!(game.current_bet(), Some(bet(3, Face::Four)));
        assert_eq!(game.dice_in_play(), 10);
    }

    #[test]
    fn test_challenge_without_bet_is_ignored() {
        let mut game = game(2);
        assert_eq!(
            game.doubt(PlayerId::new(1)),
            ActionResult::Ignored { reason: IgnoredReason::NoCurrentBet }
        );
        assert_eq!(
            game.exact_challenge(PlayerId::new(0)),
            ActionResult::Ignored { reason: IgnoredReason::NoCurrentBet }
        );
        assert!(game.history().is_empty());
        assert_eq!(game.round(), 0);
    }

    #[test]
    fn test_unknown_player_is_ignored() {
        let mut game = game(2);
        assert_eq!(
            game.place_bet(PlayerId::new(5), bet(1, Face::Two)),
            ActionResult::Ignored { reason: IgnoredReason::UnknownPlayer }
        );
        assert!(!game.remove_die(PlayerId::new(5)));
        assert!(!game.add_die(PlayerId::new(5)));
    }

    #[test]
    fn test_bonus_die_shields_cup() {
        let mut game = game(2);
        let p0 = PlayerId::new(0);

        assert!(game.add_die(p0));
        assert_eq!(game.player(p0).unwrap().bonus_dice(), 1);
        assert_eq!(game.player(p0).unwrap().dice_count(), 5);

        assert!(game.remove_die(p0));
        assert_eq!(game.player(p0).unwrap().bonus_dice(), 0);
        assert_eq!(game.player(p0).unwrap().dice_count(), 5);

        assert!(game.remove_die(p0));
        assert_eq!(game.player(p0).unwrap().dice_count(), 4);
    }

    #[test]
    fn test_elimination_is_permanent() {
        let mut game = game(3);
        let p2 = PlayerId::new(2);

        for _ in 0..5 {
            assert!(game.remove_die(p2));
        }
        assert!(!game.player(p2).unwrap().is_active());
        assert_eq!(game.active_players(), vec![PlayerId::new(0), PlayerId::new(1)]);

        assert!(!game.add_die(p2));
        assert!(!game.remove_die(p2));
        assert!(!game.player(p2).unwrap().is_active());
        assert_eq!(game.player(p2).unwrap().dice_count(), 0);
    }

    #[test]
    fn test_single_die_disables_wildcards() {
        let mut game = game(2);
        let p1 = PlayerId::new(1);

        for _ in 0..4 {
            game.remove_die(p1);
        }
        assert_eq!(game.players_with_one_die(), vec![p1]);
        assert!(!game.aces_wild());

        game.add_die(p1);
        assert!(game.aces_wild());
    }

    #[test]
    fn test_turn_rotation_all_seats() {
        let mut game = game(3);
        assert!(game.set_starting_player(PlayerId::new(1)));

        let turns: Vec<_> = (0..6).map(|_| game.next_player().index()).collect();
        assert_eq!(turns, vec![2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn test_turn_rotation_includes_eliminated_by_default() {
        let mut game = game(3);
        for _ in 0..5 {
            game.remove_die(PlayerId::new(1));
        }

        assert_eq!(game.next_player(), PlayerId::new(1));
    }

    #[test]
    fn test_turn_rotation_active_only() {
        let config = MatchConfig::new(3).with_turn_rotation(TurnRotation::ActiveOnly);
        let mut game = MatchManager::new(config).unwrap();
        for _ in 0..5 {
            game.remove_die(PlayerId::new(1));
        }

        assert_eq!(game.next_player(), PlayerId::new(2));
        assert_eq!(game.next_player(), PlayerId::new(0));
        assert_eq!(game.next_player(), PlayerId::new(2));
    }

    #[test]
    fn test_set_starting_player_rejects_unknown_seat() {
        let mut game = game(3);
        assert!(!game.set_starting_player(PlayerId::new(3)));
        assert_eq!(game.current_player(), PlayerId::new(0));
    }

    #[test]
    fn test_determine_starting_player_in_range() {
        let mut game = game(4);
        for _ in 0..50 {
            assert!(game.determine_starting_player().index() < 4);
        }
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut game = game(3);
        game.place_bet(PlayerId::new(0), bet(3, Face::Four));
        game.doubt(PlayerId::new(1));

        let resumed = MatchManager::from_snapshot(
            game.config().clone(),
            game.state().clone(),
            &game.rng_state(),
        )
        .unwrap();
        assert_eq!(resumed.state(), game.state());
        assert_eq!(resumed.rng_state(), game.rng_state());
    }

    #[test]
    fn test_snapshot_with_wrong_seat_count_is_rejected() {
        let game = game(3);
        let config = MatchConfig::new(2);
        let err = MatchManager::from_snapshot(config, game.state().clone(), &game.rng_state())
            .unwrap_err();
        assert_eq!(err, ConfigError::SnapshotPlayers { snapshot: 3, players: 2 });
    }

    #[test]
    fn test_new_round_hides_and_keeps_counts() {
        let mut game = game(2);
        game.place_bet(PlayerId::new(0), bet(1, Face::Two));
        game.new_round();

        assert_eq!(game.round(), 1);
        assert!(game.current_bet().is_none());
        for (_, p) in game.players().iter() {
            assert!(!p.cup().is_visible());
            assert_eq!(p.dice_count(), 5);
        }
    }
}
