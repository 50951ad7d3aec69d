//! The game engine.
//!
//! A [`Game`] owns the board, both player states and both strategies for
//! one match. [`Game::play`] runs it to completion:
//!
//! 1. **Placement**: player 1 then player 2 submit placements. Valid sets
//!    are merged row by row; player 2's pieces fight whatever player 1 put
//!    on the same cell. Both strategies then see the owner-only board and
//!    every placement fight.
//! 2. **Turns**: players alternate, player 1 first. A turn is a move,
//!    an optional fight and an optional Joker change.
//! 3. **End**: as soon as a player leaves `Playing`, or after the
//!    configured number of consecutive fightless turns.
//!
//! ## Example
//!
//! ```
//! use rps_referee::core::RulesConfig;
//! use rps_referee::game::Game;
//! use rps_referee::strategy::StrategyRegistry;
//!
//! let registry = StrategyRegistry::with_builtin();
//! let mut game = Game::from_registry(RulesConfig::new(), &registry, "auto", "auto").unwrap();
//! let report = game.play();
//!
//! assert_eq!(report.turns, game.state().turn);
//! ```

use tracing::{debug, info, warn};

use super::report::GameReport;
use crate::core::{
    GameRng, GameState, JokerChange, PlayerId, PlayerMap, PlayerStatus, Result, RulesConfig,
    TurnRecord,
};
use crate::rules::{
    resolve_fight, validate_joker_change, validate_move, validate_placements, FightOutcome,
};
use crate::strategy::{OccupancyView, Strategy, StrategyRegistry};

/// One match between two strategies.
pub struct Game {
    state: GameState,
    strategies: PlayerMap<Box<dyn Strategy>>,
}

impl Game {
    /// Create a game between two strategies.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(
        config: RulesConfig,
        one: Box<dyn Strategy>,
        two: Box<dyn Strategy>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            state: GameState::new(config),
            strategies: PlayerMap::from_pair(one, two),
        })
    }

    /// Create a game between two registered strategies.
    ///
    /// Each strategy gets its own seed derived from `config.seed`.
    pub fn from_registry(
        config: RulesConfig,
        registry: &StrategyRegistry,
        one: &str,
        two: &str,
    ) -> Result<Self> {
        let mut rng = GameRng::new(config.seed);
        let first = registry.create(one, rng.fork().seed())?;
        let second = registry.create(two, rng.fork().seed())?;
        Self::new(config, first, second)
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.state.config
    }

    /// Play the game from a fresh board until it ends.
    pub fn play(&mut self) -> GameReport {
        self.state = GameState::new(self.state.config.clone());
        info!(
            fight_threshold = self.state.config.fight_threshold,
            neutral_collision = ?self.state.config.neutral_collision,
            "game started"
        );

        self.placement_phase();

        while self.state.is_game_on() && !self.state.threshold_reached() {
            self.play_turn();
        }

        let report = GameReport::from_state(&self.state);
        info!(
            winner = report.result.number(),
            reason = ?report.reason,
            turns = report.turns,
            "game over"
        );
        report
    }

    fn placement_phase(&mut self) {
        let mut fights = Vec::new();

        for player in PlayerId::all() {
            let placements = self.strategies[player].initial_positions(player);
            let mut pieces = match validate_placements(player, &placements) {
                Ok(pieces) => pieces,
                Err(violation) => {
                    warn!(%player, %violation, "invalid placement");
                    self.state.players[player].fail(PlayerStatus::InvalidPlacement, violation);
                    continue;
                }
            };

            for (_, piece) in &pieces {
                self.state.players[player].add_piece(piece);
            }
            pieces.sort_by_key(|(pos, _)| pos.index());
            for (pos, piece) in pieces {
                fights.extend(resolve_fight(&mut self.state, pos, piece));
            }
        }

        debug!(fights = fights.len(), "placement merged");

        let view = OccupancyView::new(&self.state.board);
        for (_, strategy) in self.strategies.iter_mut() {
            strategy.notify_on_initial_board(&view, &fights);
        }
    }

    fn play_turn(&mut self) {
        let player = self.state.active_player;

        if self.state.players[player].check_can_move() != PlayerStatus::Playing {
            debug!(%player, "no movable piece left");
            return;
        }

        let proposed = self.strategies[player].next_move();
        let mv = match validate_move(&self.state.board, player, proposed.as_ref()) {
            Ok(mv) => mv,
            Err(violation) => {
                warn!(%player, %violation, "invalid move");
                self.state.players[player].fail(PlayerStatus::InvalidMove, violation);
                return;
            }
        };

        let mover = self.state.board.take(mv.from);
        let fight = resolve_fight(&mut self.state, mv.to, mover);
        self.state.turn += 1;
        debug!(turn = self.state.turn, %player, %mv, fight = fight.is_some(), "move");

        self.strategies[player.opponent()].notify_on_opponent_move(&mv);
        self.broadcast_fight(fight.as_ref());

        let joker_change = if self.state.is_game_on() {
            self.change_joker(player)
        } else {
            None
        };

        self.state.history.push(TurnRecord {
            turn: self.state.turn,
            player,
            mv,
            joker_change,
            fight,
        });
        self.state.advance_turn();
    }

    fn broadcast_fight(&mut self, fight: Option<&FightOutcome>) {
        match fight {
            Some(fight) => {
                for (_, strategy) in self.strategies.iter_mut() {
                    strategy.notify_fight_result(fight);
                }
                self.state.fightless_turns = 0;
            }
            None => self.state.fightless_turns += 1,
        }
    }

    /// Ask `player` for a Joker change and apply it. Returns the applied
    /// change.
    fn change_joker(&mut self, player: PlayerId) -> Option<JokerChange> {
        let change = self.strategies[player].joker_change()?;

        if let Err(violation) = validate_joker_change(&self.state.board, player, &change) {
            warn!(%player, %violation, "invalid joker change");
            self.state.players[player].fail(PlayerStatus::InvalidMove, violation);
            return None;
        }

        let joker = self.state.board.occupant_mut(change.position);
        let was_movable = joker.is_movable();
        joker.set_disguise(change.new_kind);
        let is_movable = joker.is_movable();

        self.state.players[player].disguise_changed(was_movable, is_movable);
        debug!(%player, position = %change.position, kind = %change.new_kind, "joker changed");
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, PieceKind, PiecePlacement, Position, RefereeError};
    use crate::game::report::{EndReason, GameResult};
    use crate::strategy::AutoStrategy;

    /// Places a fixed set and then offers nothing.
    struct Idle {
        placements: Vec<PiecePlacement>,
    }

    impl Strategy for Idle {
        fn initial_positions(&mut self, _player: PlayerId) -> Vec<PiecePlacement> {
            self.placements.clone()
        }
        fn notify_on_initial_board(
            &mut self,
            _view: &OccupancyView<'_>,
            _fights: &[FightOutcome],
        ) {
        }
        fn notify_on_opponent_move(&mut self, _mv: &Move) {}
        fn notify_fight_result(&mut self, _fight: &FightOutcome) {}
        fn next_move(&mut self) -> Option<Move> {
            None
        }
        fn joker_change(&mut self) -> Option<JokerChange> {
            None
        }
    }

    fn idle(placements: Vec<PiecePlacement>) -> Box<dyn Strategy> {
        Box::new(Idle { placements })
    }

    #[test]
    fn test_zero_threshold_rejected() {
        let config = RulesConfig::new().with_fight_threshold(0);
        let result = Game::new(config, idle(vec![]), idle(vec![]));
        assert!(matches!(result, Err(RefereeError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_registry_id() {
        let registry = StrategyRegistry::with_builtin();
        let result = Game::from_registry(RulesConfig::new(), &registry, "auto", "nobody");
        assert!(matches!(result, Err(RefereeError::UnknownStrategy(_))));
    }

    #[test]
    fn test_no_move_forfeits() {
        let one = idle(vec![
            PiecePlacement::new(Position::new(4, 1), PieceKind::Flag),
            PiecePlacement::new(Position::new(4, 4), PieceKind::Rock),
        ]);
        let two = Box::new(AutoStrategy::new(1));

        let mut game = Game::new(RulesConfig::new(), one, two).unwrap();
        let report = game.play();

        assert_eq!(report.result, GameResult::Winner(PlayerId::Two));
        assert_eq!(report.reason, EndReason::InvalidMove);
        assert_eq!(report.turns, 0);
        assert!(game.state().history.is_empty());
    }

    #[test]
    fn test_play_resets_between_runs() {
        let registry = StrategyRegistry::with_builtin();
        let mut game = Game::from_registry(RulesConfig::new(), &registry, "auto", "auto").unwrap();

        game.play();
        let report = game.play();

        assert_eq!(report.turns, game.state().turn);
        assert_eq!(game.state().history.len() as u32, game.state().turn);
    }
}
