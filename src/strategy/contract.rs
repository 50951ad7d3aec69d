//! The interface every player strategy implements.
//!
//! The engine drives a strategy through six calls. Each call receives only
//! what the strategy is entitled to know:
//!
//! | call                       | receives                                       |
//! |----------------------------|------------------------------------------------|
//! | `initial_positions`        | its own player id                              |
//! | `notify_on_initial_board`  | owner of every cell, placement-phase fights    |
//! | `notify_on_opponent_move`  | coordinates of the opponent's move             |
//! | `notify_fight_result`      | both true pieces and the winner                |
//! | `next_move`                | nothing                                        |
//! | `joker_change`             | nothing                                        |
//!
//! A strategy that breaks a rule is not an engine error: the engine ends that
//! player's participation and names the broken rule in the report.

use crate::core::{Board, JokerChange, Move, PiecePlacement, PlayerId, Position};
use crate::rules::FightOutcome;

/// Owner-only view of the board.
///
/// Borrowed for the duration of [`Strategy::notify_on_initial_board`]; it
/// exposes which player holds each cell but never the kind.
#[derive(Clone, Copy)]
pub struct OccupancyView<'a> {
    board: &'a Board,
}

impl<'a> OccupancyView<'a> {
    /// Wrap a board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Owner of the piece at `pos`; `None` for empty or off-board cells.
    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<PlayerId> {
        self.board.get(pos).and_then(|piece| piece.owner())
    }
}

/// A player strategy: human, scripted or automatic.
///
/// Calls are strictly sequential; a strategy is never called concurrently
/// and never calls back into the engine.
pub trait Strategy: Send {
    /// Choose the initial placement for `player`.
    fn initial_positions(&mut self, player: PlayerId) -> Vec<PiecePlacement>;

    /// Called once after both placements are merged.
    fn notify_on_initial_board(&mut self, view: &OccupancyView<'_>, fights: &[FightOutcome]);

    /// The opponent just made `mv`.
    fn notify_on_opponent_move(&mut self, mv: &Move);

    /// A fight took place during the turn loop.
    fn notify_fight_result(&mut self, fight: &FightOutcome);

    /// The next move; `None` if the strategy has no move to offer, which
    /// forfeits the game.
    fn next_move(&mut self) -> Option<Move>;

    /// An optional Joker disguise change after this player's move.
    fn joker_change(&mut self) -> Option<JokerChange>;
}
