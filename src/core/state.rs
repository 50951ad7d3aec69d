//! Game state: per-player counters and the authoritative board.
//!
//! ## PlayerState
//!
//! Remaining pieces per kind, movable and flag counts, and a status. The
//! status is monotone: the first transition away from `Playing` is final.
//! Losing the last flag or the last movable piece triggers the transition
//! inside [`PlayerState::remove_piece`], never later.
//!
//! ## GameState
//!
//! Everything the engine owns for one game: board, both player states,
//! turn counters and the in-memory turn history.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::TurnRecord;
use super::board::Board;
use super::config::RulesConfig;
use super::error::RuleViolation;
use super::piece::{Piece, PieceKind};
use super::player::{PlayerId, PlayerMap};

/// Participation status of a player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Playing,
    /// The initial placement broke a rule.
    InvalidPlacement,
    /// A move or Joker change broke a rule, or no move was given.
    InvalidMove,
    /// Every flag was captured.
    NoFlags,
    /// No movable piece is left.
    CantMove,
}

/// Counters and status for one player.
#[derive(Clone, Debug, Default)]
pub struct PlayerState {
    counts: FxHashMap<PieceKind, u32>,
    movable: u32,
    flags: u32,
    status: PlayerStatus,
    violation: Option<RuleViolation>,
}

impl PlayerState {
    /// Create a player with no pieces.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining pieces of `kind` (Jokers count as `Joker`).
    #[must_use]
    pub fn count(&self, kind: PieceKind) -> u32 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Remaining pieces that can move, Jokers included by disguise.
    #[must_use]
    pub fn movable_count(&self) -> u32 {
        self.movable
    }

    #[must_use]
    pub fn flag_count(&self) -> u32 {
        self.flags
    }

    /// Total remaining pieces.
    #[must_use]
    pub fn total_pieces(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.status == PlayerStatus::Playing
    }

    /// The rule broken, for `InvalidPlacement` / `InvalidMove`.
    #[must_use]
    pub fn violation(&self) -> Option<&RuleViolation> {
        self.violation.as_ref()
    }

    /// Count a newly placed piece.
    pub fn add_piece(&mut self, piece: &Piece) {
        *self.counts.entry(piece.kind()).or_default() += 1;
        if piece.kind() == PieceKind::Flag {
            self.flags += 1;
        }
        if piece.is_movable() {
            self.movable += 1;
        }
    }

    /// Account for a destroyed piece.
    ///
    /// Panics if the piece was never counted.
    pub fn remove_piece(&mut self, piece: &Piece) {
        let count = self.counts.entry(piece.kind()).or_default();
        assert!(*count > 0, "{} count underflow", piece.kind());
        *count -= 1;

        if piece.kind() == PieceKind::Flag {
            assert!(self.flags > 0, "flag count underflow");
            self.flags -= 1;
            if self.flags == 0 {
                self.set_status(PlayerStatus::NoFlags);
            }
        }
        if piece.is_movable() {
            assert!(self.movable > 0, "movable count underflow");
            self.movable -= 1;
            if self.movable == 0 {
                self.set_status(PlayerStatus::CantMove);
            }
        }
    }

    /// Account for a Joker switching between a movable and an immovable
    /// disguise.
    pub fn disguise_changed(&mut self, was_movable: bool, is_movable: bool) {
        match (was_movable, is_movable) {
            (false, true) => self.movable += 1,
            (true, false) => {
                assert!(self.movable > 0, "movable count underflow");
                self.movable -= 1;
                if self.movable == 0 {
                    self.set_status(PlayerStatus::CantMove);
                }
            }
            _ => {}
        }
    }

    /// Set `CantMove` if nothing can move. Returns the resulting status.
    pub fn check_can_move(&mut self) -> PlayerStatus {
        if self.movable == 0 {
            self.set_status(PlayerStatus::CantMove);
        }
        self.status
    }

    /// Transition out of `Playing`. Later transitions are ignored.
    ///
    /// Returns `true` if the status changed.
    pub fn set_status(&mut self, status: PlayerStatus) -> bool {
        if self.status != PlayerStatus::Playing || status == PlayerStatus::Playing {
            return false;
        }
        self.status = status;
        true
    }

    /// Record a rule violation and the status it causes.
    pub fn fail(&mut self, status: PlayerStatus, violation: RuleViolation) -> bool {
        let changed = self.set_status(status);
        if changed {
            self.violation = Some(violation);
        }
        changed
    }
}

/// Complete state of one game, owned by the engine.
#[derive(Clone, Debug)]
pub struct GameState {
    /// The authoritative board.
    pub board: Board,

    /// Per-player counters and status.
    pub players: PlayerMap<PlayerState>,

    /// Rules in force.
    pub config: RulesConfig,

    /// Number of turns played.
    pub turn: u32,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Consecutive turns without a fight.
    pub fightless_turns: u32,

    /// Completed turns, oldest first.
    pub history: Vec<TurnRecord>,
}

impl GameState {
    /// Create an empty game.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self {
            board: Board::new(),
            players: PlayerMap::with_default(),
            config,
            turn: 0,
            active_player: PlayerId::One,
            fightless_turns: 0,
            history: Vec::new(),
        }
    }

    /// Both players are still playing.
    #[must_use]
    pub fn is_game_on(&self) -> bool {
        self.players.iter().all(|(_, p)| p.is_playing())
    }

    /// The fightless-turn threshold has been reached.
    #[must_use]
    pub fn threshold_reached(&self) -> bool {
        self.fightless_turns >= self.config.fight_threshold
    }

    /// Account for a destroyed piece on its owner's counters.
    ///
    /// Panics for ownerless pieces.
    pub fn destroy(&mut self, piece: &Piece) {
        let owner = match piece.owner() {
            Some(owner) => owner,
            None => panic!("cannot destroy an ownerless {} piece", piece.kind()),
        };
        self.players[owner].remove_piece(piece);
    }

    /// Hand the turn to the other player.
    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.opponent();
    }
}
