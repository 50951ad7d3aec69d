//! What strategies submit: placements, moves and Joker changes.
//!
//! These are plain values. Nothing here is checked; the engine validates
//! each one before it touches the board.

use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::player::PlayerId;
use super::position::Position;
use crate::rules::FightOutcome;

/// One piece of an initial placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PiecePlacement {
    pub position: Position,
    pub kind: PieceKind,
    /// Impersonated kind; required for Jokers, ignored otherwise.
    pub disguise: Option<PieceKind>,
}

impl PiecePlacement {
    /// Place a non-Joker piece.
    #[must_use]
    pub fn new(position: Position, kind: PieceKind) -> Self {
        Self {
            position,
            kind,
            disguise: None,
        }
    }

    /// Place a Joker impersonating `disguise`.
    #[must_use]
    pub fn joker(position: Position, disguise: PieceKind) -> Self {
        Self {
            position,
            kind: PieceKind::Joker,
            disguise: Some(disguise),
        }
    }
}

/// A single-step move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Request to change the kind a Joker impersonates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JokerChange {
    pub position: Position,
    pub new_kind: PieceKind,
}

impl JokerChange {
    #[must_use]
    pub const fn new(position: Position, new_kind: PieceKind) -> Self {
        Self { position, new_kind }
    }
}

/// A completed turn, kept in the game history for debugging.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnRecord {
    /// Turn number, starting at 1.
    pub turn: u32,

    /// The player who moved.
    pub player: PlayerId,

    /// The move that was applied.
    pub mv: Move,

    /// Joker change applied after the move, if any.
    pub joker_change: Option<JokerChange>,

    /// Fight triggered by the move, if any.
    pub fight: Option<FightOutcome>,
}
