//! Error types.
//!
//! Two families live here:
//!
//! - [`RuleViolation`]: a strategy broke a game rule. These are recorded on
//!   the offending player's state and end its participation; they never
//!   surface as `Err` from the engine.
//! - [`RefereeError`]: misuse of the library API (unknown strategy id,
//!   invalid configuration, malformed board data).

use thiserror::Error;

use super::piece::PieceKind;
use super::position::Position;

/// A game rule broken by a strategy.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RuleViolation {
    // === Placement ===
    #[error("position {0} is off the board")]
    OffBoard(Position),

    #[error("position {0} was used twice")]
    DuplicatePosition(Position),

    #[error("{0} pieces cannot be placed")]
    UnplaceableKind(PieceKind),

    #[error("joker at {0} must impersonate rock, paper, scissors or bomb")]
    InvalidDisguise(Position),

    #[error("{count} {kind} pieces placed, at most {max} allowed")]
    TooManyPieces { kind: PieceKind, count: u32, max: u32 },

    #[error("{count} flags placed, exactly {expected} required")]
    FlagCount { count: u32, expected: u32 },

    #[error("no movable piece placed")]
    NoMovablePieces,

    // === Moves ===
    #[error("no move was provided")]
    NoMove,

    #[error("move from {from} to {to} is not a single step")]
    NotAdjacent { from: Position, to: Position },

    #[error("no movable piece of the player at {0}")]
    NotOwnMovablePiece(Position),

    #[error("destination {0} holds the player's own piece")]
    OwnPieceAtDestination(Position),

    // === Joker changes ===
    #[error("no joker of the player at {0}")]
    NotOwnJoker(Position),

    #[error("a joker cannot impersonate {0}")]
    InvalidJokerKind(PieceKind),
}

/// Errors returned by the library API.
#[derive(Error, Debug)]
pub enum RefereeError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid board: {cells} cells, expected {expected}")]
    InvalidBoard { cells: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, RefereeError>;
