//! Core types: players, positions, pieces, the board, state, configuration.
//!
//! Everything here is rule-agnostic data. Legality and fight resolution
//! live in [`crate::rules`]; the turn loop lives in [`crate::game`].

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod piece;
pub mod player;
pub mod position;
pub mod rng;
pub mod state;

pub use action::{JokerChange, Move, PiecePlacement, TurnRecord};
pub use board::Board;
pub use config::{
    NeutralCollision, RulesConfig, ThresholdPolicy, DEFAULT_FIGHT_THRESHOLD, REQUIRED_FLAGS, ROSTER,
};
pub use error::{RefereeError, Result, RuleViolation};
pub use piece::{Piece, PieceKind};
pub use player::{PlayerId, PlayerMap};
pub use position::{Position, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};
pub use rng::GameRng;
pub use state::{GameState, PlayerState, PlayerStatus};
