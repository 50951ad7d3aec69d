//! # rps-referee
//!
//! A referee engine for a two-player rock-paper-scissors strategy board game.
//!
//! Each player secretly places 13 pieces on a shared 10x10 grid, then the
//! players alternate moves. Opposing pieces that meet fight by a
//! rock/paper/scissors dominance rule, extended with immobile Flags and
//! Bombs and a Joker that can change the kind it impersonates.
//!
//! ## Design Principles
//!
//! 1. **Engine Owns the Truth**: The board and both player states live in
//!    the engine. Strategies keep their own mirror built from callbacks.
//!
//! 2. **Need-to-Know Callbacks**: A strategy sees piece owners after
//!    placement, opponent move coordinates, and the true pieces of a fight.
//!    Nothing else.
//!
//! 3. **Violations Are Outcomes**: A strategy breaking a rule is recorded on
//!    its player state and decides the game. It is never an `Err`.
//!
//! 4. **Explicit Policies**: Collisions where neither piece dominates and
//!    games that stall are resolved by configurable rules with documented
//!    defaults.
//!
//! ## Modules
//!
//! - `core`: Pieces, positions, board, players, state, configuration, RNG
//! - `rules`: Fight adjudication and legality checks
//! - `strategy`: Strategy contract, registry and the reference strategy
//! - `game`: The engine and its report
//!
//! ## Example
//!
//! ```
//! use rps_referee::{Game, RulesConfig, StrategyRegistry};
//!
//! let registry = StrategyRegistry::with_builtin();
//! let mut game = Game::from_registry(RulesConfig::new().with_seed(3), &registry, "auto", "auto")
//!     .unwrap();
//!
//! let report = game.play();
//! println!("{report}");
//! ```

pub mod core;
pub mod game;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    Board, GameRng, GameState, JokerChange, Move, NeutralCollision, Piece, PieceKind,
    PiecePlacement, PlayerId, PlayerMap, PlayerState, PlayerStatus, Position, RefereeError,
    RuleViolation, RulesConfig, ThresholdPolicy, TurnRecord,
};

pub use crate::rules::{resolve_fight, FightOutcome, FightWinner};

pub use crate::strategy::{AutoStrategy, OccupancyView, Strategy, StrategyRegistry};

pub use crate::game::{EndReason, Game, GameReport, GameResult};
