//! Game rules: fight adjudication and legality checks.
//!
//! These functions operate on [`crate::core`] data and never call into a
//! strategy. The turn loop in [`crate::game`] composes them.

pub mod fight;
pub mod validation;

pub use fight::{resolve_fight, survivors, FightOutcome, FightWinner};
pub use validation::{validate_joker_change, validate_move, validate_placements};
