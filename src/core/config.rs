//! Rules configuration.
//!
//! The board and roster are fixed; what can be configured are the two
//! situations the rules leave open:
//!
//! - what happens when neither piece dominates the other ([`NeutralCollision`])
//! - how a game ends once the no-fight threshold is reached ([`ThresholdPolicy`])

use serde::{Deserialize, Serialize};

use super::error::{RefereeError, Result};
use super::piece::PieceKind;

/// Pieces each player places, by kind.
pub const ROSTER: [(PieceKind, u32); 6] = [
    (PieceKind::Flag, 1),
    (PieceKind::Rock, 2),
    (PieceKind::Paper, 5),
    (PieceKind::Scissors, 1),
    (PieceKind::Bomb, 2),
    (PieceKind::Joker, 2),
];

/// Flags each player must place.
pub const REQUIRED_FLAGS: u32 = 1;

/// Consecutive turns without a fight after which the game ends.
pub const DEFAULT_FIGHT_THRESHOLD: u32 = 100;

/// Outcome of a collision in which neither piece dominates the other
/// (same kind, Bomb vs Bomb, Flag vs Flag).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeutralCollision {
    /// The incoming piece destroys the resident one.
    #[default]
    AttackerHolds,
    /// The incoming piece is destroyed.
    DefenderHolds,
    /// Both pieces are destroyed.
    BothDestroyed,
}

/// Result when the no-fight threshold is reached with both players active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// The game is a tie.
    #[default]
    Tie,
    /// The player with more pieces left wins; equal counts tie.
    MostPieces,
}

/// Rules configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Consecutive fightless turns that end the game (default 100).
    pub fight_threshold: u32,

    /// Resolution of a collision where neither piece dominates.
    pub neutral_collision: NeutralCollision,

    /// Result when the fight threshold is reached.
    pub threshold_policy: ThresholdPolicy,

    /// Seed handed to strategies built from a registry.
    pub seed: u64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            fight_threshold: DEFAULT_FIGHT_THRESHOLD,
            neutral_collision: NeutralCollision::default(),
            threshold_policy: ThresholdPolicy::default(),
            seed: 42,
        }
    }
}

impl RulesConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fightless-turn threshold.
    pub fn with_fight_threshold(mut self, turns: u32) -> Self {
        self.fight_threshold = turns;
        self
    }

    /// Set the neutral-collision rule.
    pub fn with_neutral_collision(mut self, rule: NeutralCollision) -> Self {
        self.neutral_collision = rule;
        self
    }

    /// Set the threshold policy.
    pub fn with_threshold_policy(mut self, policy: ThresholdPolicy) -> Self {
        self.threshold_policy = policy;
        self
    }

    /// Set the strategy seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject configurations that cannot run a game.
    pub fn validate(&self) -> Result<()> {
        if self.fight_threshold == 0 {
            return Err(RefereeError::InvalidConfig(
                "fight_threshold must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
