//! The result of one game.
//!
//! `GameReport` implements `Display` in the referee's textual result format:
//!
//! ```text
//! Winner: 1
//! Reason: All flags of the opponent are captured
//!
//! <10 rows of 10 cells>
//! ```
//!
//! `Winner: 0` denotes a tie.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{
    Board, GameState, PlayerId, PlayerMap, PlayerStatus, RuleViolation, ThresholdPolicy,
};

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Winner(PlayerId),
    Tie,
}

impl GameResult {
    /// Number printed in the report: the winner's number, 0 for a tie.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            GameResult::Winner(player) => player.number(),
            GameResult::Tie => 0,
        }
    }

    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            GameResult::Winner(player) => Some(player),
            GameResult::Tie => None,
        }
    }
}

/// Why the game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    InvalidPlacement,
    InvalidMove,
    NoFlags,
    CantMove,
    /// Too many consecutive turns without a fight.
    FightThreshold,
}

impl EndReason {
    /// The reason a player with `status` dropped out, `None` while playing.
    #[must_use]
    pub const fn from_status(status: PlayerStatus) -> Option<Self> {
        match status {
            PlayerStatus::Playing => None,
            PlayerStatus::InvalidPlacement => Some(EndReason::InvalidPlacement),
            PlayerStatus::InvalidMove => Some(EndReason::InvalidMove),
            PlayerStatus::NoFlags => Some(EndReason::NoFlags),
            PlayerStatus::CantMove => Some(EndReason::CantMove),
        }
    }
}

/// Final record of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameReport {
    pub result: GameResult,
    pub reason: EndReason,

    /// Final status of each player.
    pub statuses: PlayerMap<PlayerStatus>,

    /// The rule each player broke, if any.
    pub violations: PlayerMap<Option<RuleViolation>>,

    /// Number of turns played.
    pub turns: u32,

    /// Consecutive fightless turns at the end of the game.
    pub fightless_turns: u32,

    /// The board as it stood when the game ended.
    pub board: Board,
}

impl GameReport {
    /// Build the report for a finished game.
    ///
    /// The winner is the only player still playing. If both still play the
    /// game ended on the fight threshold and the threshold policy decides.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let statuses = state.players.map(|_, p| p.status());
        let violations = state.players.map(|_, p| p.violation().cloned());

        let (result, reason) = match PlayerId::ALL.map(|p| statuses[p] == PlayerStatus::Playing) {
            [true, true] => (Self::threshold_result(state), EndReason::FightThreshold),
            [true, false] => (
                GameResult::Winner(PlayerId::One),
                Self::reason_of(statuses[PlayerId::Two]),
            ),
            [false, true] => (
                GameResult::Winner(PlayerId::Two),
                Self::reason_of(statuses[PlayerId::One]),
            ),
            [false, false] => (GameResult::Tie, Self::reason_of(statuses[PlayerId::One])),
        };

        Self {
            result,
            reason,
            statuses,
            violations,
            turns: state.turn,
            fightless_turns: state.fightless_turns,
            board: state.board.clone(),
        }
    }

    fn reason_of(status: PlayerStatus) -> EndReason {
        EndReason::from_status(status).unwrap_or(EndReason::FightThreshold)
    }

    fn threshold_result(state: &GameState) -> GameResult {
        match state.config.threshold_policy {
            ThresholdPolicy::Tie => GameResult::Tie,
            ThresholdPolicy::MostPieces => {
                let one = state.players[PlayerId::One].total_pieces();
                let two = state.players[PlayerId::Two].total_pieces();
                match one.cmp(&two) {
                    std::cmp::Ordering::Greater => GameResult::Winner(PlayerId::One),
                    std::cmp::Ordering::Less => GameResult::Winner(PlayerId::Two),
                    std::cmp::Ordering::Equal => GameResult::Tie,
                }
            }
        }
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.result.winner()
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        self.result == GameResult::Tie
    }

    /// The `Reason:` line text.
    #[must_use]
    pub fn reason_text(&self) -> String {
        let both_out = self.statuses.iter().all(|(_, s)| *s != PlayerStatus::Playing);
        if both_out {
            return self.both_out_text();
        }
        match self.reason {
            EndReason::InvalidPlacement => {
                self.violation_text("Bad positioning input", self.loser())
            }
            EndReason::InvalidMove => self.violation_text("Bad move input", self.loser()),
            EndReason::NoFlags => "All flags of the opponent are captured".to_string(),
            EndReason::CantMove => "All moving PIECEs of the opponent are eaten".to_string(),
            EndReason::FightThreshold => {
                format!("{} consecutive moves without a fight", self.fightless_turns)
            }
        }
    }

    fn loser(&self) -> PlayerId {
        self.statuses
            .iter()
            .find(|(_, s)| **s != PlayerStatus::Playing)
            .map_or(PlayerId::One, |(p, _)| p)
    }

    fn violation_text(&self, prefix: &str, player: PlayerId) -> String {
        match &self.violations[player] {
            Some(violation) => format!("{prefix} for player {}: {violation}", player.number()),
            None => format!("{prefix} for player {}", player.number()),
        }
    }

    fn both_out_text(&self) -> String {
        let both_placements_bad = self
            .statuses
            .iter()
            .all(|(_, s)| *s == PlayerStatus::InvalidPlacement);
        if !both_placements_bad {
            return "Both players cannot play (no flags / cannot move)".to_string();
        }

        let details: Vec<String> = self
            .violations
            .iter()
            .filter_map(|(p, v)| v.as_ref().map(|v| format!("player {}: {v}", p.number())))
            .collect();
        if details.is_empty() {
            "Bad positioning input for both players".to_string()
        } else {
            format!("Bad positioning input for both players ({})", details.join("; "))
        }
    }
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Winner: {}", self.result.number())?;
        writeln!(f, "Reason: {}", self.reason_text())?;
        writeln!(f)?;
        write!(f, "{}", self.board)
    }
}
