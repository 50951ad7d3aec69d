//! Fight adjudication.
//!
//! A fight happens when a piece enters a cell held by an opposing piece,
//! either by moving or because both players placed a piece on the same cell.
//! Both directions of [`Piece::dominates`] are evaluated:
//!
//! | incoming dominates | resident dominates | result                       |
//! |--------------------|--------------------|------------------------------|
//! | yes                | no                 | resident destroyed           |
//! | no                 | yes                | incoming destroyed           |
//! | yes                | yes                | both destroyed               |
//! | no                 | no                 | per [`NeutralCollision`]     |
//!
//! Destroyed pieces are removed from their owner's counters immediately,
//! so a captured last flag or last movable piece changes the owner's status
//! within the same call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameState, NeutralCollision, Piece, PlayerId, PlayerMap, Position};

/// Who came out of a fight alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FightWinner {
    /// This player's piece holds the cell.
    Player(PlayerId),
    /// Both pieces were destroyed.
    Tie,
}

/// Result of one fight, as broadcast to both strategies.
///
/// Carries the true pieces of both contenders, including a Joker's
/// disguise at the time of the fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightOutcome {
    /// Cell the fight took place on.
    pub position: Position,

    /// Each player's contending piece.
    pub pieces: PlayerMap<Piece>,

    pub winner: FightWinner,
}

impl FightOutcome {
    /// The piece `player` fought with.
    #[must_use]
    pub fn piece(&self, player: PlayerId) -> Piece {
        self.pieces[player]
    }

    /// The winning player, `None` for a tie.
    #[must_use]
    pub fn winner_player(&self) -> Option<PlayerId> {
        match self.winner {
            FightWinner::Player(player) => Some(player),
            FightWinner::Tie => None,
        }
    }
}

/// Which of the two contenders survive: `(incoming, resident)`.
///
/// Pure function of the two pieces and the neutral-collision rule.
#[must_use]
pub fn survivors(incoming: &Piece, resident: &Piece, neutral: NeutralCollision) -> (bool, bool) {
    match (incoming.dominates(resident), resident.dominates(incoming)) {
        (true, false) => (true, false),
        (false, true) => (false, true),
        (true, true) => (false, false),
        (false, false) => match neutral {
            NeutralCollision::AttackerHolds => (true, false),
            NeutralCollision::DefenderHolds => (false, true),
            NeutralCollision::BothDestroyed => (false, false),
        },
    }
}

/// Bring `incoming` into `pos`, fighting whatever is there.
///
/// Returns `None` when no fight took place (either side empty): the incoming
/// piece, if any, simply occupies the cell. Otherwise the board and both
/// players' counters are updated and the outcome returned.
///
/// Panics if `pos` is off the board or both pieces belong to the same
/// player.
pub fn resolve_fight(
    state: &mut GameState,
    pos: Position,
    incoming: Piece,
) -> Option<FightOutcome> {
    let resident = state.board.occupant(pos);

    if incoming.is_empty() {
        return None;
    }
    if resident.is_empty() {
        state.board.set_occupant(pos, incoming);
        return None;
    }

    let (attacker, defender) = match (incoming.owner(), resident.owner()) {
        (Some(a), Some(d)) if a != d => (a, d),
        _ => panic!("fight at {pos} between pieces of the same side"),
    };

    let (incoming_survives, resident_survives) =
        survivors(&incoming, &resident, state.config.neutral_collision);

    if !incoming_survives {
        state.destroy(&incoming);
    }
    if !resident_survives {
        state.destroy(&resident);
    }

    let (occupant, winner) = match (incoming_survives, resident_survives) {
        (true, _) => (incoming, FightWinner::Player(attacker)),
        (false, true) => (resident, FightWinner::Player(defender)),
        (false, false) => (Piece::EMPTY, FightWinner::Tie),
    };
    state.board.set_occupant(pos, occupant);

    let mut pieces = PlayerMap::with_value(Piece::EMPTY);
    pieces[attacker] = incoming;
    pieces[defender] = resident;

    debug!(
        position = %pos,
        attacker = %attacker,
        incoming = %incoming.effective_kind(),
        resident = %resident.effective_kind(),
        ?winner,
        "fight"
    );

    Some(FightOutcome {
        position: pos,
        pieces,
        winner,
    })
}
