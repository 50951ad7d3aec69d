//! Reference automatic strategy.
//!
//! Keeps a private mirror of the board. Own pieces are known exactly;
//! opponent pieces appear as `Unknown` until a fight reveals them.
//!
//! ## Layout
//!
//! The flag sits in a corner behind two bombs and a bomb-disguised Joker.
//! The remaining pieces are spread over the board. The whole layout is
//! rotated by a random multiple of 90 degrees, so the flag can end up in any
//! corner.
//!
//! ## Moves
//!
//! Rocks move first, then Papers, then Scissors, then Jokers wearing a
//! movable disguise. The first such piece (row-major scan) with a neighbour
//! not held by its own side steps onto the first such neighbour.

use rustc_hash::FxHashMap;

use super::contract::{OccupancyView, Strategy};
use crate::core::{
    Board, GameRng, JokerChange, Move, Piece, PieceKind, PiecePlacement, PlayerId, Position,
    BOARD_COLS, ROSTER,
};
use crate::rules::{FightOutcome, FightWinner};

/// The unrotated layout, in `(x, y)` coordinates.
const SEED_LAYOUT: [(i32, i32, PieceKind, Option<PieceKind>); 13] = [
    (1, 1, PieceKind::Flag, None),
    (1, 2, PieceKind::Bomb, None),
    (2, 1, PieceKind::Bomb, None),
    (2, 2, PieceKind::Joker, Some(PieceKind::Bomb)),
    (6, 6, PieceKind::Joker, Some(PieceKind::Bomb)),
    (3, 8, PieceKind::Rock, None),
    (9, 3, PieceKind::Rock, None),
    (3, 3, PieceKind::Paper, None),
    (4, 8, PieceKind::Paper, None),
    (5, 5, PieceKind::Paper, None),
    (6, 9, PieceKind::Paper, None),
    (7, 5, PieceKind::Paper, None),
    (8, 7, PieceKind::Scissors, None),
];

/// Rotate a position a quarter turn.
fn rotate(pos: Position) -> Position {
    Position::new(pos.y, BOARD_COLS + 1 - pos.x)
}

/// The seed layout turned `quarter_turns` times.
pub(crate) fn seed_layout(quarter_turns: usize) -> Vec<PiecePlacement> {
    SEED_LAYOUT
        .iter()
        .map(|&(x, y, kind, disguise)| {
            let mut position = Position::new(x, y);
            for _ in 0..quarter_turns % 4 {
                position = rotate(position);
            }
            PiecePlacement {
                position,
                kind,
                disguise,
            }
        })
        .collect()
}

/// The built-in strategy, registered as `"auto"`.
#[derive(Clone, Debug)]
pub struct AutoStrategy {
    rng: GameRng,
    player: PlayerId,
    board: Board,
    remaining: FxHashMap<PieceKind, u32>,
}

impl AutoStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            player: PlayerId::One,
            board: Board::new(),
            remaining: ROSTER.into_iter().collect(),
        }
    }

    /// The private mirror board.
    #[must_use]
    pub fn mirror(&self) -> &Board {
        &self.board
    }

    /// Own pieces of `kind` believed alive.
    #[must_use]
    pub fn remaining(&self, kind: PieceKind) -> u32 {
        self.remaining.get(&kind).copied().unwrap_or(0)
    }

    fn lose(&mut self, piece: &Piece) {
        if let Some(count) = self.remaining.get_mut(&piece.kind()) {
            *count = count.saturating_sub(1);
        }
    }

    fn is_mine(&self, pos: Position) -> bool {
        self.board.occupant(pos).is_owned_by(self.player)
    }

    /// First neighbour of `from` not held by our side.
    fn free_neighbor(&self, from: Position) -> Option<Position> {
        from.neighbors().into_iter().find(|&to| !self.is_mine(to))
    }

    /// First own piece satisfying `select` that has somewhere to go.
    fn find_move(&self, select: impl Fn(&Piece) -> bool) -> Option<Move> {
        self.board
            .pieces_of(self.player)
            .filter(|(_, piece)| select(piece))
            .find_map(|(from, _)| self.free_neighbor(from).map(|to| Move::new(from, to)))
    }

    fn choose_move(&self) -> Option<Move> {
        PieceKind::MOVABLE
            .into_iter()
            .filter(|&kind| self.remaining(kind) > 0)
            .find_map(|kind| self.find_move(|piece| piece.kind() == kind))
            .or_else(|| self.find_move(|piece| piece.is_joker() && piece.is_movable()))
    }
}

impl Strategy for AutoStrategy {
    fn initial_positions(&mut self, player: PlayerId) -> Vec<PiecePlacement> {
        self.player = player;
        self.board.clear();
        self.remaining = ROSTER.into_iter().collect();

        let placements = seed_layout(self.rng.gen_range_usize(0..4));
        for placement in &placements {
            let piece = match placement.disguise {
                Some(disguise) => Piece::joker(player, disguise),
                None => Piece::new(player, placement.kind),
            };
            self.board.set_occupant(placement.position, piece);
        }
        placements
    }

    fn notify_on_initial_board(&mut self, view: &OccupancyView<'_>, fights: &[FightOutcome]) {
        let opponent = self.player.opponent();
        for pos in Position::all() {
            match view.owner(pos) {
                Some(owner) if owner == opponent => {
                    self.board.set_occupant(pos, Piece::unknown(opponent));
                }
                Some(_) => {}
                None => {
                    if self.is_mine(pos) {
                        self.board.set_occupant(pos, Piece::EMPTY);
                    }
                }
            }
        }
        for fight in fights {
            self.notify_fight_result(fight);
        }
    }

    fn notify_on_opponent_move(&mut self, mv: &Move) {
        if !mv.from.is_valid() || !mv.to.is_valid() {
            return;
        }
        let piece = self.board.take(mv.from);
        self.board.set_occupant(mv.to, piece);
    }

    fn notify_fight_result(&mut self, fight: &FightOutcome) {
        let ours = fight.piece(self.player);
        let theirs = fight.piece(self.player.opponent());

        let occupant = match fight.winner {
            FightWinner::Player(winner) if winner == self.player => ours,
            FightWinner::Player(_) => {
                self.lose(&ours);
                theirs
            }
            FightWinner::Tie => {
                self.lose(&ours);
                Piece::EMPTY
            }
        };
        self.board.set_occupant(fight.position, occupant);
    }

    fn next_move(&mut self) -> Option<Move> {
        let mv = self.choose_move()?;

        let piece = self.board.take(mv.from);
        if self.board.owner(mv.to).is_none() {
            self.board.set_occupant(mv.to, piece);
        }
        Some(mv)
    }

    fn joker_change(&mut self) -> Option<JokerChange> {
        if PieceKind::MOVABLE.into_iter().any(|kind| self.remaining(kind) > 0) {
            return None;
        }
        let (position, _) = self
            .board
            .pieces_of(self.player)
            .find(|(_, piece)| piece.is_joker() && piece.disguise() == Some(PieceKind::Bomb))?;

        self.board.occupant_mut(position).set_disguise(PieceKind::Scissors);
        Some(JokerChange::new(position, PieceKind::Scissors))
    }
}
