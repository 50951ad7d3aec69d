//! The 10x10 playing grid.
//!
//! A `Board` maps every on-board [`Position`] to exactly one [`Piece`]
//! (possibly [`Piece::EMPTY`]). It knows nothing about rules; the game
//! engine decides what may be written where.
//!
//! Reading or writing an off-board position is a bug in the caller and
//! panics. Use [`Board::get`] when the position comes from outside.

use serde::{Deserialize, Serialize};

use super::error::RefereeError;
use super::piece::Piece;
use super::player::PlayerId;
use super::position::{Position, BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// Fixed-size grid of pieces.
///
/// Serializes as a flat row-major list of cells; deserializing rejects any
/// list that is not exactly one cell per board position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    cells: Vec<Piece>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: vec![Piece::EMPTY; BOARD_CELLS],
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Piece::EMPTY);
    }

    /// Check whether `pos` lies on this board.
    #[must_use]
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.is_valid()
    }

    fn index(pos: Position) -> usize {
        match pos.index() {
            Some(idx) => idx,
            None => panic!("position {pos} is off the {BOARD_COLS}x{BOARD_ROWS} board"),
        }
    }

    /// Get the occupant of an on-board cell.
    ///
    /// Panics if `pos` is off the board.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Piece {
        self.cells[Self::index(pos)]
    }

    /// Get the occupant, or `None` for off-board positions.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        pos.index().map(|idx| self.cells[idx])
    }

    /// Replace the occupant of an on-board cell.
    ///
    /// Panics if `pos` is off the board.
    pub fn set_occupant(&mut self, pos: Position, piece: Piece) {
        self.cells[Self::index(pos)] = piece;
    }

    /// Remove and return the occupant, leaving the cell empty.
    pub fn take(&mut self, pos: Position) -> Piece {
        std::mem::take(&mut self.cells[Self::index(pos)])
    }

    /// Mutable access to an on-board cell.
    pub fn occupant_mut(&mut self, pos: Position) -> &mut Piece {
        &mut self.cells[Self::index(pos)]
    }

    /// Owner of the piece at `pos`, `None` if empty.
    #[must_use]
    pub fn owner(&self, pos: Position) -> Option<PlayerId> {
        self.occupant(pos).owner()
    }

    /// Iterate over every cell, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().zip(self.cells.iter().copied())
    }

    /// Iterate over the cells holding `player`'s pieces.
    pub fn pieces_of(&self, player: PlayerId) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.iter().filter(move |(_, piece)| piece.is_owned_by(player))
    }

    /// Number of cells holding `player`'s pieces.
    #[must_use]
    pub fn count_owned(&self, player: PlayerId) -> usize {
        self.pieces_of(player).count()
    }
}

impl TryFrom<Vec<Piece>> for Board {
    type Error = RefereeError;

    fn try_from(cells: Vec<Piece>) -> Result<Self, Self::Error> {
        if cells.len() != BOARD_CELLS {
            return Err(RefereeError::InvalidBoard {
                cells: cells.len(),
                expected: BOARD_CELLS,
            });
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 1..=BOARD_ROWS {
            for x in 1..=BOARD_COLS {
                write!(f, "{}", self.occupant(Position::new(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
