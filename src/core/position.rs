//! Board coordinates.
//!
//! Positions are one-based: `(1, 1)` is the top-left cell and `(10, 10)` the
//! bottom-right. `x` is the column, `y` the row.
//!
//! A `Position` can hold any coordinates so that strategies are free to
//! produce off-board values; every consumer of external coordinates calls
//! [`Position::is_valid`] before touching a board.
//!
//! ```
//! use rps_referee::core::Position;
//!
//! let corner = Position::new(1, 1);
//! assert!(corner.is_valid());
//! assert_eq!(corner.neighbors().len(), 3);
//!
//! assert!(!Position::new(0, 5).is_valid());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Number of columns on the board.
pub const BOARD_COLS: i32 = 10;

/// Number of rows on the board.
pub const BOARD_ROWS: i32 = 10;

/// Total number of cells.
pub const BOARD_CELLS: usize = (BOARD_COLS * BOARD_ROWS) as usize;

/// A one-based board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column, 1..=10 when valid.
    pub x: i32,
    /// Row, 1..=10 when valid.
    pub y: i32,
}

impl Position {
    /// Create a position. No bounds check is performed.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Check whether the position lies on the board.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.x >= 1 && self.x <= BOARD_COLS && self.y >= 1 && self.y <= BOARD_ROWS
    }

    /// Row-major cell index, or `None` for off-board positions.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_valid() {
            Some(((self.y - 1) * BOARD_COLS + (self.x - 1)) as usize)
        } else {
            None
        }
    }

    /// Chebyshev (king-move) distance.
    #[must_use]
    pub fn distance(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// True when `other` is one of the eight surrounding cells.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.distance(other) == 1
    }

    /// On-board neighbours in column-major order: left column top to
    /// bottom, then the same column, then the right column.
    #[must_use]
    pub fn neighbors(self) -> SmallVec<[Position; 8]> {
        let mut out = SmallVec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let pos = Position::new(self.x + dx, self.y + dy);
                if pos.is_valid() {
                    out.push(pos);
                }
            }
        }
        out
    }

    /// Iterate over every on-board position, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=BOARD_ROWS).flat_map(|y| (1..=BOARD_COLS).map(move |x| Position::new(x, y)))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
