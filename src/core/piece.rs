//! Pieces and the dominance relation.
//!
//! ## Kinds
//!
//! Six kinds can be placed: Flag, Rock, Paper, Scissors, Bomb and Joker.
//! `Unknown` only appears on a strategy's private board for an opponent piece
//! that has not been revealed, and `Empty` marks a free cell.
//!
//! ## Dominance
//!
//! [`Piece::dominates`] answers "does this piece destroy `other` on
//! contact?". It is evaluated on the effective kind, which for a Joker is the
//! kind it currently impersonates. The relation is not antisymmetric: a
//! movable piece and a Bomb dominate each other, so both are destroyed.
//!
//! | this \ other | R | P | S | B | F |
//! |--------------|---|---|---|---|---|
//! | Rock         |   |   | x | x | x |
//! | Paper        | x |   |   | x | x |
//! | Scissors     |   | x |   | x | x |
//! | Bomb         | x | x | x |   | x |
//! | Flag         |   |   |   |   |   |

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// The category of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceKind {
    Flag,
    Rock,
    Paper,
    Scissors,
    Bomb,
    Joker,
    /// An opponent piece whose kind has not been revealed.
    Unknown,
    /// No piece.
    Empty,
}

impl PieceKind {
    /// Kinds a player may put on the board.
    pub const PLACEABLE: [PieceKind; 6] = [
        PieceKind::Flag,
        PieceKind::Rock,
        PieceKind::Paper,
        PieceKind::Scissors,
        PieceKind::Bomb,
        PieceKind::Joker,
    ];

    /// Kinds that can move on their own.
    pub const MOVABLE: [PieceKind; 3] = [PieceKind::Rock, PieceKind::Paper, PieceKind::Scissors];

    /// One-letter symbol used in board renderings.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Flag => 'F',
            PieceKind::Rock => 'R',
            PieceKind::Paper => 'P',
            PieceKind::Scissors => 'S',
            PieceKind::Bomb => 'B',
            PieceKind::Joker => 'J',
            PieceKind::Unknown => '#',
            PieceKind::Empty => ' ',
        }
    }

    /// Rock, Paper or Scissors.
    #[must_use]
    pub const fn is_movable(self) -> bool {
        matches!(self, PieceKind::Rock | PieceKind::Paper | PieceKind::Scissors)
    }

    /// Kinds a Joker may impersonate.
    #[must_use]
    pub const fn is_joker_disguise(self) -> bool {
        matches!(
            self,
            PieceKind::Rock | PieceKind::Paper | PieceKind::Scissors | PieceKind::Bomb
        )
    }

    /// Kinds a player may place.
    #[must_use]
    pub const fn is_placeable(self) -> bool {
        !matches!(self, PieceKind::Unknown | PieceKind::Empty)
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Flag => "flag",
            PieceKind::Rock => "rock",
            PieceKind::Paper => "paper",
            PieceKind::Scissors => "scissors",
            PieceKind::Bomb => "bomb",
            PieceKind::Joker => "joker",
            PieceKind::Unknown => "unknown",
            PieceKind::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// The occupant of a cell.
///
/// ```
/// use rps_referee::core::{Piece, PieceKind, PlayerId};
///
/// let rock = Piece::new(PlayerId::One, PieceKind::Rock);
/// let scissors = Piece::new(PlayerId::Two, PieceKind::Scissors);
/// assert!(rock.dominates(&scissors));
/// assert!(!scissors.dominates(&rock));
///
/// let joker = Piece::joker(PlayerId::Two, PieceKind::Paper);
/// assert!(joker.dominates(&rock));
/// assert!(joker.is_movable());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    owner: Option<PlayerId>,
    kind: PieceKind,
    disguise: Option<PieceKind>,
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Piece {
    /// The empty cell marker.
    pub const EMPTY: Piece = Piece {
        owner: None,
        kind: PieceKind::Empty,
        disguise: None,
    };

    /// Create a non-Joker piece.
    ///
    /// Panics for `Joker` (use [`Piece::joker`]) and `Empty` (use
    /// [`Piece::EMPTY`]).
    #[must_use]
    pub fn new(owner: PlayerId, kind: PieceKind) -> Self {
        assert!(
            !matches!(kind, PieceKind::Joker | PieceKind::Empty),
            "Piece::new cannot create a {kind} piece"
        );
        Self {
            owner: Some(owner),
            kind,
            disguise: None,
        }
    }

    /// Create a Joker impersonating `disguise`.
    ///
    /// Panics if `disguise` is not Rock, Paper, Scissors or Bomb.
    #[must_use]
    pub fn joker(owner: PlayerId, disguise: PieceKind) -> Self {
        assert!(disguise.is_joker_disguise(), "a joker cannot impersonate a {disguise}");
        Self {
            owner: Some(owner),
            kind: PieceKind::Joker,
            disguise: Some(disguise),
        }
    }

    /// An opponent piece of unrevealed kind, for strategy boards.
    #[must_use]
    pub fn unknown(owner: PlayerId) -> Self {
        Self::new(owner, PieceKind::Unknown)
    }

    /// Owning player, `None` for an empty cell.
    #[must_use]
    pub const fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// The piece's true kind.
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// The impersonated kind, only set for Jokers.
    #[must_use]
    pub const fn disguise(&self) -> Option<PieceKind> {
        self.disguise
    }

    /// The kind the piece fights and moves as.
    #[must_use]
    pub fn effective_kind(&self) -> PieceKind {
        match (self.kind, self.disguise) {
            (PieceKind::Joker, Some(disguise)) => disguise,
            (kind, _) => kind,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.kind, PieceKind::Joker)
    }

    /// Check whether `player` owns this piece.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// True for Rock/Paper/Scissors and Jokers impersonating one of them.
    #[must_use]
    pub fn is_movable(&self) -> bool {
        self.effective_kind().is_movable()
    }

    /// Change a Joker's disguise. Returns `false` (and changes nothing) for
    /// non-Jokers or an invalid disguise.
    pub fn set_disguise(&mut self, disguise: PieceKind) -> bool {
        if !self.is_joker() || !disguise.is_joker_disguise() {
            return false;
        }
        self.disguise = Some(disguise);
        true
    }

    /// Whether this piece destroys `other` on contact.
    #[must_use]
    pub fn dominates(&self, other: &Piece) -> bool {
        use PieceKind::{Bomb, Flag, Paper, Rock, Scissors};

        match (self.effective_kind(), other.effective_kind()) {
            (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => true,
            (Bomb, Rock | Paper | Scissors) | (Rock | Paper | Scissors, Bomb) => true,
            (Rock | Paper | Scissors | Bomb, Flag) => true,
            _ => false,
        }
    }

    /// Render symbol: upper case for player 1, lower case for player 2.
    #[must_use]
    pub fn symbol(&self) -> char {
        let symbol = self.kind.symbol();
        match self.owner {
            Some(PlayerId::Two) => symbol.to_ascii_lowercase(),
            _ => symbol,
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
