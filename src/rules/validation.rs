//! Legality checks for placements, moves and Joker changes.
//!
//! Each check returns the first [`RuleViolation`] it finds. The engine turns
//! a violation into a status transition for the offending player.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{
    Board, JokerChange, Move, Piece, PieceKind, PiecePlacement, PlayerId, Position,
    RuleViolation, REQUIRED_FLAGS, ROSTER,
};

/// Check a player's initial placement and build its pieces.
///
/// Per-placement checks run first (position on board, no duplicate, kind
/// placeable, Joker disguise valid), then the totals (roster limits, exactly
/// one flag, at least one movable piece).
pub fn validate_placements(
    player: PlayerId,
    placements: &[PiecePlacement],
) -> Result<Vec<(Position, Piece)>, RuleViolation> {
    let mut seen = FxHashSet::default();
    let mut counts: FxHashMap<PieceKind, u32> = FxHashMap::default();
    let mut pieces = Vec::with_capacity(placements.len());

    for placement in placements {
        let pos = placement.position;
        if !pos.is_valid() {
            return Err(RuleViolation::OffBoard(pos));
        }
        if !seen.insert(pos) {
            return Err(RuleViolation::DuplicatePosition(pos));
        }
        if !placement.kind.is_placeable() {
            return Err(RuleViolation::UnplaceableKind(placement.kind));
        }

        let piece = if placement.kind == PieceKind::Joker {
            match placement.disguise {
                Some(disguise) if disguise.is_joker_disguise() => Piece::joker(player, disguise),
                _ => return Err(RuleViolation::InvalidDisguise(pos)),
            }
        } else {
            Piece::new(player, placement.kind)
        };

        *counts.entry(placement.kind).or_default() += 1;
        pieces.push((pos, piece));
    }

    for (kind, max) in ROSTER {
        let count = counts.get(&kind).copied().unwrap_or(0);
        if count > max {
            return Err(RuleViolation::TooManyPieces { kind, count, max });
        }
    }

    let flags = counts.get(&PieceKind::Flag).copied().unwrap_or(0);
    if flags != REQUIRED_FLAGS {
        return Err(RuleViolation::FlagCount {
            count: flags,
            expected: REQUIRED_FLAGS,
        });
    }

    if !pieces.iter().any(|(_, piece)| piece.is_movable()) {
        return Err(RuleViolation::NoMovablePieces);
    }

    Ok(pieces)
}

/// Check `player`'s move against the board.
///
/// `None` means the strategy had no move to offer, which is itself a
/// violation.
pub fn validate_move(
    board: &Board,
    player: PlayerId,
    mv: Option<&Move>,
) -> Result<Move, RuleViolation> {
    let mv = *mv.ok_or(RuleViolation::NoMove)?;

    if !mv.from.is_valid() {
        return Err(RuleViolation::OffBoard(mv.from));
    }
    if !mv.to.is_valid() {
        return Err(RuleViolation::OffBoard(mv.to));
    }
    if !mv.from.is_adjacent(mv.to) {
        return Err(RuleViolation::NotAdjacent { from: mv.from, to: mv.to });
    }

    let mover = board.occupant(mv.from);
    if !mover.is_owned_by(player) || !mover.is_movable() {
        return Err(RuleViolation::NotOwnMovablePiece(mv.from));
    }
    if board.occupant(mv.to).is_owned_by(player) {
        return Err(RuleViolation::OwnPieceAtDestination(mv.to));
    }

    Ok(mv)
}

/// Check `player`'s Joker change against the board.
pub fn validate_joker_change(
    board: &Board,
    player: PlayerId,
    change: &JokerChange,
) -> Result<(), RuleViolation> {
    if !change.position.is_valid() {
        return Err(RuleViolation::OffBoard(change.position));
    }
    if !change.new_kind.is_joker_disguise() {
        return Err(RuleViolation::InvalidJokerKind(change.new_kind));
    }

    let piece = board.occupant(change.position);
    if !piece.is_owned_by(player) || !piece.is_joker() {
        return Err(RuleViolation::NotOwnJoker(change.position));
    }

    Ok(())
}
