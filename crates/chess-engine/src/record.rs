//! Move records: everything needed to invert one applied move.

use chess_core::{Move, Piece, PieceKind, Square};

use crate::castling::{CastleSide, CastlingRights};

/// One entry of the board's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` (a pawn, for promotions).
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Where the captured piece stood; differs from `to` only for en passant.
    pub captured_square: Square,
    /// Castling flags before the move.
    pub prior_rights: CastlingRights,
    pub en_passant: bool,
    /// The piece kind the pawn became, if this was a promotion.
    pub promotion: Option<PieceKind>,
    pub(crate) simulated: bool,
    pub(crate) hash_before: u64,
}

impl MoveRecord {
    /// The (origin, destination) pair that produced this record.
    #[inline]
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }

    /// Returns true for a pawn advancing two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved.kind == PieceKind::Pawn && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Returns the castling side if this record is a castling king move.
    #[inline]
    pub fn castle_side(&self) -> Option<CastleSide> {
        if self.moved.kind == PieceKind::King {
            CastleSide::from_king_move(self.from, self.to)
        } else {
            None
        }
    }
}
