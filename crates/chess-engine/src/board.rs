//! The board state machine.
//!
//! A [`Board`] is an 8x8 array of optional pieces plus the bookkeeping needed to play and
//! take back moves: side to move, castling flags, cached king squares, an incrementally
//! maintained Zobrist hash, the move history and a cache of pseudo-legal destinations.

use std::fmt;

use chess_core::{Color, Fen, Move, Piece, PieceKind, Square};
use tracing::warn;

use crate::cache::MoveCache;
use crate::castling::{CastleSide, CastlingRights};
use crate::movegen::{self, attacks};
use crate::record::MoveRecord;
use crate::rules::GameState;
use crate::simulation::Simulation;
use crate::zobrist::ZOBRIST;
use crate::BoardError;

/// Mutable chess board with reversible moves.
#[derive(Debug, Clone)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    side_to_move: Color,
    castling: CastlingRights,
    /// King locations, indexed by color. Kept in sync on every make and undo.
    kings: [Option<Square>; 2],
    hash: u64,
    history: Vec<MoveRecord>,
    cache: MoveCache,
    /// FEN counters at construction; later values are derived from the history.
    halfmove_base: u32,
    fullmove_base: u32,
    start_side: Color,
}

impl Board {
    /// Creates the standard starting position.
    pub fn new() -> Self {
        Self::from_fen(Fen::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a board with no pieces and no castling rights, White to move.
    ///
    /// Pieces are added with [`Board::place`]. Kings must be placed before the board is
    /// searched or queried for check.
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling: CastlingRights::NONE,
            kings: [None; 2],
            hash: 0,
            history: Vec::new(),
            cache: MoveCache::default(),
            halfmove_base: 0,
            fullmove_base: 1,
            start_side: Color::White,
        }
    }

    /// Creates a board from a FEN string.
    ///
    /// Castling letters set the "has moved" flags. The en passant field is parsed but not
    /// used: en passant is only offered right after a double push played on this board.
    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parsed = Fen::parse(fen)?;

        let mut kings = [None; 2];
        for square in Square::all() {
            let Some(piece) = parsed.rows[square.row() as usize][square.col() as usize] else {
                continue;
            };
            if piece.kind != PieceKind::King {
                continue;
            }
            let slot = &mut kings[piece.color.index()];
            if slot.is_some() {
                return Err(BoardError::DuplicateKing(piece.color));
            }
            *slot = Some(square);
        }
        for color in Color::ALL {
            if kings[color.index()].is_none() {
                return Err(BoardError::MissingKing(color));
            }
        }

        Ok(Board {
            hash: ZOBRIST.hash_position(&parsed.rows, parsed.side_to_move),
            squares: parsed.rows,
            side_to_move: parsed.side_to_move,
            castling: CastlingRights::from_fen_field(&parsed.castling),
            kings,
            history: Vec::new(),
            cache: MoveCache::default(),
            halfmove_base: parsed.halfmove_clock,
            fullmove_base: parsed.fullmove_number,
            start_side: parsed.side_to_move,
        })
    }

    /// Converts the board to a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            rows: self.squares,
            side_to_move: self.side_to_move,
            castling: self.castling.to_fen_field(),
            en_passant: self.en_passant_square(),
            halfmove_clock: self.halfmove_clock(),
            fullmove_number: self.fullmove_number(),
        }
        .to_fen()
    }

    /// Returns the piece on the given square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Iterates over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.kings[color.index()]
    }

    /// The incrementally maintained Zobrist hash.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Recomputes the Zobrist hash from scratch.
    pub fn compute_hash(&self) -> u64 {
        ZOBRIST.hash_position(&self.squares, self.side_to_move)
    }

    /// All applied moves, oldest first, including simulated ones not yet undone.
    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// The square skipped by a double pawn push on the previous move.
    pub fn en_passant_square(&self) -> Option<Square> {
        let last = self.last_move()?;
        if !last.is_double_pawn_push() {
            return None;
        }
        last.to.offset(-last.moved.color.pawn_direction(), 0)
    }

    /// Plies since the last capture or pawn move.
    pub fn halfmove_clock(&self) -> u32 {
        let mut count = 0;
        for record in self.history.iter().rev() {
            if record.moved.kind == PieceKind::Pawn || record.captured.is_some() {
                return count;
            }
            count += 1;
        }
        self.halfmove_base + count
    }

    /// Full move number, incremented after each Black move.
    pub fn fullmove_number(&self) -> u32 {
        let offset = match self.start_side {
            Color::White => 0,
            Color::Black => 1,
        };
        self.fullmove_base + ((self.history.len() + offset) / 2) as u32
    }

    /// Puts a piece on (or clears) a square, returning what was there.
    ///
    /// Meant for setting up positions; the hash and king cache follow along, and cached
    /// move lists are dropped.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = self.set(square, piece);
        if let Some(old) = previous {
            if old.kind == PieceKind::King && self.kings[old.color.index()] == Some(square) {
                self.kings[old.color.index()] = None;
            }
        }
        if let Some(new) = piece {
            if new.kind == PieceKind::King {
                self.kings[new.color.index()] = Some(square);
            }
        }
        self.cache.clear();
        previous
    }

    /// Pseudo-legal destinations for the piece on `square`.
    ///
    /// Results are cached per color until the position changes. An empty square yields an
    /// empty list.
    pub fn legal_moves(&mut self, square: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(square) else {
            return Vec::new();
        };
        if let Some(cached) = self.cache.get(piece.color, square) {
            return cached.to_vec();
        }
        let targets = movegen::pseudo_legal_moves(self, square);
        self.cache.insert(piece.color, square, targets.clone());
        targets
    }

    /// Every pseudo-legal move for `color`, scanning squares in row-major order.
    pub fn side_moves(&mut self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(48);
        for from in Square::all() {
            if !matches!(self.piece_at(from), Some(piece) if piece.color == color) {
                continue;
            }
            moves.extend(
                self.legal_moves(from)
                    .into_iter()
                    .map(|to| Move::new(from, to)),
            );
        }
        moves
    }

    /// Fully legal moves for the side to move.
    pub fn legal_side_moves(&mut self) -> Vec<Move> {
        let candidates = self.side_moves(self.side_to_move);
        candidates
            .into_iter()
            .filter(|&mv| self.can_make_move(mv))
            .collect()
    }

    /// Returns true if `mv` is legal for the side to move.
    ///
    /// The origin must hold a piece of the side to move, the destination must be among its
    /// pseudo-legal moves, and the move must not leave that side's king attacked.
    pub fn can_make_move(&mut self, mv: Move) -> bool {
        let Some(piece) = self.piece_at(mv.from()) else {
            return false;
        };
        if piece.color != self.side_to_move {
            return false;
        }
        if !self.legal_moves(mv.from()).contains(&mv.to()) {
            return false;
        }
        match self.simulate(mv, None) {
            Some(after) => !after.is_king_attacked(piece.color),
            None => false,
        }
    }

    /// Returns true if `mv` is a pawn reaching its promotion row.
    pub fn is_promotion(&self, mv: Move) -> bool {
        matches!(
            self.piece_at(mv.from()),
            Some(piece) if piece.kind == PieceKind::Pawn && mv.to().row() == piece.color.promotion_row()
        )
    }

    /// Applies a move.
    ///
    /// A real move (`simulate == false`) is validated with [`Board::can_make_move`] first
    /// and returns `false` without touching the board if illegal. A simulated move skips
    /// validation and keeps cached move lists of enclosing positions; it should be undone
    /// with [`Board::undo_move`], or applied through [`Board::simulate`].
    ///
    /// `promotion` picks the piece for a promoting pawn; anything other than a knight,
    /// bishop or rook becomes a queen.
    pub fn make_move(&mut self, mv: Move, simulate: bool, promotion: Option<PieceKind>) -> bool {
        if !simulate && !self.can_make_move(mv) {
            return false;
        }
        let Some(piece) = self.piece_at(mv.from()) else {
            return false;
        };
        self.apply(mv, piece, promotion, simulate);
        true
    }

    /// Applies `mv` as a simulated move and returns a guard that undoes it on drop.
    ///
    /// Returns `None` if the origin square is empty.
    pub fn simulate(&mut self, mv: Move, promotion: Option<PieceKind>) -> Option<Simulation<'_>> {
        if self.make_move(mv, true, promotion) {
            Some(Simulation::new(self))
        } else {
            None
        }
    }

    fn apply(&mut self, mv: Move, piece: Piece, promotion: Option<PieceKind>, simulated: bool) {
        let (from, to) = (mv.from(), mv.to());
        let us = piece.color;
        let prior_rights = self.castling;
        let hash_before = self.hash;

        let en_passant =
            piece.kind == PieceKind::Pawn && from.col() != to.col() && self.piece_at(to).is_none();
        let captured_square = if en_passant {
            Square::new(from.row(), to.col())
        } else {
            to
        };
        let captured = self.set(captured_square, None);

        let promotion = (piece.kind == PieceKind::Pawn && to.row() == us.promotion_row())
            .then(|| PieceKind::promotion_or_queen(promotion));
        self.set(from, None);
        self.set(to, Some(Piece::new(us, promotion.unwrap_or(piece.kind))));

        match piece.kind {
            PieceKind::King => {
                self.kings[us.index()] = Some(to);
                self.castling.mark_king_moved(us);
                if let Some(side) = CastleSide::from_king_move(from, to) {
                    let rook = self.set(side.rook_home(us), None);
                    self.set(side.rook_target(us), rook);
                }
            }
            PieceKind::Rook => {
                if let Some(side) = CastleSide::from_rook_home(from, us) {
                    self.castling.mark_rook_moved(us, side);
                }
            }
            _ => {}
        }

        if let Some(victim) = captured {
            match victim.kind {
                PieceKind::Rook => {
                    if let Some(side) = CastleSide::from_rook_home(captured_square, victim.color) {
                        self.castling.mark_rook_moved(victim.color, side);
                    }
                }
                PieceKind::King => self.kings[victim.color.index()] = None,
                _ => {}
            }
        }

        self.side_to_move = self.side_to_move.opposite();
        self.hash ^= ZOBRIST.black_to_move;

        self.history.push(MoveRecord {
            from,
            to,
            moved: piece,
            captured,
            captured_square,
            prior_rights,
            en_passant,
            promotion,
            simulated,
            hash_before,
        });

        if simulated {
            self.cache.push();
        } else {
            self.cache.clear();
        }
        debug_assert!(self.kings_in_sync());
    }

    /// Takes back the most recent move and returns its record.
    ///
    /// With an empty history this logs a warning and leaves the board unchanged.
    pub fn undo_move(&mut self) -> Option<MoveRecord> {
        let Some(record) = self.history.pop() else {
            warn!("undo requested with an empty move history");
            return None;
        };
        let color = record.moved.color;

        self.side_to_move = self.side_to_move.opposite();
        self.hash ^= ZOBRIST.black_to_move;

        self.set(record.to, None);
        if record.moved.kind == PieceKind::King {
            if let Some(side) = record.castle_side() {
                let rook = self.set(side.rook_target(color), None);
                self.set(side.rook_home(color), rook);
            }
            self.kings[color.index()] = Some(record.from);
        }
        self.set(record.from, Some(record.moved));

        if let Some(victim) = record.captured {
            self.set(record.captured_square, Some(victim));
            if victim.kind == PieceKind::King {
                self.kings[victim.color.index()] = Some(record.captured_square);
            }
        }
        self.castling = record.prior_rights;

        debug_assert_eq!(self.hash, record.hash_before, "hash drifted across make/undo");
        debug_assert!(self.kings_in_sync());

        if record.simulated {
            self.cache.pop();
        } else {
            self.cache.clear();
        }
        Some(record)
    }

    /// Returns true if `color`'s king is attacked. A board without that king is never in check.
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| attacks::is_square_attacked(self, sq, color.opposite()))
    }

    /// Returns true if the side to move is in check.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// Classifies the position for the side to move.
    pub fn terminal_state(&mut self) -> GameState {
        if !self.legal_side_moves().is_empty() {
            return GameState::InProgress;
        }
        if self.in_check() {
            GameState::Checkmate {
                loser: self.side_to_move,
            }
        } else {
            GameState::Stalemate
        }
    }

    /// Writes one square, keeping the hash in step. Returns the previous occupant.
    fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        let previous = std::mem::replace(
            &mut self.squares[square.row() as usize][square.col() as usize],
            piece,
        );
        if let Some(old) = previous {
            self.hash ^= ZOBRIST.piece_key(old, square);
        }
        if let Some(new) = piece {
            self.hash ^= ZOBRIST.piece_key(new, square);
        }
        previous
    }

    fn kings_in_sync(&self) -> bool {
        Color::ALL.iter().all(|&color| match self.kings[color.index()] {
            Some(sq) => self.piece_at(sq) == Some(Piece::new(color, PieceKind::King)),
            None => true,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f g h")?;
        for (row, cells) in self.squares.iter().enumerate() {
            let rank = 8 - row;
            write!(f, "{rank}")?;
            for cell in cells {
                let c = cell.map_or('.', Piece::to_fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f, " {rank}")?;
        }
        write!(f, "  a b c d e f g h")
    }
}
