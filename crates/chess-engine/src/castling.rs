//! Castling sides and the "has moved" flags that gate them.

use chess_core::{Color, Square};

/// Column the king starts on.
pub const KING_HOME_COL: u8 = 4;

/// The two castling sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastleSide {
    Queenside = 0,
    Kingside = 1,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::Queenside, CastleSide::Kingside];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Square the king starts castling from.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        Square::new(color.back_row(), KING_HOME_COL)
    }

    /// Corner the rook on this side starts on.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::Queenside => Square::new(color.back_row(), 0),
            CastleSide::Kingside => Square::new(color.back_row(), 7),
        }
    }

    /// Where the king lands.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        match self {
            CastleSide::Queenside => Square::new(color.back_row(), 2),
            CastleSide::Kingside => Square::new(color.back_row(), 6),
        }
    }

    /// Where the rook lands.
    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        match self {
            CastleSide::Queenside => Square::new(color.back_row(), 3),
            CastleSide::Kingside => Square::new(color.back_row(), 5),
        }
    }

    /// Columns between king and rook that must be empty.
    #[inline]
    pub const fn between_cols(self) -> &'static [u8] {
        match self {
            CastleSide::Queenside => &[1, 2, 3],
            CastleSide::Kingside => &[5, 6],
        }
    }

    /// Columns the king crosses or lands on; none may be attacked.
    #[inline]
    pub const fn king_path_cols(self) -> [u8; 2] {
        match self {
            CastleSide::Queenside => [3, 2],
            CastleSide::Kingside => [5, 6],
        }
    }

    /// Recognises a castling move: the king travels two files along its row.
    pub const fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() as i8 - from.col() as i8 {
            2 => Some(CastleSide::Kingside),
            -2 => Some(CastleSide::Queenside),
            _ => None,
        }
    }

    /// Returns the side whose rook starts on `square`, for the given color.
    pub const fn from_rook_home(square: Square, color: Color) -> Option<CastleSide> {
        if square.row() != color.back_row() {
            return None;
        }
        match square.col() {
            0 => Some(CastleSide::Queenside),
            7 => Some(CastleSide::Kingside),
            _ => None,
        }
    }
}

/// Castling eligibility, tracked as "has moved" flags.
///
/// A side may castle only while neither its king nor the relevant rook has moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    /// `[color][side]`, indexed by [`CastleSide::index`].
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Nothing has moved yet.
    pub const INITIAL: CastlingRights = CastlingRights {
        king_moved: [false; 2],
        rook_moved: [[false; 2]; 2],
    };

    /// Every piece counts as moved: no castling for anyone.
    pub const NONE: CastlingRights = CastlingRights {
        king_moved: [true; 2],
        rook_moved: [[true; 2]; 2],
    };

    /// Builds rights from the FEN castling field.
    ///
    /// A missing letter marks that rook as moved; a color with no letters also has its
    /// king marked as moved.
    pub fn from_fen_field(field: &str) -> Self {
        let has = |c: char| field.contains(c);
        let white_k = has('K');
        let white_q = has('Q');
        let black_k = has('k');
        let black_q = has('q');
        CastlingRights {
            king_moved: [!(white_k || white_q), !(black_k || black_q)],
            rook_moved: [[!white_q, !white_k], [!black_q, !black_k]],
        }
    }

    /// Formats the rights as a FEN castling field.
    pub fn to_fen_field(self) -> String {
        let mut field = String::new();
        for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
            if self.can_castle(color, CastleSide::Kingside) {
                field.push(letters[0]);
            }
            if self.can_castle(color, CastleSide::Queenside) {
                field.push(letters[1]);
            }
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    /// Returns true if neither the king nor the rook on `side` has moved.
    #[inline]
    pub const fn can_castle(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }
}
