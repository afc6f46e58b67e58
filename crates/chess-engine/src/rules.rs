//! Game-end classification.

use chess_core::Color;

/// Whether the side to move can continue, and if not, why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// The side to move has at least one legal move.
    InProgress,
    /// The side to move has no legal move and its king is attacked.
    Checkmate { loser: Color },
    /// The side to move has no legal move but is not in check.
    Stalemate,
}

impl GameState {
    /// Returns true if the game has ended.
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Returns the winning color after a checkmate.
    #[inline]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::Checkmate { loser } => Some(loser.opposite()),
            _ => None,
        }
    }
}
