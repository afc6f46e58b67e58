//! Scoped hypothetical moves.

use std::ops::{Deref, DerefMut};

use crate::Board;

/// A board with one simulated move applied.
///
/// Dereferences to the [`Board`] in its post-move state. Dropping the guard undoes the
/// move, so the board is restored on every exit path, including early returns and `?`.
/// Moves made through the guard must be undone before it drops.
#[derive(Debug)]
pub struct Simulation<'a> {
    board: &'a mut Board,
}

impl<'a> Simulation<'a> {
    pub(crate) fn new(board: &'a mut Board) -> Self {
        Simulation { board }
    }
}

impl Deref for Simulation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Simulation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.undo_move();
    }
}
