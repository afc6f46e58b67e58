//! Per-color cache of pseudo-legal destinations, layered by simulation depth.
//!
//! Each nested simulated move gets its own frame, so entries computed for a hypothetical
//! position never leak into its parent. Leaving a simulation drops the frame and the
//! parent's entries become valid again untouched.

use std::collections::HashMap;

use chess_core::{Color, Square};

#[derive(Debug, Clone, Default)]
struct Frame {
    by_color: [HashMap<Square, Vec<Square>>; 2],
}

impl Frame {
    fn clear(&mut self) {
        for map in &mut self.by_color {
            map.clear();
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct MoveCache {
    /// Frames are kept after popping so their allocations are reused.
    frames: Vec<Frame>,
    depth: usize,
}

impl Default for MoveCache {
    fn default() -> Self {
        MoveCache {
            frames: vec![Frame::default()],
            depth: 0,
        }
    }
}

impl MoveCache {
    pub(crate) fn get(&self, color: Color, square: Square) -> Option<&[Square]> {
        self.frames[self.depth].by_color[color.index()]
            .get(&square)
            .map(Vec::as_slice)
    }

    pub(crate) fn insert(&mut self, color: Color, square: Square, targets: Vec<Square>) {
        self.frames[self.depth].by_color[color.index()].insert(square, targets);
    }

    /// Enters a fresh frame for a simulated move.
    pub(crate) fn push(&mut self) {
        self.depth += 1;
        if self.depth == self.frames.len() {
            self.frames.push(Frame::default());
        } else {
            self.frames[self.depth].clear();
        }
    }

    /// Leaves the current frame after undoing a simulated move.
    ///
    /// At the outermost level this clears instead, since an undone real move has no
    /// saved parent frame.
    pub(crate) fn pop(&mut self) {
        if self.depth == 0 {
            self.frames[0].clear();
        } else {
            self.depth -= 1;
        }
    }

    /// Drops everything; used when a real move changes the position for good.
    pub(crate) fn clear(&mut self) {
        self.depth = 0;
        self.frames[0].clear();
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }
}
