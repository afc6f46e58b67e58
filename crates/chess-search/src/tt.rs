//! Transposition table keyed by Zobrist hash.
//!
//! Entries remember whether the stored score is exact or only a bound from an alpha-beta
//! cutoff, so a probe only short-circuits a node when the stored result settles it for
//! the current window.

use std::collections::HashMap;

use chess_core::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// The true score is at least `score` (the node failed high).
    Lower,
    /// The true score is at most `score` (the node failed low).
    Upper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtEntry {
    pub score: i32,
    /// Remaining depth the score was searched to.
    pub depth: u8,
    pub best_move: Option<Move>,
    pub bound: Bound,
}

impl TtEntry {
    /// Returns true if this entry settles a node searched to `depth` with the given window.
    #[inline]
    pub fn cuts(&self, depth: u8, alpha: i32, beta: i32) -> bool {
        if self.depth < depth {
            return false;
        }
        match self.bound {
            Bound::Exact => true,
            Bound::Lower => self.score >= beta,
            Bound::Upper => self.score <= alpha,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TtStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TtEntry>,
    /// New keys are refused once this many entries are held.
    capacity: Option<usize>,
    stats: TtStats,
}

impl TranspositionTable {
    pub fn new(capacity: Option<usize>) -> Self {
        TranspositionTable {
            entries: HashMap::new(),
            capacity,
            stats: TtStats::default(),
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = TtStats::default();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> TtStats {
        self.stats
    }

    /// Returns the stored entry if it settles a node at `depth` within `(alpha, beta)`.
    pub fn probe(&mut self, key: u64, depth: u8, alpha: i32, beta: i32) -> Option<TtEntry> {
        self.stats.probes += 1;
        let hit = self
            .entries
            .get(&key)
            .copied()
            .filter(|entry| entry.cuts(depth, alpha, beta));
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit
    }

    /// Stores `entry` unless a deeper result for the same key is already held.
    pub fn store(&mut self, key: u64, entry: TtEntry) {
        if let Some(existing) = self.entries.get_mut(&key) {
            if entry.depth >= existing.depth {
                *existing = entry;
                self.stats.stores += 1;
            }
            return;
        }
        if self.capacity.is_some_and(|cap| self.entries.len() >= cap) {
            return;
        }
        self.entries.insert(key, entry);
        self.stats.stores += 1;
    }
}
