//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by board hash,
//! enabling reuse of previous search results for positions we've seen before.
//!
//! # Example
//!
//! ```
//! use gomoku_agent::search::{Bound, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1024).unwrap();
//!
//! // Store a search result
//! let hash = 0x123456789ABCDEF0;
//! tt.store(hash, 5, 100, Bound::Exact);
//!
//! // Probe for the result
//! assert_eq!(tt.probe(hash, 5, -1000, 1000), Some(100));
//! assert_eq!(tt.probe(hash, 6, -1000, 1000), None);
//! ```

use crate::error::{ConfigError, EngineError, EngineResult};
use crate::eval::Score;

/// How a stored score relates to the true value of the position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The search completed inside the window
    Exact,
    /// Cut off at a minimizing node, or no move improved the window
    Lower,
    /// Cut off at a maximizing node
    Upper,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub key: u64,
    /// Evaluation score
    pub score: Score,
    /// Remaining depth the score was searched to
    pub depth: u8,
    pub bound: Bound,
}

/// Transposition table for caching search results.
///
/// Direct-mapped: each hash maps to exactly one slot (`hash % capacity`)
/// with no chaining. A store replaces the slot when its depth is at least
/// the resident entry's, so an unrelated position may be evicted.
#[derive(Debug)]
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
}

impl TranspositionTable {
    /// Allocate a table with `capacity` slots.
    ///
    /// # Errors
    ///
    /// Fails when `capacity` is zero or the memory cannot be reserved.
    pub fn new(capacity: usize) -> EngineResult<Self> {
        if capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "tt_capacity",
                reason: "must be at least 1 slot".to_string(),
            }
            .into());
        }

        let mut entries = Vec::new();
        entries
            .try_reserve_exact(capacity)
            .map_err(|_| EngineError::TableAllocation { slots: capacity })?;
        entries.resize(capacity, None);

        Ok(Self { entries })
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// Probe the table for a position.
    ///
    /// Hits only when the slot holds `key` searched to at least `depth`:
    /// - `Exact` yields the stored score
    /// - `Lower` yields `alpha` when the stored score is at most `alpha`
    /// - `Upper` yields `beta` when the stored score is at least `beta`
    ///
    /// Every other case is a miss.
    #[must_use]
    pub fn probe(&self, key: u64, depth: u8, alpha: Score, beta: Score) -> Option<Score> {
        let entry = self.entries[self.index(key)]?;

        if entry.key != key || entry.depth < depth {
            return None;
        }

        match entry.bound {
            Bound::Exact => Some(entry.score),
            Bound::Lower if entry.score <= alpha => Some(alpha),
            Bound::Upper if entry.score >= beta => Some(beta),
            _ => None,
        }
    }

    /// Store a position in the table.
    ///
    /// Depth-priority replacement: an empty slot is always written, an
    /// occupied one only when `depth` is at least the resident depth.
    pub fn store(&mut self, key: u64, depth: u8, score: Score, bound: Bound) {
        let idx = self.index(key);

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => depth >= e.depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                key,
                score,
                depth,
                bound,
            });
        }
    }

    /// Raw slot contents for `key`'s address, whatever position it holds.
    #[must_use]
    pub fn slot(&self, key: u64) -> Option<TTEntry> {
        self.entries[self.index(key)]
    }

    /// Clear all entries in the table.
    ///
    /// Called at the start of every move decision; the allocation is kept.
    pub fn clear(&mut self) {
        self.entries.fill(None);
    }

    /// Number of slots
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Get statistics about table usage.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn stats(&self) -> TTStats {
        let size = self.entries.len();
        let used = self.entries.iter().filter(|e| e.is_some()).count();
        TTStats {
            size,
            used,
            usage_percent: (used as f64 / size as f64 * 100.0) as u8,
        }
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy)]
pub struct TTStats {
    /// Total number of slots in the table
    pub size: usize,
    /// Number of slots currently occupied
    pub used: usize,
    /// Percentage of table in use (0-100)
    pub usage_percent: u8,
}
