//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when a single cell
//! changes state. This is essential for efficient transposition table lookups
//! during search.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gomoku_agent::board::{Board, Pos, Stone};
//! use gomoku_agent::search::ZobristTable;
//!
//! let zt = Arc::new(ZobristTable::new(7));
//! let mut board = Board::new(Arc::clone(&zt));
//! board.initialize();
//!
//! let before = board.hash();
//! board.set(Pos::new(4, 4), Stone::Black);
//!
//! // Incremental update is equivalent to full recomputation
//! assert_eq!(board.hash(), board.compute_hash());
//! assert_eq!(board.hash(), before ^ zt.key(Stone::Black, Pos::new(4, 4)));
//! ```

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Pos, Stone, TOTAL_CELLS};

/// Zobrist hash table for position hashing.
///
/// Holds one random key per (cell state, cell) pair, drawn once from a
/// seeded stream and immutable afterwards. The empty state contributes
/// nothing to a position hash, so a board's hash is the XOR of the keys of
/// its occupied cells.
#[derive(Debug)]
pub struct ZobristTable {
    /// `keys[state][cell]`, state indexed by [`Stone::index`]
    keys: [[u64; TOTAL_CELLS]; 3],
    seed: u64,
}

impl ZobristTable {
    /// Create a table whose keys are generated from `seed`.
    ///
    /// The same seed always yields the same table, so hashes are
    /// reproducible across runs.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        let mut keys = [[0u64; TOTAL_CELLS]; 3];
        for plane in &mut keys {
            for key in plane.iter_mut() {
                *key = rng.next_u64();
            }
        }

        Self { keys, seed }
    }

    /// Key XORed into a position hash for `stone` at `pos`.
    ///
    /// Always 0 for [`Stone::Empty`].
    #[inline]
    #[must_use]
    pub fn key(&self, stone: Stone, pos: Pos) -> u64 {
        match stone {
            Stone::Empty => 0,
            _ => self.keys[stone.index()][pos.to_index()],
        }
    }

    /// Raw table entry, including the (unused) empty-state plane.
    #[inline]
    #[must_use]
    pub fn raw(&self, stone: Stone, pos: Pos) -> u64 {
        self.keys[stone.index()][pos.to_index()]
    }

    /// Seed the table was generated from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
