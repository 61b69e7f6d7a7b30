//! Board structure with an incrementally maintained Zobrist hash

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::search::ZobristTable;

/// Game board: a fixed grid of cell states plus the running position hash.
///
/// Every mutation goes through [`Board::set`], which XORs the old cell key
/// out and the new one in, so `hash()` always equals the XOR of the keys of
/// all occupied cells.
#[derive(Debug, Clone)]
pub struct Board {
    cells: [Stone; TOTAL_CELLS],
    hash: u64,
    zobrist: Arc<ZobristTable>,
}

impl Board {
    /// Empty board hashed with `zobrist`.
    pub fn new(zobrist: Arc<ZobristTable>) -> Self {
        Self {
            cells: [Stone::Empty; TOTAL_CELLS],
            hash: 0,
            zobrist,
        }
    }

    /// Clear the grid and place the 4-stone center opening.
    ///
    /// For an N x N board the seed is `(a, a)` and `(b, b)` for White,
    /// `(b, a)` and `(a, b)` for Black, where `a = ceil(N/2) - 1` and
    /// `b = floor(N/2)`.
    pub fn initialize(&mut self) {
        self.cells = [Stone::Empty; TOTAL_CELLS];

        let (a, b) = Self::seed_centers();
        self.cells[Pos::new(a, a).to_index()] = Stone::White;
        self.cells[Pos::new(b, b).to_index()] = Stone::White;
        self.cells[Pos::new(b, a).to_index()] = Stone::Black;
        self.cells[Pos::new(a, b).to_index()] = Stone::Black;

        self.hash = self.compute_hash();
    }

    /// Row/column of the two seed diagonals.
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_centers() -> (u8, u8) {
        (((BOARD_SIZE + 1) / 2 - 1) as u8, (BOARD_SIZE / 2) as u8)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.to_index()]
    }

    /// Stone at `(row, col)`, `None` when off the board.
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Current position hash
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Change a single cell, updating the hash in O(1).
    ///
    /// Callers keep `pos` on the grid; no other validation happens here.
    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        let idx = pos.to_index();
        let old = self.cells[idx];
        self.hash ^= self.zobrist.key(old, pos) ^ self.zobrist.key(stone, pos);
        self.cells[idx] = stone;
    }

    /// Apply `stone` at `pos` for the lifetime of the returned guard.
    ///
    /// The previous cell state is restored when the guard drops, on every
    /// exit path of the caller.
    #[inline]
    pub fn play(&mut self, pos: Pos, stone: Stone) -> MoveGuard<'_> {
        let prev = self.get(pos);
        self.set(pos, stone);
        MoveGuard {
            board: self,
            pos,
            prev,
        }
    }

    /// Full XOR fold over the occupied cells.
    ///
    /// Only used when the board is (re)initialized; search relies on the
    /// incremental update in [`Board::set`].
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        self.occupied()
            .fold(0, |h, (pos, stone)| h ^ self.zobrist.key(stone, pos))
    }

    /// Iterate occupied cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != Stone::Empty)
            .map(|(i, s)| (Pos::from_index(i), *s))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| **s != Stone::Empty).count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|s| *s == Stone::Empty)
    }
}

/// A move applied to a [`Board`] that is undone when dropped.
///
/// Derefs to the board so the search can recurse on it while the move is
/// in place.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    pos: Pos,
    prev: Stone,
}

impl MoveGuard<'_> {
    /// Position this guard changed.
    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, self.prev);
    }
}
