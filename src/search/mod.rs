//! Search module for the Gomoku agent
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Candidate generation with proximity pruning and beam ordering
//! - Alpha-Beta search and the root move decision

pub mod alphabeta;
pub mod candidates;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{
    RootDecision, SearchStats, Searcher, CACHE_MISS, DEFAULT_SEARCH_DEPTH, SCORE_LOSS, SCORE_MAX,
    SCORE_MIN, SCORE_WIN,
};
pub use candidates::{generate_candidates, is_near_stone, Candidate, DEFAULT_BEAM_WIDTH};
pub use tt::{Bound, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
