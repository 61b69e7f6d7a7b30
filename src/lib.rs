//! Gomoku agent core for a 12x12 board
//!
//! Picks a move for one side of a five-in-a-row game by searching a fixed
//! number of plies with alpha-beta pruning:
//! - 12x12 board, play starts from a 4-stone center opening
//! - 5-in-a-row (or longer) wins
//! - No captures, no forbidden moves
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with an incremental Zobrist hash
//! - [`eval`]: Line patterns, threat scores and static evaluation
//! - [`search`]: Candidate generation, transposition table and alpha-beta
//! - [`engine`]: Game session tying board and searcher together
//! - [`protocol`]: Text protocol used by the binary
//! - [`config`]: Tunables loaded from TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku_agent::{AIEngine, EngineConfig, Stone};
//!
//! // Shallow search for a fast doc test
//! let config = EngineConfig {
//!     search_depth: 1,
//!     tt_capacity: 1 << 12,
//!     ..EngineConfig::default()
//! };
//! let mut engine = AIEngine::new(&config, 7).unwrap();
//! engine.start_game(Stone::Black);
//!
//! if let Some(pos) = engine.compute_agent_move() {
//!     engine.apply_move(pos, Stone::Black);
//!     println!("agent plays at ({}, {})", pos.row, pos.col);
//! }
//! ```
//!
//! # Search
//!
//! For each move decision the engine:
//! 1. Clears the transposition table
//! 2. Ranks at most `beam_width` root candidates by placement heuristic
//! 3. Searches each to `search_depth` plies with a full window
//! 4. Keeps the first candidate with the strictly best score

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::AIEngine;
pub use error::{ConfigError, EngineError, ProtocolError};
