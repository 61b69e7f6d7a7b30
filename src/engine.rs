//! Main AI engine: one game session
//!
//! [`AIEngine`] bundles everything a game needs: the board, the shared
//! Zobrist table, the searcher with its transposition table and score
//! table, and the agent's side. Independent engines share nothing, so
//! several sessions (or tests) can run side by side.
//!
//! # Example
//!
//! ```
//! use gomoku_agent::{AIEngine, EngineConfig, Pos, Stone};
//!
//! let config = EngineConfig {
//!     search_depth: 1,
//!     tt_capacity: 1 << 12,
//!     ..EngineConfig::default()
//! };
//! let mut engine = AIEngine::new(&config, 42).unwrap();
//!
//! engine.start_game(Stone::White);
//! engine.apply_move(Pos::new(4, 4), Stone::Black);
//!
//! let pos = engine.compute_agent_move().unwrap();
//! engine.apply_move(pos, Stone::White);
//! assert_eq!(engine.board().stone_count(), 6);
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::search::{
    generate_candidates, RootDecision, SearchStats, Searcher, TTStats, TranspositionTable,
    ZobristTable,
};

/// Game session driving the search for one agent side.
#[derive(Debug)]
pub struct AIEngine {
    board: Board,
    searcher: Searcher,
    beam_width: usize,
    last_decision: Option<RootDecision>,
}

impl AIEngine {
    /// Build a session from `config`, hashing with keys drawn from `hash_seed`.
    ///
    /// The board starts empty and the agent plays Black until
    /// [`AIEngine::start_game`] says otherwise.
    ///
    /// # Errors
    ///
    /// Fails when the config is out of range or the transposition table
    /// cannot be allocated.
    pub fn new(config: &EngineConfig, hash_seed: u64) -> EngineResult<Self> {
        config.validate()?;

        let zobrist = Arc::new(ZobristTable::new(hash_seed));
        let tt = TranspositionTable::new(config.tt_capacity)?;
        let searcher = Searcher::new(
            tt,
            config.score_table(),
            config.search_depth,
            config.beam_width,
        );

        let (depth, beam, slots) = (config.search_depth, config.beam_width, config.tt_capacity);
        debug!("engine ready: depth={depth} beam={beam} tt_slots={slots} seed={hash_seed:#x}");

        Ok(Self {
            board: Board::new(zobrist),
            searcher,
            beam_width: config.beam_width,
            last_decision: None,
        })
    }

    /// Begin a new game with the agent playing `agent`.
    pub fn start_game(&mut self, agent: Stone) {
        self.searcher.set_agent(agent);
        self.initialize_board();
        self.last_decision = None;
        info!("new game, agent plays {agent:?}");
    }

    /// Reset the board to the 4-stone center opening.
    pub fn initialize_board(&mut self) {
        self.board.initialize();
    }

    /// Put `side` at `pos`, whoever moved.
    pub fn apply_move(&mut self, pos: Pos, side: Stone) {
        self.board.set(pos, side);
    }

    /// Search the current position and return the agent's move.
    ///
    /// Does not play the move. `None` means no candidate exists.
    pub fn compute_agent_move(&mut self) -> Option<Pos> {
        if log::log_enabled!(log::Level::Debug) {
            let candidates = generate_candidates(
                &self.board,
                self.searcher.agent(),
                self.searcher.scores(),
                self.beam_width,
            );
            debug!("root candidates: {candidates:?}");
        }

        let decision = self.searcher.choose_move(&mut self.board);
        self.last_decision = decision;

        match decision {
            Some(d) => {
                info!("agent plays {} (score {})", d.pos, d.score);
                if log::log_enabled!(log::Level::Debug) {
                    self.log_stats(&d.stats);
                }
                Some(d.pos)
            }
            None => {
                info!("no candidate move available");
                None
            }
        }
    }

    /// Search counters plus a full scan of table occupancy.
    fn log_stats(&self, stats: &SearchStats) {
        let SearchStats {
            nodes,
            tt_probes,
            tt_hits,
            cutoffs,
            leaf_evals,
        } = *stats;
        let hit_rate = stats.tt_hit_rate();
        let tt = self.searcher.tt_stats();

        debug!("nodes={nodes} leaf_evals={leaf_evals} cutoffs={cutoffs}");
        debug!("tt_hits={tt_hits}/{tt_probes} ({hit_rate:.1}%)");
        debug!("tt_used={}/{} ({}%)", tt.used, tt.size, tt.usage_percent);
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn agent(&self) -> Stone {
        self.searcher.agent()
    }

    /// Result of the most recent decision in this game
    #[must_use]
    pub fn last_decision(&self) -> Option<RootDecision> {
        self.last_decision
    }

    /// Statistics of the most recent decision
    #[must_use]
    pub fn last_stats(&self) -> Option<SearchStats> {
        self.last_decision.map(|d| d.stats)
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.searcher.tt_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, EngineError};

    fn fast_config() -> EngineConfig {
        EngineConfig {
            search_depth: 1,
            tt_capacity: 1 << 12,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_engine_starts_empty() {
        let engine = AIEngine::new(&fast_config(), 1).unwrap();
        assert!(engine.board().is_board_empty());
        assert_eq!(engine.agent(), Stone::Black);
        assert!(engine.last_decision().is_none());
    }

    #[test]
    fn test_engine_rejects_bad_config() {
        let config = EngineConfig {
            opponent_weight: 0.1,
            ..fast_config()
        };
        assert!(matches!(
            AIEngine::new(&config, 1),
            Err(EngineError::Config(ConfigError::Invalid { .. }))
        ));
    }

    #[test]
    fn test_start_game_seeds_board() {
        let mut engine = AIEngine::new(&fast_config(), 1).unwrap();
        engine.start_game(Stone::White);

        assert_eq!(engine.agent(), Stone::White);
        assert_eq!(engine.board().stone_count(), 4);
        assert_eq!(engine.board().hash(), engine.board().compute_hash());
    }

    #[test]
    fn test_no_move_before_start() {
        let mut engine = AIEngine::new(&fast_config(), 1).unwrap();
        assert_eq!(engine.compute_agent_move(), None);
        assert!(engine.last_stats().is_none());
    }

    #[test]
    fn test_compute_does_not_play() {
        let mut engine = AIEngine::new(&fast_config(), 1).unwrap();
        engine.start_game(Stone::Black);
        let hash = engine.board().hash();

        let pos = engine.compute_agent_move().unwrap();
        assert!(engine.board().is_empty(pos));
        assert_eq!(engine.board().hash(), hash);
        assert!(engine.last_stats().unwrap().nodes > 0);
    }

    #[test]
    fn test_log_stats_after_decision() {
        let mut engine = AIEngine::new(&fast_config(), 3).unwrap();
        engine.start_game(Stone::Black);
        engine.compute_agent_move().unwrap();

        let stats = engine.last_stats().unwrap();
        engine.log_stats(&stats);
        assert!(engine.tt_stats().used > 0);
    }

    #[test]
    fn test_engine_takes_win() {
        let mut engine = AIEngine::new(&fast_config(), 5).unwrap();
        engine.start_game(Stone::White);
        for row in 0..4 {
            engine.apply_move(Pos::new(row, 0), Stone::White);
        }
        assert_eq!(engine.compute_agent_move(), Some(Pos::new(4, 0)));
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = AIEngine::new(&fast_config(), 7).unwrap();
        let mut b = AIEngine::new(&fast_config(), 7).unwrap();
        a.start_game(Stone::Black);
        b.start_game(Stone::Black);

        a.apply_move(Pos::new(0, 0), Stone::White);
        assert_eq!(a.board().stone_count(), 5);
        assert_eq!(b.board().stone_count(), 4);
    }
}
