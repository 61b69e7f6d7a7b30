//! Alpha-Beta search with a transposition table and beam-limited move lists
//!
//! This module implements the core search algorithm for the Gomoku agent.
//! It uses plain minimax with alpha-beta pruning from the agent's point of
//! view: the agent maximizes, the opponent minimizes.
//!
//! # Features
//!
//! - Transposition table probed and filled at every node
//! - Early return when the previous move completed five
//! - Move generation with proximity filtering and a fixed beam width
//! - Scoped apply/undo through [`MoveGuard`](crate::board::MoveGuard)
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gomoku_agent::board::{Board, Stone};
//! use gomoku_agent::eval::ScoreTable;
//! use gomoku_agent::search::{Searcher, TranspositionTable, ZobristTable};
//!
//! let mut board = Board::new(Arc::new(ZobristTable::new(1)));
//! board.initialize();
//!
//! let tt = TranspositionTable::new(1 << 12).unwrap();
//! let mut searcher = Searcher::new(tt, ScoreTable::default(), 1, 6);
//! searcher.set_agent(Stone::Black);
//!
//! let decision = searcher.choose_move(&mut board).unwrap();
//! assert!(board.is_empty(decision.pos));
//! ```

use log::trace;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, has_five_at, Score, ScoreTable};

use super::candidates::generate_candidates;
use super::tt::{Bound, TTStats, TranspositionTable};

/// Upper end of the search window
pub const SCORE_MAX: Score = 8_223_372_036_854_775_808;
/// Lower end of the search window
pub const SCORE_MIN: Score = -SCORE_MAX;
/// Returned when the agent's last move completed five
pub const SCORE_WIN: Score = SCORE_MAX - 1;
/// Returned when the opponent's last move completed five
pub const SCORE_LOSS: Score = SCORE_MIN + 1;
/// Below every score the search can produce
pub const CACHE_MISS: Score = SCORE_MIN - 1;

/// Default plies searched below each root candidate
pub const DEFAULT_SEARCH_DEPTH: u8 = 7;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into [`Searcher::search`]
    pub nodes: u64,
    /// Total TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
    /// Static evaluations at the horizon or on a board with no candidates
    pub leaf_evals: u64,
}

impl SearchStats {
    /// TT hit rate in percent
    #[allow(clippy::cast_precision_loss)]
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Outcome of one move decision.
#[derive(Debug, Clone, Copy)]
pub struct RootDecision {
    /// Chosen move
    pub pos: Pos,
    /// Search score of the chosen move
    pub score: Score,
    pub stats: SearchStats,
}

/// Alpha-Beta searcher owning the transposition table and score table.
///
/// One searcher serves a whole session; the agent side is set per game and
/// the table is cleared at the start of every decision.
#[derive(Debug)]
pub struct Searcher {
    tt: TranspositionTable,
    scores: ScoreTable,
    agent: Stone,
    max_depth: u8,
    beam_width: usize,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher that looks `max_depth` plies below each root
    /// candidate and tries at most `beam_width` moves per node.
    #[must_use]
    pub fn new(
        tt: TranspositionTable,
        scores: ScoreTable,
        max_depth: u8,
        beam_width: usize,
    ) -> Self {
        Self {
            tt,
            scores,
            agent: Stone::Black,
            max_depth,
            beam_width,
            stats: SearchStats::default(),
        }
    }

    /// Side the searcher plays for.
    pub fn set_agent(&mut self, agent: Stone) {
        debug_assert!(agent != Stone::Empty);
        self.agent = agent;
    }

    #[must_use]
    pub fn agent(&self) -> Stone {
        self.agent
    }

    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    /// Counters accumulated since the last decision started
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    #[must_use]
    pub fn tt_stats(&self) -> TTStats {
        self.tt.stats()
    }

    /// Pick the agent's move for the current position.
    ///
    /// Every root candidate is searched with the full window; the first one
    /// with the strictly highest score wins. Returns `None` when no candidate
    /// exists (empty board). The board is left as it was found.
    pub fn choose_move(&mut self, board: &mut Board) -> Option<RootDecision> {
        self.tt.clear();
        self.stats = SearchStats::default();

        let candidates = generate_candidates(board, self.agent, &self.scores, self.beam_width);
        let first = candidates.first()?;

        let mut best_pos = first.pos;
        let mut best_score = SCORE_MIN;
        let opponent = self.agent.opponent();

        for cand in &candidates {
            let score = {
                let mut child = board.play(cand.pos, self.agent);
                self.search(
                    &mut child,
                    self.max_depth,
                    SCORE_MIN,
                    SCORE_MAX,
                    opponent,
                    cand.pos,
                )
            };
            trace!("root {} heuristic={} score={score}", cand.pos, cand.score);

            if score > best_score {
                best_score = score;
                best_pos = cand.pos;
            }
        }

        Some(RootDecision {
            pos: best_pos,
            score: best_score,
            stats: self.stats,
        })
    }

    /// Alpha-beta search of the position after `last_move`, with `to_move`
    /// on turn and `depth` plies left.
    ///
    /// Scores are from the agent's point of view. A completed five by the
    /// side that played `last_move` returns [`SCORE_WIN`] or [`SCORE_LOSS`]
    /// without looking further.
    pub fn search(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        to_move: Stone,
        last_move: Pos,
    ) -> Score {
        self.stats.nodes += 1;
        let key = board.hash();

        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(key, depth, alpha, beta) {
            self.stats.tt_hits += 1;
            return score;
        }

        let mover = to_move.opponent();
        if has_five_at(board, last_move, mover) {
            return if mover == self.agent {
                SCORE_WIN
            } else {
                SCORE_LOSS
            };
        }

        if depth == 0 {
            return self.evaluate_leaf(board, key, depth);
        }

        let candidates = generate_candidates(board, self.agent, &self.scores, self.beam_width);
        if candidates.is_empty() {
            return self.evaluate_leaf(board, key, depth);
        }

        let maximizing = to_move == self.agent;
        let mut best = if maximizing { SCORE_MIN } else { SCORE_MAX };
        let mut bound = Bound::Lower;

        for cand in candidates {
            let eval = {
                let mut child = board.play(cand.pos, to_move);
                self.search(
                    &mut child,
                    depth - 1,
                    alpha,
                    beta,
                    to_move.opponent(),
                    cand.pos,
                )
            };

            if maximizing {
                best = best.max(eval);
                if eval > alpha {
                    alpha = eval;
                    bound = Bound::Exact;
                }
            } else {
                best = best.min(eval);
                if eval < beta {
                    beta = eval;
                    bound = Bound::Exact;
                }
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                bound = if maximizing {
                    Bound::Upper
                } else {
                    Bound::Lower
                };
                break;
            }
        }

        self.tt.store(key, depth, best, bound);
        best
    }

    fn evaluate_leaf(&mut self, board: &Board, key: u64, depth: u8) -> Score {
        self.stats.leaf_evals += 1;
        let score = evaluate(board, self.agent, &self.scores);
        self.tt.store(key, depth, score, Bound::Exact);
        score
    }
}
