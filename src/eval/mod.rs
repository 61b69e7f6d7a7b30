//! Evaluation module for Gomoku positions
//!
//! Pattern recognition and scoring for board positions:
//! - Line patterns (twos, threes, fours, fives, and their one-gap jump forms)
//! - Point threats with the combined-threat clamp
//! - Placement heuristics for move ordering
//! - Static board score for search leaves

pub mod heuristic;
pub mod patterns;

pub use heuristic::{
    analyze_line, evaluate, has_five_at, placement_heuristic, point_threat, LineScan, AXES,
};
pub use patterns::{Pattern, PatternScore, Perspective, Score, ScoreTable, MIN_OPPONENT_WEIGHT};
