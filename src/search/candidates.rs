//! Candidate move generation with proximity pruning and beam ordering

use crate::board::{Board, Pos, Stone, TOTAL_CELLS};
use crate::eval::{placement_heuristic, Score, ScoreTable};

/// Default number of moves tried at every node
pub const DEFAULT_BEAM_WIDTH: usize = 6;

/// Maximum distance to an existing stone for a cell to be considered
const NEAR_DISTANCE: i32 = 2;

/// All 8 compass directions
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A scored move, rebuilt at every search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub pos: Pos,
    pub score: Score,
}

/// Is some stone within [`NEAR_DISTANCE`] steps of `pos` along a compass line?
#[must_use]
pub fn is_near_stone(board: &Board, pos: Pos) -> bool {
    DIRECTIONS.iter().any(|&(dr, dc)| {
        (1..=NEAR_DISTANCE)
            .filter_map(|dist| pos.offset(dr, dc, dist))
            .any(|p| !board.is_empty(p))
    })
}

/// Ranked candidate moves for the position, at most `beam_width` of them.
///
/// Empty cells near a stone are scored with the placement heuristic for
/// `agent`. Every positive-scored cell is kept, plus the first zero-scored
/// one in row-major order so that some legal move survives. The sort is
/// stable, so equal scores keep scan order.
#[must_use]
pub fn generate_candidates(
    board: &Board,
    agent: Stone,
    table: &ScoreTable,
    beam_width: usize,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut has_fallback = false;

    for idx in 0..TOTAL_CELLS {
        let pos = Pos::from_index(idx);
        if !board.is_empty(pos) || !is_near_stone(board, pos) {
            continue;
        }

        let score = placement_heuristic(board, pos, agent, table);
        if score > 0 {
            candidates.push(Candidate { pos, score });
        } else if !has_fallback {
            has_fallback = true;
            candidates.push(Candidate { pos, score });
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(beam_width);
    candidates
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::search::ZobristTable;

    fn empty_board() -> Board {
        Board::new(Arc::new(ZobristTable::new(11)))
    }

    fn seeded_board() -> Board {
        let mut board = empty_board();
        board.initialize();
        board
    }

    fn within_two_steps(a: Pos, b: Pos) -> bool {
        let dr = (i32::from(a.row) - i32::from(b.row)).abs();
        let dc = (i32::from(a.col) - i32::from(b.col)).abs();
        let on_line = dr == 0 || dc == 0 || dr == dc;
        on_line && dr.max(dc) <= NEAR_DISTANCE && (dr, dc) != (0, 0)
    }

    #[test]
    fn test_empty_board_has_no_candidates() {
        let board = empty_board();
        let table = ScoreTable::default();
        let black = generate_candidates(&board, Stone::Black, &table, DEFAULT_BEAM_WIDTH);
        let white = generate_candidates(&board, Stone::White, &table, usize::MAX);
        assert!(black.is_empty());
        assert!(white.is_empty());
    }

    #[test]
    fn test_seed_candidates_near_seed_stones() {
        let board = seeded_board();
        let table = ScoreTable::default();
        let seeds: Vec<Pos> = board.occupied().map(|(p, _)| p).collect();

        let all = generate_candidates(&board, Stone::Black, &table, usize::MAX);
        assert!(!all.is_empty());
        for c in &all {
            assert!(board.is_empty(c.pos));
            assert!(
                seeds.iter().any(|&s| within_two_steps(c.pos, s)),
                "{} is not near a seed stone",
                c.pos
            );
        }
    }

    #[test]
    fn test_beam_truncation_and_order() {
        let board = seeded_board();
        let table = ScoreTable::default();

        let all = generate_candidates(&board, Stone::White, &table, usize::MAX);
        let beam = generate_candidates(&board, Stone::White, &table, DEFAULT_BEAM_WIDTH);

        assert!(all.len() > DEFAULT_BEAM_WIDTH);
        assert_eq!(beam.len(), DEFAULT_BEAM_WIDTH);
        assert_eq!(&all[..DEFAULT_BEAM_WIDTH], &beam[..]);
        assert!(all.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_single_zero_fallback() {
        let board = seeded_board();
        let table = ScoreTable::default();

        let all = generate_candidates(&board, Stone::Black, &table, usize::MAX);
        assert!(all.iter().filter(|c| c.score == 0).count() <= 1);
    }

    #[test]
    fn test_ties_keep_scan_order() {
        // Lone corner stone: three adjacent cells score a sleeping two each,
        // the cells two steps away score nothing.
        let mut board = empty_board();
        board.set(Pos::new(0, 0), Stone::Black);
        let table = ScoreTable::default();

        let cands = generate_candidates(&board, Stone::Black, &table, usize::MAX);
        let got: Vec<(Pos, Score)> = cands.iter().map(|c| (c.pos, c.score)).collect();
        assert_eq!(
            got,
            vec![
                (Pos::new(0, 1), 10),
                (Pos::new(1, 0), 10),
                (Pos::new(1, 1), 10),
                (Pos::new(0, 2), 0),
            ]
        );
    }

    #[test]
    fn test_is_near_stone() {
        let mut board = empty_board();
        board.set(Pos::new(5, 5), Stone::White);

        assert!(is_near_stone(&board, Pos::new(5, 7)));
        assert!(is_near_stone(&board, Pos::new(3, 3)));
        assert!(is_near_stone(&board, Pos::new(6, 4)));
        // Knight's move is not on a compass line
        assert!(!is_near_stone(&board, Pos::new(7, 6)));
        assert!(!is_near_stone(&board, Pos::new(5, 8)));
    }

    #[test]
    fn test_winning_cell_ranks_first() {
        let mut board = seeded_board();
        for col in 0..4 {
            board.set(Pos::new(0, col), Stone::Black);
        }
        let table = ScoreTable::default();

        let cands = generate_candidates(&board, Stone::Black, &table, DEFAULT_BEAM_WIDTH);
        assert_eq!(cands[0].pos, Pos::new(0, 4));
    }
}
