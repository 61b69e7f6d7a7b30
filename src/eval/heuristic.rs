//! Line-pattern classification and the scores derived from it
//!
//! Every score in the engine comes from classifying the stone run through a
//! point along each of four axes:
//! - point threat: value of an existing stone for its owner
//! - placement heuristic: value of an empty cell for attack plus defense
//! - static evaluation: agent threats minus opponent threats over the board

use crate::board::{Board, Pos, Stone};

use super::patterns::{Pattern, Perspective, Score, ScoreTable};

/// Axis vectors: vertical, horizontal, diagonal, anti-diagonal.
/// Each axis is walked both ways, covering all 8 directions.
pub const AXES: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Result of walking outward from a point in one direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineScan {
    /// Same-side stones directly adjacent (the point itself excluded)
    pub consecutive: u32,
    /// The run ended on an empty cell
    pub open_end: bool,
    /// Same-side stones after a single empty gap
    pub jump_count: u32,
    /// The jump run ended on an empty cell
    pub jump_open: bool,
    /// The jump run ended on an opponent stone
    pub jump_blocked: bool,
}

/// Walk from `pos` (exclusive) along `(dr, dc)` for `side`.
///
/// A jump run that reaches the board edge is neither open nor blocked.
#[must_use]
pub fn scan_direction(board: &Board, pos: Pos, dr: i32, dc: i32, side: Stone) -> LineScan {
    let mut scan = LineScan::default();
    let opponent = side.opponent();
    let mut found_gap = false;
    let mut jumping = false;

    let mut r = i32::from(pos.row) + dr;
    let mut c = i32::from(pos.col) + dc;
    while let Some(cell) = board.get_at(r, c) {
        if jumping {
            if cell == side {
                scan.jump_count += 1;
            } else if cell == opponent {
                scan.jump_blocked = true;
                break;
            } else {
                scan.jump_open = true;
                break;
            }
        } else if found_gap {
            // First cell past the gap: only a same-side stone starts a jump
            if cell != side {
                break;
            }
            jumping = true;
            scan.jump_count += 1;
        } else if cell == Stone::Empty {
            scan.open_end = true;
            found_gap = true;
        } else if cell != side {
            break;
        } else {
            scan.consecutive += 1;
        }

        r += dr;
        c += dc;
    }

    scan
}

const FWD_OPEN: u8 = 0b01;
const BWD_OPEN: u8 = 0b10;
const BOTH_OPEN: u8 = FWD_OPEN | BWD_OPEN;

/// Classify the merged forward/backward scans through a point.
///
/// Jump shapes are only recognized when exactly one direction has a jump
/// run. A gap on both sides (`O_O_O`) is left to the plain-run rules.
#[must_use]
pub fn classify(fwd: &LineScan, bwd: &LineScan) -> Pattern {
    let consecutive = fwd.consecutive + bwd.consecutive + 1;
    let open_ends = (u8::from(fwd.open_end) * FWD_OPEN) | (u8::from(bwd.open_end) * BWD_OPEN);

    // The open bit of the jump side is always set; `lone_open` is the
    // configuration where the far side is closed.
    let one_sided = if fwd.jump_count > 0 && bwd.jump_count == 0 {
        Some((fwd, FWD_OPEN))
    } else if bwd.jump_count > 0 && fwd.jump_count == 0 {
        Some((bwd, BWD_OPEN))
    } else {
        None
    };

    if let Some((jump, lone_open)) = one_sided {
        let total = consecutive + jump.jump_count;
        if total == 3 && open_ends == BOTH_OPEN && jump.jump_open {
            return Pattern::JumpThreeOpen;
        }
        if total == 4 && open_ends == BOTH_OPEN && jump.jump_blocked {
            return Pattern::JumpFourSleep;
        }
        if total == 4 && open_ends == lone_open && jump.jump_open {
            return Pattern::JumpFourSleep;
        }
        if total == 4 && open_ends == BOTH_OPEN && jump.jump_open {
            return Pattern::JumpFourOpen;
        }
    }

    match (consecutive, open_ends) {
        (5.., _) => Pattern::Five,
        (4, BOTH_OPEN) => Pattern::FourOpen,
        (4, 1..) => Pattern::FourRush,
        (3, BOTH_OPEN) => Pattern::ThreeOpen,
        (3, 1..) => Pattern::ThreeSleep,
        (2, BOTH_OPEN) => Pattern::TwoOpen,
        (2, 1..) => Pattern::TwoSleep,
        _ => Pattern::Invalid,
    }
}

/// Pattern `side` has (or would have, if `pos` is empty) through `pos` on one axis.
#[inline]
#[must_use]
pub fn analyze_line(board: &Board, pos: Pos, axis: (i32, i32), side: Stone) -> Pattern {
    let (dr, dc) = axis;
    let fwd = scan_direction(board, pos, dr, dc, side);
    let bwd = scan_direction(board, pos, -dr, -dc, side);
    classify(&fwd, &bwd)
}

/// 4-axis pattern sum for `side` at `pos`, before the combined-threat clamp.
fn axis_sum(
    board: &Board,
    pos: Pos,
    side: Stone,
    perspective: Perspective,
    table: &ScoreTable,
) -> Score {
    AXES.iter()
        .map(|&axis| table.score(analyze_line(board, pos, axis, side), perspective))
        .sum()
}

/// Threat value of `side`'s stone at `pos`, scored with `perspective`'s mapping.
#[must_use]
pub fn point_threat(
    board: &Board,
    pos: Pos,
    side: Stone,
    perspective: Perspective,
    table: &ScoreTable,
) -> Score {
    table.clamp_combo(axis_sum(board, pos, side, perspective, table))
}

/// Does `side` have five or more in a row through `pos`?
#[must_use]
pub fn has_five_at(board: &Board, pos: Pos, side: Stone) -> bool {
    AXES.iter()
        .any(|&axis| analyze_line(board, pos, axis, side) == Pattern::Five)
}

/// Move-ordering value of the empty cell `pos`.
///
/// Sum of what the agent would gain by playing there and what the opponent
/// would gain, each clamped on its own, so cells that both attack and
/// defend rank highest.
#[must_use]
pub fn placement_heuristic(board: &Board, pos: Pos, agent: Stone, table: &ScoreTable) -> Score {
    let attack = table.clamp_combo(axis_sum(board, pos, agent, Perspective::Agent, table));
    let defense = table.clamp_combo(axis_sum(
        board,
        pos,
        agent.opponent(),
        Perspective::Opponent,
        table,
    ));
    attack + defense
}

/// Static board score from the agent's point of view.
///
/// Sum of point threats over the agent's stones minus the same sum over the
/// opponent's stones.
#[must_use]
pub fn evaluate(board: &Board, agent: Stone, table: &ScoreTable) -> Score {
    let mut agent_total = 0;
    let mut opponent_total = 0;

    for (pos, stone) in board.occupied() {
        if stone == agent {
            agent_total += point_threat(board, pos, stone, Perspective::Agent, table);
        } else {
            opponent_total += point_threat(board, pos, stone, Perspective::Opponent, table);
        }
    }

    agent_total - opponent_total
}
