//! Pattern kinds and their scores
//!
//! These constants define the scoring weights for the line shapes the
//! classifier recognizes. The combined-threat clamp relies on the relative
//! sizes: an open three plus a jump open three (2000) lands in the clamp
//! range, while a single open four (1.1M) is already above it.

/// Score type used throughout evaluation and search.
pub type Score = i64;

/// Local line shape through a point along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Invalid,
    /// XOO_ or _OOX
    TwoSleep,
    /// _OO_
    TwoOpen,
    /// XOOO_ or _OOOX
    ThreeSleep,
    /// _OOO_
    ThreeOpen,
    /// XOOOO_ or _OOOOX
    FourRush,
    /// _OOOO_
    FourOpen,
    /// five or more in a row
    Five,
    /// _O_OO_
    JumpThreeOpen,
    /// _O_OOOX or XO_OOO_
    JumpFourSleep,
    /// _O_OOO_
    JumpFourOpen,
}

impl Pattern {
    pub const COUNT: usize = 11;

    pub const ALL: [Pattern; Pattern::COUNT] = [
        Pattern::Invalid,
        Pattern::TwoSleep,
        Pattern::TwoOpen,
        Pattern::ThreeSleep,
        Pattern::ThreeOpen,
        Pattern::FourRush,
        Pattern::FourOpen,
        Pattern::Five,
        Pattern::JumpThreeOpen,
        Pattern::JumpFourSleep,
        Pattern::JumpFourOpen,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Base pattern scores for the searching side
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - decisive win
    pub const FIVE: Score = 1_111_111_111;
    /// Open four: wins next move
    pub const FOUR_OPEN: Score = 1_100_000;
    pub const THREE_OPEN: Score = 1_100;
    pub const FOUR_RUSH: Score = 1_000;
    pub const JUMP_FOUR_OPEN: Score = 1_000;
    pub const JUMP_THREE_OPEN: Score = 900;
    pub const JUMP_FOUR_SLEEP: Score = 800;
    pub const TWO_OPEN: Score = 100;
    pub const THREE_SLEEP: Score = 100;
    pub const TWO_SLEEP: Score = 10;
    pub const INVALID: Score = 0;

    /// Value a combined multi-threat is lifted to, just below an open four.
    pub const COMBO_THREAT: Score = 1_000_000;
    /// Default lower bound of the combined-threat clamp range.
    pub const COMBO_FLOOR: Score = 1_500;

    /// Score of `pattern` for the searching side.
    #[must_use]
    pub const fn base(pattern: Pattern) -> Score {
        match pattern {
            Pattern::Invalid => Self::INVALID,
            Pattern::TwoSleep => Self::TWO_SLEEP,
            Pattern::TwoOpen => Self::TWO_OPEN,
            Pattern::ThreeSleep => Self::THREE_SLEEP,
            Pattern::ThreeOpen => Self::THREE_OPEN,
            Pattern::FourRush => Self::FOUR_RUSH,
            Pattern::FourOpen => Self::FOUR_OPEN,
            Pattern::Five => Self::FIVE,
            Pattern::JumpThreeOpen => Self::JUMP_THREE_OPEN,
            Pattern::JumpFourSleep => Self::JUMP_FOUR_SLEEP,
            Pattern::JumpFourOpen => Self::JUMP_FOUR_OPEN,
        }
    }
}

/// Smallest opponent weight that still lets double threats register.
pub const MIN_OPPONENT_WEIGHT: f64 = 0.883;

/// Whose score mapping to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    /// The side the engine is searching for
    Agent,
    /// The side opposing it
    Opponent,
}

/// Read-only pattern score mappings for both perspectives.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    agent: [Score; Pattern::COUNT],
    opponent: [Score; Pattern::COUNT],
    combo_floor: Score,
}

impl ScoreTable {
    /// Build the table; opponent scores are the agent's scaled by `opponent_weight`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn new(opponent_weight: f64, combo_floor: Score) -> Self {
        debug_assert!(opponent_weight >= MIN_OPPONENT_WEIGHT);

        let mut agent = [0; Pattern::COUNT];
        let mut opponent = [0; Pattern::COUNT];
        for pattern in Pattern::ALL {
            let base = PatternScore::base(pattern);
            agent[pattern.index()] = base;
            opponent[pattern.index()] = (base as f64 * opponent_weight).round() as Score;
        }

        Self {
            agent,
            opponent,
            combo_floor,
        }
    }

    #[inline]
    #[must_use]
    pub fn score(&self, pattern: Pattern, perspective: Perspective) -> Score {
        match perspective {
            Perspective::Agent => self.agent[pattern.index()],
            Perspective::Opponent => self.opponent[pattern.index()],
        }
    }

    /// Lift a 4-axis sum formed by several medium threats to
    /// [`PatternScore::COMBO_THREAT`].
    #[inline]
    #[must_use]
    pub fn clamp_combo(&self, sum: Score) -> Score {
        if sum >= self.combo_floor && sum < PatternScore::COMBO_THREAT {
            PatternScore::COMBO_THREAT
        } else {
            sum
        }
    }

    #[must_use]
    pub fn combo_floor(&self) -> Score {
        self.combo_floor
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new(1.0, PatternScore::COMBO_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::FOUR_OPEN);
        assert!(PatternScore::FOUR_OPEN > PatternScore::COMBO_THREAT);
        assert!(PatternScore::COMBO_THREAT > PatternScore::THREE_OPEN);
        assert!(PatternScore::THREE_OPEN > PatternScore::FOUR_RUSH);
        assert!(PatternScore::FOUR_RUSH > PatternScore::JUMP_THREE_OPEN);
        assert!(PatternScore::JUMP_THREE_OPEN > PatternScore::JUMP_FOUR_SLEEP);
        assert!(PatternScore::TWO_OPEN > PatternScore::TWO_SLEEP);
    }

    #[test]
    fn test_unit_weight_mirrors_agent() {
        let table = ScoreTable::default();
        for pattern in Pattern::ALL {
            assert_eq!(
                table.score(pattern, Perspective::Agent),
                table.score(pattern, Perspective::Opponent)
            );
        }
    }

    #[test]
    fn test_opponent_weight_scales() {
        let table = ScoreTable::new(0.9, PatternScore::COMBO_FLOOR);
        assert_eq!(table.score(Pattern::ThreeOpen, Perspective::Agent), 1_100);
        assert_eq!(table.score(Pattern::ThreeOpen, Perspective::Opponent), 990);
        assert_eq!(table.score(Pattern::Invalid, Perspective::Opponent), 0);
    }

    #[test]
    fn test_clamp_combo_range() {
        let table = ScoreTable::default();
        assert_eq!(table.clamp_combo(1_499), 1_499);
        assert_eq!(table.clamp_combo(1_500), 1_000_000);
        assert_eq!(table.clamp_combo(2_000), 1_000_000);
        assert_eq!(table.clamp_combo(999_999), 1_000_000);
        assert_eq!(table.clamp_combo(1_000_000), 1_000_000);
        assert_eq!(table.clamp_combo(1_100_000), 1_100_000);
    }

    #[test]
    fn test_clamp_combo_custom_floor() {
        let table = ScoreTable::new(1.0, 2_500);
        assert_eq!(table.clamp_combo(2_000), 2_000);
        assert_eq!(table.clamp_combo(2_500), 1_000_000);
        assert_eq!(table.combo_floor(), 2_500);
    }

    #[test]
    fn test_double_three_survives_min_weight() {
        // Two opponent open threes must still reach the clamp range
        let table = ScoreTable::new(MIN_OPPONENT_WEIGHT, PatternScore::COMBO_FLOOR);
        let two_threes = 2 * table.score(Pattern::ThreeOpen, Perspective::Opponent);
        assert_eq!(table.clamp_combo(two_threes), PatternScore::COMBO_THREAT);
    }
}
