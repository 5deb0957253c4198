//! Score contract and the concrete score types used by the benchmark core.
//!
//! The aggregation engine never inspects a score's representation: it only
//! orders, adds, divides and asks for feasibility. The per-level doubles are
//! used exclusively for spread statistics, where squaring an integer level
//! could overflow and rounding to integers would be wrong.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Total-ordered, additive, divisible solution quality.
///
/// Greater is better. Every trial of a scenario must produce scores with the
/// same level count.
pub trait Score: Clone + Ord + Debug + Display + Send + Sync + 'static {
    /// Level-wise sum of two scores
    fn add(&self, other: &Self) -> Self;

    /// Level-wise division, rounding each level towards negative infinity
    fn divide(&self, divisor: usize) -> Self;

    /// Whether every hard constraint is satisfied
    fn is_feasible(&self) -> bool {
        true
    }

    /// One double per score level, most significant level first
    fn to_level_doubles(&self) -> Vec<f64>;

    /// Number of score levels
    fn level_count(&self) -> usize {
        self.to_level_doubles().len()
    }
}

fn floor_divide(value: i64, divisor: usize) -> i64 {
    // i64::div_euclid equals floor division for a positive divisor
    value.div_euclid(divisor as i64)
}

/// Single-level score; always feasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimpleScore(pub i64);

impl SimpleScore {
    /// Create a score from its only level
    pub fn of(score: i64) -> Self {
        Self(score)
    }

    /// The score value
    pub fn score(&self) -> i64 {
        self.0
    }
}

impl Score for SimpleScore {
    fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn divide(&self, divisor: usize) -> Self {
        Self(floor_divide(self.0, divisor))
    }

    fn to_level_doubles(&self) -> Vec<f64> {
        vec![self.0 as f64]
    }

    fn level_count(&self) -> usize {
        1
    }
}

impl Display for SimpleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Two-level score: hard constraints dominate soft constraints.
///
/// Field order matters: the derived `Ord` compares `hard` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HardSoftScore {
    pub hard: i64,
    pub soft: i64,
}

impl HardSoftScore {
    /// Create a score from both levels
    pub fn of(hard: i64, soft: i64) -> Self {
        Self { hard, soft }
    }
}

impl Score for HardSoftScore {
    fn add(&self, other: &Self) -> Self {
        Self {
            hard: self.hard + other.hard,
            soft: self.soft + other.soft,
        }
    }

    fn divide(&self, divisor: usize) -> Self {
        Self {
            hard: floor_divide(self.hard, divisor),
            soft: floor_divide(self.soft, divisor),
        }
    }

    fn is_feasible(&self) -> bool {
        self.hard >= 0
    }

    fn to_level_doubles(&self) -> Vec<f64> {
        vec![self.hard as f64, self.soft as f64]
    }

    fn level_count(&self) -> usize {
        2
    }
}

impl Display for HardSoftScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}hard/{}soft", self.hard, self.soft)
    }
}

/// Relative distance of a score to a reference score, one percentage per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDifferencePercentage {
    pub levels: Vec<f64>,
}

impl ScoreDifferencePercentage {
    pub fn new(levels: Vec<f64>) -> Self {
        Self { levels }
    }
}

impl Display for ScoreDifferencePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, level) in self.levels.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{:.2}%", level)?;
        }
        Ok(())
    }
}

/// Render a score prefixed with its uninitialized variable count, if any.
///
/// `"-3init/0hard/-5soft"` for 3 uninitialized variables, `"0hard/-5soft"` for none.
pub fn score_with_uninitialized_prefix<S: Display>(uninitialized: u64, score: &S) -> String {
    if uninitialized == 0 {
        score.to_string()
    } else {
        format!("-{}init/{}", uninitialized, score)
    }
}
