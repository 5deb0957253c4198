//! Outcome of one independent trial run of a scenario.

use crate::score::{Score, ScoreDifferencePercentage};
use serde::{Deserialize, Serialize};

/// Whether a trial produced a solution, and if so its quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TrialOutcome<S> {
    /// The run aborted before producing a score
    Failed,
    /// The run produced a (possibly partially initialized) solution
    Succeeded {
        score: S,
        /// 0 means every planning variable was assigned
        #[serde(default)]
        uninitialized_variable_count: u64,
    },
}

/// Immutable record of one trial.
///
/// The outcome enum makes "failed or scored" structural: a failed trial has no
/// score, a succeeded trial always has one. `rank` is the only field written
/// after construction, and only by scenario accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult<S> {
    index: usize,
    outcome: TrialOutcome<S>,
    #[serde(default)]
    time_millis_spent: u64,
    #[serde(default)]
    calculate_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    used_memory_after_input_solution: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    winning_score_difference: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    worst_score_difference_percentage: Option<ScoreDifferencePercentage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<usize>,
}

impl<S: Score> TrialResult<S> {
    fn with_outcome(index: usize, outcome: TrialOutcome<S>) -> Self {
        Self {
            index,
            outcome,
            time_millis_spent: 0,
            calculate_count: 0,
            used_memory_after_input_solution: None,
            winning_score_difference: None,
            worst_score_difference_percentage: None,
            rank: None,
        }
    }

    /// A fully initialized trial with the given score
    pub fn succeeded(index: usize, score: S) -> Self {
        Self::with_outcome(
            index,
            TrialOutcome::Succeeded {
                score,
                uninitialized_variable_count: 0,
            },
        )
    }

    /// A trial that produced no score
    pub fn failed(index: usize) -> Self {
        Self::with_outcome(index, TrialOutcome::Failed)
    }

    /// Set the uninitialized variable count; ignored for failed trials
    pub fn with_uninitialized_variable_count(mut self, count: u64) -> Self {
        if let TrialOutcome::Succeeded {
            uninitialized_variable_count,
            ..
        } = &mut self.outcome
        {
            *uninitialized_variable_count = count;
        }
        self
    }

    pub fn with_time_millis_spent(mut self, millis: u64) -> Self {
        self.time_millis_spent = millis;
        self
    }

    pub fn with_calculate_count(mut self, count: u64) -> Self {
        self.calculate_count = count;
        self
    }

    pub fn with_used_memory_after_input_solution(mut self, bytes: u64) -> Self {
        self.used_memory_after_input_solution = Some(bytes);
        self
    }

    pub fn with_winning_score_difference(mut self, difference: S) -> Self {
        self.winning_score_difference = Some(difference);
        self
    }

    pub fn with_worst_score_difference_percentage(
        mut self,
        percentage: ScoreDifferencePercentage,
    ) -> Self {
        self.worst_score_difference_percentage = Some(percentage);
        self
    }

    /// Stable position of this trial within its scenario
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn outcome(&self) -> &TrialOutcome<S> {
        &self.outcome
    }

    pub fn has_failed(&self) -> bool {
        matches!(self.outcome, TrialOutcome::Failed)
    }

    /// The trial score, absent for failed trials
    pub fn score(&self) -> Option<&S> {
        match &self.outcome {
            TrialOutcome::Succeeded { score, .. } => Some(score),
            TrialOutcome::Failed => None,
        }
    }

    /// Absent for failed trials, where the count is meaningless
    pub fn uninitialized_variable_count(&self) -> Option<u64> {
        match &self.outcome {
            TrialOutcome::Succeeded {
                uninitialized_variable_count,
                ..
            } => Some(*uninitialized_variable_count),
            TrialOutcome::Failed => None,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.uninitialized_variable_count() == Some(0)
    }

    /// Failed trials are never feasible
    pub fn is_score_feasible(&self) -> bool {
        self.score().is_some_and(Score::is_feasible)
    }

    pub fn time_millis_spent(&self) -> u64 {
        self.time_millis_spent
    }

    pub fn calculate_count(&self) -> u64 {
        self.calculate_count
    }

    pub fn used_memory_after_input_solution(&self) -> Option<u64> {
        self.used_memory_after_input_solution
    }

    pub fn winning_score_difference(&self) -> Option<&S> {
        self.winning_score_difference.as_ref()
    }

    pub fn worst_score_difference_percentage(&self) -> Option<&ScoreDifferencePercentage> {
        self.worst_score_difference_percentage.as_ref()
    }

    /// Competition rank among the scenario's succeeded trials, 0 is best.
    ///
    /// Always `None` for failed trials and before accumulation.
    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Whether this trial ranked first in its scenario
    pub fn is_winner(&self) -> bool {
        self.rank == Some(0)
    }

    pub(crate) fn set_rank(&mut self, rank: Option<usize>) {
        self.rank = rank;
    }

    /// Score calculations per second; a zero elapsed time counts as 1 ms.
    pub fn calculate_count_per_second(&self) -> u64 {
        calculate_count_per_second(self.calculate_count, self.time_millis_spent)
    }

    /// Recreate this trial under a rebuilt scenario at `new_index`.
    ///
    /// Every measured and derived field, rank included, is carried over.
    pub fn create_merge(&self, new_index: usize) -> Self {
        Self {
            index: new_index,
            ..self.clone()
        }
    }
}

pub(crate) fn calculate_count_per_second(calculate_count: u64, time_millis_spent: u64) -> u64 {
    let time_millis_spent = time_millis_spent.max(1);
    calculate_count.saturating_mul(1000) / time_millis_spent
}
