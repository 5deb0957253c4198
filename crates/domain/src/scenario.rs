//! Scenario aggregate: the trials of one (solver configuration, problem
//! instance) pair and the statistics derived from them.
//!
//! A scenario is built empty, trials are appended while they complete, and
//! [`ScenarioAggregate::finalize`] stores every derived field exactly once.
//! After that the aggregate is read-only; readers only get `&` accessors.

use crate::errors::{AggregationError, AggregationResult};
use crate::hierarchy::{ProblemGroup, SolverGroup};
use crate::identifiers::{ProblemGroupId, ScenarioId, SolverGroupId};
use crate::math::ceil_div;
use crate::score::{score_with_uninitialized_prefix, Score, ScoreDifferencePercentage};
use crate::trial::{calculate_count_per_second, TrialResult};
use serde::{Deserialize, Serialize};

/// Totals, averages and counts over a scenario's trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats<S> {
    pub failure_count: usize,
    /// Absent when every trial failed
    pub total_score: Option<S>,
    /// Absent when every trial failed
    pub average_score: Option<S>,
    pub total_uninitialized_variable_count: u64,
    /// Absent when every trial failed
    pub average_uninitialized_variable_count: Option<u64>,
    pub uninitialized_solution_count: usize,
    pub infeasible_score_count: usize,
}

impl<S> AggregateStats<S> {
    /// Statistics of a scenario whose trials all failed
    pub fn all_failed(failure_count: usize) -> Self {
        Self {
            failure_count,
            total_score: None,
            average_score: None,
            total_uninitialized_variable_count: 0,
            average_uninitialized_variable_count: None,
            uninitialized_solution_count: 0,
            infeasible_score_count: 0,
        }
    }
}

/// Best, median and worst trials, as indices into the owning trial list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Representatives {
    pub best: usize,
    pub median: usize,
    pub worst: usize,
}

/// Resource figures copied from the median trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepresentativeMetrics<S> {
    pub used_memory_after_input_solution: Option<u64>,
    pub time_millis_spent: u64,
    pub calculate_count: u64,
    pub winning_score_difference: Option<S>,
    pub worst_score_difference_percentage: Option<ScoreDifferencePercentage>,
}

impl<S: Score> RepresentativeMetrics<S> {
    pub fn from_trial(trial: &TrialResult<S>) -> Self {
        Self {
            used_memory_after_input_solution: trial.used_memory_after_input_solution(),
            time_millis_spent: trial.time_millis_spent(),
            calculate_count: trial.calculate_count(),
            winning_score_difference: trial.winning_score_difference().cloned(),
            worst_score_difference_percentage: trial.worst_score_difference_percentage().cloned(),
        }
    }
}

/// Every field derived by accumulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioStatistics<S> {
    pub aggregate: AggregateStats<S>,
    /// One spread value per score level; absent when every trial failed
    pub standard_deviation: Option<Vec<f64>>,
    pub representatives: Representatives,
    pub median_metrics: RepresentativeMetrics<S>,
}

/// One scenario and its trials.
///
/// The solver and problem group IDs are non-owning back references; the
/// hierarchy resolves them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioAggregate<S> {
    id: ScenarioId,
    solver_group_id: SolverGroupId,
    solver_name: String,
    problem_group_id: ProblemGroupId,
    problem_name: String,
    trials: Vec<TrialResult<S>>,
    statistics: Option<ScenarioStatistics<S>>,
}

impl<S: Score> ScenarioAggregate<S> {
    /// Create an empty scenario bound to its two parent groupings
    pub fn new(solver: &SolverGroup, problem: &ProblemGroup) -> Self {
        Self {
            id: ScenarioId::new(),
            solver_group_id: solver.id(),
            solver_name: solver.name().to_string(),
            problem_group_id: problem.id(),
            problem_name: problem.name().to_string(),
            trials: Vec::new(),
            statistics: None,
        }
    }

    pub fn id(&self) -> ScenarioId {
        self.id
    }

    pub fn solver_group_id(&self) -> SolverGroupId {
        self.solver_group_id
    }

    pub fn problem_group_id(&self) -> ProblemGroupId {
        self.problem_group_id
    }

    pub fn solver_name(&self) -> &str {
        &self.solver_name
    }

    pub fn problem_name(&self) -> &str {
        &self.problem_name
    }

    /// Filename-safe scenario name: `<problem>_<solver>`
    pub fn name(&self) -> String {
        format!("{}_{}", self.problem_name, self.solver_name)
    }

    /// Append a completed trial; rejected once the scenario is accumulated
    pub fn push_trial(&mut self, trial: TrialResult<S>) -> AggregationResult<()> {
        if self.is_accumulated() {
            return Err(AggregationError::ScenarioFinalized {
                scenario: self.name(),
            });
        }
        self.trials.push(trial);
        Ok(())
    }

    pub fn trials(&self) -> &[TrialResult<S>] {
        &self.trials
    }

    pub fn trial(&self, index: usize) -> Option<&TrialResult<S>> {
        self.trials.get(index)
    }

    pub fn trial_count(&self) -> usize {
        self.trials.len()
    }

    pub fn is_accumulated(&self) -> bool {
        self.statistics.is_some()
    }

    /// Store the derived statistics and the per-trial ranks, once.
    ///
    /// `ranks` is aligned with the trial list. Representative indices must
    /// fall inside the trial list.
    pub fn finalize(
        &mut self,
        ranks: Vec<Option<usize>>,
        statistics: ScenarioStatistics<S>,
    ) -> AggregationResult<()> {
        if self.is_accumulated() {
            return Err(AggregationError::AlreadyAccumulated {
                scenario: self.name(),
            });
        }
        if self.trials.is_empty() {
            return Err(AggregationError::EmptyTrialList {
                scenario: self.name(),
            });
        }
        if ranks.len() != self.trials.len() {
            return Err(AggregationError::RankCountMismatch {
                expected: self.trials.len(),
                actual: ranks.len(),
            });
        }
        let Representatives { best, median, worst } = statistics.representatives;
        for index in [best, median, worst] {
            if index >= self.trials.len() {
                return Err(AggregationError::RepresentativeOutOfRange {
                    index,
                    len: self.trials.len(),
                });
            }
        }

        for (trial, rank) in self.trials.iter_mut().zip(ranks) {
            trial.set_rank(rank);
        }
        self.statistics = Some(statistics);
        Ok(())
    }

    /// All derived fields, absent before accumulation
    pub fn statistics(&self) -> Option<&ScenarioStatistics<S>> {
        self.statistics.as_ref()
    }

    fn aggregate(&self) -> Option<&AggregateStats<S>> {
        self.statistics.as_ref().map(|s| &s.aggregate)
    }

    pub fn failure_count(&self) -> Option<usize> {
        self.aggregate().map(|a| a.failure_count)
    }

    /// Always derived from the trial count and the failure count.
    ///
    /// Absent when a restored scenario reports more failures than trials.
    pub fn success_count(&self) -> Option<usize> {
        self.failure_count()
            .and_then(|failures| self.trials.len().checked_sub(failures))
    }

    pub fn total_score(&self) -> Option<&S> {
        self.aggregate().and_then(|a| a.total_score.as_ref())
    }

    pub fn average_score(&self) -> Option<&S> {
        self.aggregate().and_then(|a| a.average_score.as_ref())
    }

    pub fn total_uninitialized_variable_count(&self) -> Option<u64> {
        self.aggregate().map(|a| a.total_uninitialized_variable_count)
    }

    pub fn average_uninitialized_variable_count(&self) -> Option<u64> {
        self.aggregate()
            .and_then(|a| a.average_uninitialized_variable_count)
    }

    pub fn uninitialized_solution_count(&self) -> Option<usize> {
        self.aggregate().map(|a| a.uninitialized_solution_count)
    }

    pub fn infeasible_score_count(&self) -> Option<usize> {
        self.aggregate().map(|a| a.infeasible_score_count)
    }

    pub fn standard_deviation(&self) -> Option<&[f64]> {
        self.statistics
            .as_ref()
            .and_then(|s| s.standard_deviation.as_deref())
    }

    /// Spread per score level joined by `/`, e.g. `"0.00/12.25"`
    pub fn standard_deviation_string(&self) -> Option<String> {
        self.standard_deviation().map(standard_deviation_string)
    }

    fn representative(&self, pick: impl Fn(&Representatives) -> usize) -> Option<&TrialResult<S>> {
        self.statistics
            .as_ref()
            .and_then(|s| self.trials.get(pick(&s.representatives)))
    }

    pub fn best(&self) -> Option<&TrialResult<S>> {
        self.representative(|r| r.best)
    }

    /// The trial whose resource figures represent the scenario
    pub fn median(&self) -> Option<&TrialResult<S>> {
        self.representative(|r| r.median)
    }

    pub fn worst(&self) -> Option<&TrialResult<S>> {
        self.representative(|r| r.worst)
    }

    pub fn representatives(&self) -> Option<Representatives> {
        self.statistics.as_ref().map(|s| s.representatives)
    }

    fn median_metrics(&self) -> Option<&RepresentativeMetrics<S>> {
        self.statistics.as_ref().map(|s| &s.median_metrics)
    }

    pub fn used_memory_after_input_solution(&self) -> Option<u64> {
        self.median_metrics()
            .and_then(|m| m.used_memory_after_input_solution)
    }

    pub fn time_millis_spent(&self) -> Option<u64> {
        self.median_metrics().map(|m| m.time_millis_spent)
    }

    pub fn calculate_count(&self) -> Option<u64> {
        self.median_metrics().map(|m| m.calculate_count)
    }

    pub fn winning_score_difference(&self) -> Option<&S> {
        self.median_metrics()
            .and_then(|m| m.winning_score_difference.as_ref())
    }

    pub fn worst_score_difference_percentage(&self) -> Option<&ScoreDifferencePercentage> {
        self.median_metrics()
            .and_then(|m| m.worst_score_difference_percentage.as_ref())
    }

    /// Median calculate speed; a zero elapsed time counts as 1 ms
    pub fn average_calculate_count_per_second(&self) -> Option<u64> {
        self.median_metrics()
            .map(|m| calculate_count_per_second(m.calculate_count, m.time_millis_spent))
    }

    pub fn has_all_success(&self) -> bool {
        self.failure_count() == Some(0)
    }

    pub fn has_any_failure(&self) -> bool {
        self.failure_count().is_some_and(|failures| failures != 0)
    }

    pub fn is_initialized(&self) -> bool {
        self.average_uninitialized_variable_count() == Some(0)
    }

    /// A scenario without an average score is reported feasible
    pub fn is_score_feasible(&self) -> bool {
        self.average_score().map_or(true, Score::is_feasible)
    }

    /// Average score with an `-Ninit/` prefix, absent when every trial failed
    pub fn average_score_with_uninitialized_prefix(&self) -> Option<String> {
        let average = self.average_score()?;
        let successes = self.success_count().filter(|&n| n > 0)? as u64;
        let total = self.total_uninitialized_variable_count()?;
        Some(score_with_uninitialized_prefix(
            ceil_div(total, successes),
            average,
        ))
    }
}

/// Format spread levels: two decimals, scientific notation from 1000 upwards.
pub fn standard_deviation_string(levels: &[f64]) -> String {
    levels
        .iter()
        .map(|level| {
            if level.abs() >= 1000.0 {
                format!("{:.2e}", level)
            } else {
                format!("{:.2}", level)
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}
