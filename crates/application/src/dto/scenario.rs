//! Scenario report DTOs

use serde::{Deserialize, Serialize};
use solver_benchmark_domain::{
    score_with_uninitialized_prefix, AggregationError, AggregationResult, ScenarioAggregate,
    Score, TrialResult,
};

/// Report row for one accumulated scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub id: String,
    pub name: String,
    pub solver: String,
    pub problem: String,
    pub trial_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub standard_deviation: Option<String>,
    pub uninitialized_solution_count: usize,
    pub infeasible_score_count: usize,
    pub feasible: bool,
    pub best_trial: usize,
    pub median_trial: usize,
    pub worst_trial: usize,
    pub time_millis_spent: u64,
    pub calculate_count: u64,
    pub average_calculate_count_per_second: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_memory_after_input_solution: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winning_score_difference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worst_score_difference_percentage: Option<String>,
    pub trials: Vec<TrialSummary>,
}

/// Report row for one trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialSummary {
    pub index: usize,
    pub failed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    pub winner: bool,
    pub time_millis_spent: u64,
    pub calculate_count_per_second: u64,
}

impl<S: Score> From<&TrialResult<S>> for TrialSummary {
    fn from(trial: &TrialResult<S>) -> Self {
        Self {
            index: trial.index(),
            failed: trial.has_failed(),
            score: trial.score().map(|score| {
                score_with_uninitialized_prefix(
                    trial.uninitialized_variable_count().unwrap_or(0),
                    score,
                )
            }),
            rank: trial.rank(),
            winner: trial.is_winner(),
            time_millis_spent: trial.time_millis_spent(),
            calculate_count_per_second: trial.calculate_count_per_second(),
        }
    }
}

/// Representatives are stored by position; reports name trials by their index
fn trial_index<S: Score>(trial: Option<&TrialResult<S>>, position: usize) -> usize {
    trial.map_or(position, TrialResult::index)
}

impl ScenarioSummary {
    /// Project an accumulated scenario; fails with `NotAccumulated` otherwise
    pub fn from_scenario<S: Score>(scenario: &ScenarioAggregate<S>) -> AggregationResult<Self> {
        let (Some(statistics), Some(success_count)) = (scenario.statistics(), scenario.success_count())
        else {
            return Err(AggregationError::NotAccumulated {
                scenario: scenario.name(),
            });
        };
        let representatives = statistics.representatives;
        let metrics = &statistics.median_metrics;

        Ok(Self {
            id: scenario.id().to_string(),
            name: scenario.name(),
            solver: scenario.solver_name().to_string(),
            problem: scenario.problem_name().to_string(),
            trial_count: scenario.trial_count(),
            success_count,
            failure_count: statistics.aggregate.failure_count,
            total_score: scenario.total_score().map(ToString::to_string),
            average_score: scenario.average_score_with_uninitialized_prefix(),
            standard_deviation: scenario.standard_deviation_string(),
            uninitialized_solution_count: statistics.aggregate.uninitialized_solution_count,
            infeasible_score_count: statistics.aggregate.infeasible_score_count,
            feasible: scenario.is_score_feasible(),
            best_trial: trial_index(scenario.best(), representatives.best),
            median_trial: trial_index(scenario.median(), representatives.median),
            worst_trial: trial_index(scenario.worst(), representatives.worst),
            time_millis_spent: metrics.time_millis_spent,
            calculate_count: metrics.calculate_count,
            average_calculate_count_per_second: scenario
                .average_calculate_count_per_second()
                .unwrap_or_default(),
            used_memory_after_input_solution: metrics.used_memory_after_input_solution,
            winning_score_difference: metrics
                .winning_score_difference
                .as_ref()
                .map(ToString::to_string),
            worst_score_difference_percentage: metrics
                .worst_score_difference_percentage
                .as_ref()
                .map(ToString::to_string),
            trials: scenario.trials().iter().map(TrialSummary::from).collect(),
        })
    }
}
