//! Reattach an accumulated scenario under a rebuilt hierarchy without
//! recomputing its statistics.

use solver_benchmark_domain::{
    AggregationError, BenchmarkHierarchy, DomainResult, ProblemGroupId, ScenarioAggregate,
    ScenarioId, Score, SolverGroupId,
};
use tracing::{error, info, instrument};

/// Recreate `old` inside `hierarchy` under the given solver and problem groups.
///
/// Every trial is recreated through [`TrialResult::create_merge`] at its
/// original position, so the copied best, median and worst indices resolve
/// to the new trials. The new scenario is registered in both groupings.
///
/// [`TrialResult::create_merge`]: solver_benchmark_domain::TrialResult::create_merge
#[instrument(skip_all, fields(scenario = %old.name(), trials = old.trial_count()))]
pub fn merge_into<S: Score>(
    hierarchy: &mut BenchmarkHierarchy<S>,
    solver_id: SolverGroupId,
    problem_id: ProblemGroupId,
    old: &ScenarioAggregate<S>,
) -> DomainResult<ScenarioId> {
    if old.trials().is_empty() {
        let err = AggregationError::EmptyTrialList {
            scenario: old.name(),
        };
        error!(error = %err, "Cannot merge a scenario without trials");
        return Err(err.into());
    }
    let Some(statistics) = old.statistics() else {
        return Err(AggregationError::NotAccumulated {
            scenario: old.name(),
        }
        .into());
    };

    let mut merged = ScenarioAggregate::new(hierarchy.solver(solver_id)?, hierarchy.problem(problem_id)?);
    for (new_index, trial) in old.trials().iter().enumerate() {
        merged.push_trial(trial.create_merge(new_index))?;
    }
    let ranks = old.trials().iter().map(|trial| trial.rank()).collect();
    merged.finalize(ranks, statistics.clone())?;

    let id = hierarchy.register_scenario(merged)?;
    info!(merged_scenario = %id, "Scenario merged into rebuilt hierarchy");
    Ok(id)
}
