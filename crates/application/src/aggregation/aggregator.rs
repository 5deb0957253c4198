//! Totals, averages and failure accounting over one scenario's trials.

use solver_benchmark_domain::{
    ceil_div, AggregateStats, AggregationError, AggregationResult, Score, TrialResult,
};

/// Compute the aggregate statistics of a scenario's trials.
///
/// Succeeded trials are summed in their natural order. When every trial
/// failed, the totals and averages stay absent and every count but
/// `failure_count` is zero. Fails only on an empty trial list.
pub fn aggregate<S: Score>(
    scenario: &str,
    trials: &[TrialResult<S>],
) -> AggregationResult<AggregateStats<S>> {
    if trials.is_empty() {
        return Err(AggregationError::EmptyTrialList {
            scenario: scenario.to_string(),
        });
    }

    let failure_count = trials.iter().filter(|trial| trial.has_failed()).count();
    let success_count = trials.len() - failure_count;
    if success_count == 0 {
        return Ok(AggregateStats::all_failed(failure_count));
    }

    let mut total_score: Option<S> = None;
    let mut total_uninitialized_variable_count = 0u64;
    let mut uninitialized_solution_count = 0usize;
    let mut infeasible_score_count = 0usize;

    for trial in trials {
        let Some(score) = trial.score() else {
            continue;
        };
        total_score = Some(match total_score {
            Some(total) => total.add(score),
            None => score.clone(),
        });

        let uninitialized = trial.uninitialized_variable_count().unwrap_or(0);
        if uninitialized > 0 {
            uninitialized_solution_count += 1;
            total_uninitialized_variable_count += uninitialized;
        } else if !score.is_feasible() {
            infeasible_score_count += 1;
        }
    }

    let average_score = total_score.as_ref().map(|total| total.divide(success_count));
    let average_uninitialized_variable_count = Some(ceil_div(
        total_uninitialized_variable_count,
        success_count as u64,
    ));

    Ok(AggregateStats {
        failure_count,
        total_score,
        average_score,
        total_uninitialized_variable_count,
        average_uninitialized_variable_count,
        uninitialized_solution_count,
        infeasible_score_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_benchmark_domain::{HardSoftScore, SimpleScore};

    #[test]
    fn test_totals_and_average() {
        let trials = vec![
            TrialResult::succeeded(0, SimpleScore(10)),
            TrialResult::failed(1),
            TrialResult::succeeded(2, SimpleScore(20)),
            TrialResult::succeeded(3, SimpleScore(31)),
        ];

        let stats = aggregate("p_s", &trials).unwrap();

        assert_eq!(stats.failure_count, 1);
        assert_eq!(stats.total_score, Some(SimpleScore(61)));
        assert_eq!(stats.average_score, Some(SimpleScore(20)));
        assert_eq!(stats.average_uninitialized_variable_count, Some(0));
    }

    #[test]
    fn test_uninitialized_trials_are_not_counted_as_infeasible() {
        let trials = vec![
            TrialResult::succeeded(0, HardSoftScore::of(-2, 0)).with_uninitialized_variable_count(3),
            TrialResult::succeeded(1, HardSoftScore::of(-1, -5)),
            TrialResult::succeeded(2, HardSoftScore::of(0, -5)).with_uninitialized_variable_count(2),
        ];

        let stats = aggregate("p_s", &trials).unwrap();

        assert_eq!(stats.uninitialized_solution_count, 2);
        assert_eq!(stats.total_uninitialized_variable_count, 5);
        // ceil(5 / 3)
        assert_eq!(stats.average_uninitialized_variable_count, Some(2));
        assert_eq!(stats.infeasible_score_count, 1);
    }

    #[test]
    fn test_all_failed() {
        let trials = vec![
            TrialResult::<SimpleScore>::failed(0),
            TrialResult::failed(1),
            TrialResult::failed(2),
        ];

        let stats = aggregate("p_s", &trials).unwrap();

        assert_eq!(stats, AggregateStats::all_failed(3));
    }

    #[test]
    fn test_empty_list_is_rejected() {
        let err = aggregate::<SimpleScore>("vrp_tabu", &[]).unwrap_err();
        assert_eq!(
            err,
            AggregationError::EmptyTrialList {
                scenario: "vrp_tabu".to_string()
            }
        );
    }
}
