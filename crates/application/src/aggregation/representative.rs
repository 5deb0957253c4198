//! Best, median and worst trial selection.

use solver_benchmark_domain::{
    ceil_div, AggregationError, AggregationResult, Representatives, Score, TrialResult,
};

/// Pick the best, median and worst trials of a scenario.
///
/// Trials are ordered by `(failed, rank)`: a failed trial is worse than any
/// succeeded one and a lower rank is better. Failed trials keep their input
/// order. For an even count the upper median is chosen. `ranks` must be
/// aligned with `trials`.
pub fn select_representatives<S: Score>(
    scenario: &str,
    trials: &[TrialResult<S>],
    ranks: &[Option<usize>],
) -> AggregationResult<Representatives> {
    if trials.is_empty() {
        return Err(AggregationError::EmptyTrialList {
            scenario: scenario.to_string(),
        });
    }
    if ranks.len() != trials.len() {
        return Err(AggregationError::RankCountMismatch {
            expected: trials.len(),
            actual: ranks.len(),
        });
    }

    let mut order: Vec<usize> = (0..trials.len()).collect();
    order.sort_by_key(|&index| (trials[index].has_failed(), ranks[index].unwrap_or(usize::MAX)));

    let last = order.len() - 1;
    let median = ceil_div(last as u64, 2) as usize;

    Ok(Representatives {
        best: order[0],
        median: order[median],
        worst: order[last],
    })
}
