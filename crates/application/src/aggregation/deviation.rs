//! Per-level standard deviation of trial scores around the average.

use solver_benchmark_domain::{Score, TrialResult};

/// Population standard deviation of the succeeded trials, one value per score level.
///
/// `n` is the number of succeeded trials. Returns `None` when `n` is zero or
/// there is no average.
pub fn standard_deviation<S: Score>(
    trials: &[TrialResult<S>],
    average: Option<&S>,
    n: usize,
) -> Option<Vec<f64>> {
    let average = average?;
    if n == 0 {
        return None;
    }

    let average_levels = average.to_level_doubles();
    let mut variance_sums = vec![0.0; average_levels.len()];

    for score in trials.iter().filter_map(TrialResult::score) {
        for (sum, (level, mean)) in variance_sums
            .iter_mut()
            .zip(score.to_level_doubles().into_iter().zip(&average_levels))
        {
            let delta = level - mean;
            *sum += delta * delta;
        }
    }

    Some(
        variance_sums
            .into_iter()
            .map(|sum| (sum / n as f64).sqrt())
            .collect(),
    )
}
