//! Competition ranking with ties.
//!
//! Items are sorted best first and walked in that order. Comparator-equal
//! neighbours share a rank, and the rank after a tie block skips by the size
//! of that block, which yields ranks like `0, 0, 2, 3`.

use super::comparator::DominanceComparator;
use solver_benchmark_domain::{Score, TrialResult};
use std::cmp::Ordering;

/// Rank `items` descending by `compare`, returning one rank per item in input order.
///
/// The sort is stable, so equal items keep their relative input order.
pub fn competition_ranks<T, F>(items: &[T], compare: F) -> Vec<usize>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut order: Vec<usize> = (0..items.len()).collect();
    order.sort_by(|&a, &b| compare(&items[b], &items[a]));

    let mut ranks = vec![0; items.len()];
    let mut current_rank = 0;
    let mut same_rank_count = 0;
    let mut previous: Option<usize> = None;

    for index in order {
        if let Some(previous) = previous {
            if compare(&items[previous], &items[index]) != Ordering::Equal {
                current_rank += same_rank_count;
                same_rank_count = 0;
            }
        }
        ranks[index] = current_rank;
        same_rank_count += 1;
        previous = Some(index);
    }

    ranks
}

/// Rank the succeeded trials of a scenario.
///
/// The result is aligned with `trials`; failed trials get `None`.
pub fn rank_trials<S: Score>(
    trials: &[TrialResult<S>],
    comparator: &dyn DominanceComparator<S>,
) -> Vec<Option<usize>> {
    let succeeded: Vec<&TrialResult<S>> =
        trials.iter().filter(|trial| !trial.has_failed()).collect();
    let mut ranks = competition_ranks(&succeeded, |a, b| comparator.compare(a, b)).into_iter();

    trials
        .iter()
        .map(|trial| {
            if trial.has_failed() {
                None
            } else {
                ranks.next()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregation::ScoreComparator;
    use solver_benchmark_domain::SimpleScore;

    #[test]
    fn test_ties_skip_following_rank() {
        let ranks = competition_ranks(&[7, 9, 9, 3], |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(ranks, vec![2, 0, 0, 3]);
    }

    #[test]
    fn test_all_equal() {
        let ranks = competition_ranks(&[1, 1, 1], |a: &i32, b: &i32| a.cmp(b));
        assert_eq!(ranks, vec![0, 0, 0]);
    }

    #[test]
    fn test_empty_input() {
        let ranks = competition_ranks(&[] as &[i32], |a, b| a.cmp(b));
        assert!(ranks.is_empty());
    }

    #[test]
    fn test_failed_trials_are_unranked() {
        let trials = vec![
            TrialResult::succeeded(0, SimpleScore(10)),
            TrialResult::failed(1),
            TrialResult::succeeded(2, SimpleScore(30)),
            TrialResult::succeeded(3, SimpleScore(20)),
        ];

        let ranks = rank_trials(&trials, &ScoreComparator);

        assert_eq!(ranks, vec![Some(2), None, Some(0), Some(1)]);
    }
}
