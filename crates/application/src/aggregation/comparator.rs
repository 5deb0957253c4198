//! Dominance comparators: total orders deciding which trial is better.
//!
//! `Ordering::Greater` means the first trial dominates the second.

use solver_benchmark_common::RankingStrategy;
use solver_benchmark_domain::{Score, TrialResult};
use std::cmp::Ordering;
use std::sync::Arc;

/// Total order over the trials of one scenario, greater is better.
pub trait DominanceComparator<S>: Send + Sync {
    /// Compare two trials
    fn compare(&self, a: &TrialResult<S>, b: &TrialResult<S>) -> Ordering;

    /// Get the comparator name for logging
    fn name(&self) -> &'static str;
}

impl<S, F> DominanceComparator<S> for F
where
    F: Fn(&TrialResult<S>, &TrialResult<S>) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &TrialResult<S>, b: &TrialResult<S>) -> Ordering {
        self(a, b)
    }

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Failed trials lose to succeeded ones; otherwise the higher score wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreComparator;

impl<S: Score> DominanceComparator<S> for ScoreComparator {
    fn compare(&self, a: &TrialResult<S>, b: &TrialResult<S>) -> Ordering {
        match (a.score(), b.score()) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Greater,
            (None, Some(_)) => Ordering::Less,
            (None, None) => Ordering::Equal,
        }
    }

    fn name(&self) -> &'static str {
        "score"
    }
}

/// Like [`ScoreComparator`], with equal scores split by less time spent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreThenTimeComparator;

impl<S: Score> DominanceComparator<S> for ScoreThenTimeComparator {
    fn compare(&self, a: &TrialResult<S>, b: &TrialResult<S>) -> Ordering {
        ScoreComparator
            .compare(a, b)
            .then_with(|| b.time_millis_spent().cmp(&a.time_millis_spent()))
    }

    fn name(&self) -> &'static str {
        "score_then_time"
    }
}

/// Resolve the configured ranking strategy to a comparator
pub fn comparator_for<S: Score>(strategy: RankingStrategy) -> Arc<dyn DominanceComparator<S>> {
    match strategy {
        RankingStrategy::Score => Arc::new(ScoreComparator),
        RankingStrategy::ScoreThenTime => Arc::new(ScoreThenTimeComparator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_benchmark_domain::SimpleScore;

    #[test]
    fn test_score_comparator() {
        let high = TrialResult::succeeded(0, SimpleScore(10));
        let low = TrialResult::succeeded(1, SimpleScore(-3));
        let failed = TrialResult::failed(2);

        assert_eq!(ScoreComparator.compare(&high, &low), Ordering::Greater);
        assert_eq!(ScoreComparator.compare(&failed, &low), Ordering::Less);
        assert_eq!(ScoreComparator.compare(&failed, &failed), Ordering::Equal);
    }

    #[test]
    fn test_score_then_time_prefers_faster_trial() {
        let slow = TrialResult::succeeded(0, SimpleScore(5)).with_time_millis_spent(900);
        let fast = TrialResult::succeeded(1, SimpleScore(5)).with_time_millis_spent(300);
        let better = TrialResult::succeeded(2, SimpleScore(6)).with_time_millis_spent(5000);

        assert_eq!(ScoreThenTimeComparator.compare(&fast, &slow), Ordering::Greater);
        assert_eq!(ScoreThenTimeComparator.compare(&better, &fast), Ordering::Greater);
        assert_eq!(ScoreComparator.compare(&fast, &slow), Ordering::Equal);
    }

    #[test]
    fn test_closures_are_comparators() {
        let by_calculate_count = |a: &TrialResult<SimpleScore>, b: &TrialResult<SimpleScore>| {
            a.calculate_count().cmp(&b.calculate_count())
        };
        let a = TrialResult::succeeded(0, SimpleScore(1)).with_calculate_count(10);
        let b = TrialResult::succeeded(1, SimpleScore(1)).with_calculate_count(20);

        assert_eq!(by_calculate_count.compare(&a, &b), Ordering::Less);
        assert_eq!(DominanceComparator::<SimpleScore>::name(&by_calculate_count), "custom");
    }

    #[test]
    fn test_comparator_for_strategy() {
        assert_eq!(comparator_for::<SimpleScore>(RankingStrategy::Score).name(), "score");
        assert_eq!(
            comparator_for::<SimpleScore>(RankingStrategy::ScoreThenTime).name(),
            "score_then_time"
        );
    }
}
