//! Test fixtures for generating trial sets with realistic data.

use crate::builders::TrialBuilder;
use fake::{faker::lorem::en::Word, Fake};
use proptest::prelude::*;
use solver_benchmark_domain::{HardSoftScore, SimpleScore, TrialResult};

/// Five trials, the third one failed, scoring 30, 20, 20 and 10 otherwise.
///
/// Accumulated with the score comparator this gives ranks 0, 1, 1, 3 and the
/// second trial scoring 20 as median.
pub fn create_mixed_trials() -> Vec<TrialResult<SimpleScore>> {
    vec![
        TrialBuilder::succeeded(0, SimpleScore(10))
            .with_time_millis_spent(1_400)
            .build(),
        TrialBuilder::succeeded(1, SimpleScore(20))
            .with_time_millis_spent(1_100)
            .build(),
        TrialBuilder::failed(2).build(),
        TrialBuilder::succeeded(3, SimpleScore(30))
            .with_time_millis_spent(900)
            .build(),
        TrialBuilder::succeeded(4, SimpleScore(20))
            .with_time_millis_spent(1_250)
            .with_calculate_count(62_500)
            .with_used_memory(8_388_608)
            .build(),
    ]
}

/// `count` failed trials
pub fn create_failed_trials(count: usize) -> Vec<TrialResult<SimpleScore>> {
    (0..count).map(|i| TrialBuilder::failed(i).build()).collect()
}

/// Hard/soft trials with one infeasible and one partially initialized solution
pub fn create_hard_soft_trials() -> Vec<TrialResult<HardSoftScore>> {
    vec![
        TrialBuilder::succeeded(0, HardSoftScore::of(0, -120))
            .with_winning_score_difference(HardSoftScore::of(0, -20))
            .with_worst_score_difference_percentage(vec![0.0, 12.5])
            .build(),
        TrialBuilder::succeeded(1, HardSoftScore::of(-1, -90)).build(),
        TrialBuilder::succeeded(2, HardSoftScore::of(0, -100))
            .with_uninitialized_variable_count(4)
            .build(),
    ]
}

/// Random solver configuration name, e.g. `"tabu-dolor"`
pub fn random_solver_name() -> String {
    format!("tabu-{}", Word().fake::<String>())
}

/// Random problem instance name, e.g. `"vrp-ipsum-42"`
pub fn random_problem_name() -> String {
    format!("vrp-{}-{}", Word().fake::<String>(), (1..500u32).fake::<u32>())
}

/// Strategy for non-empty trial lists of simple scores with some failures
pub fn arb_simple_trials(max_len: usize) -> impl Strategy<Value = Vec<TrialResult<SimpleScore>>> {
    prop::collection::vec(prop::option::weighted(0.8, -50i64..50), 1..=max_len).prop_map(
        |scores| {
            scores
                .into_iter()
                .enumerate()
                .map(|(i, score)| match score {
                    Some(score) => TrialResult::succeeded(i, SimpleScore(score)),
                    None => TrialResult::failed(i),
                })
                .collect()
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_trials_shape() {
        let trials = create_mixed_trials();
        assert_eq!(trials.len(), 5);
        assert_eq!(trials.iter().filter(|t| t.has_failed()).count(), 1);
    }

    #[test]
    fn test_random_names_are_prefixed() {
        assert!(random_solver_name().starts_with("tabu-"));
        assert!(random_problem_name().starts_with("vrp-"));
    }

    proptest! {
        #[test]
        fn arb_trials_are_indexed_in_order(trials in arb_simple_trials(12)) {
            prop_assert!(!trials.is_empty());
            for (i, trial) in trials.iter().enumerate() {
                prop_assert_eq!(trial.index(), i);
            }
        }
    }
}
