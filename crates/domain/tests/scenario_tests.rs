//! Tests for the scenario aggregate lifecycle and its report accessors
//!
//! Accumulation itself lives in the application layer; here statistics are
//! finalized by hand to exercise the write-once contract.

use solver_benchmark_domain::{
    AggregateStats, AggregationError, BenchmarkHierarchy, HardSoftScore, RepresentativeMetrics,
    Representatives, ScenarioAggregate, ScenarioStatistics, ScoreDifferencePercentage,
    TrialResult,
};

fn all_failed_statistics() -> ScenarioStatistics<HardSoftScore> {
    ScenarioStatistics {
        aggregate: AggregateStats::all_failed(2),
        standard_deviation: None,
        representatives: Representatives {
            best: 0,
            median: 1,
            worst: 1,
        },
        median_metrics: RepresentativeMetrics {
            used_memory_after_input_solution: None,
            time_millis_spent: 40,
            calculate_count: 0,
            winning_score_difference: None,
            worst_score_difference_percentage: None,
        },
    }
}

// ============================================================================
// Lifecycle
// ============================================================================

#[test]
fn test_all_failed_scenario_reports_absent_averages() {
    // Arrange
    let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
    let solver = hierarchy.add_solver("first-fit");
    let problem = hierarchy.add_problem("exam-01");
    let id = hierarchy.add_scenario(solver, problem).unwrap();
    let scenario = hierarchy.scenario_mut(id).unwrap();
    scenario.push_trial(TrialResult::failed(0)).unwrap();
    scenario.push_trial(TrialResult::failed(1)).unwrap();

    // Act
    scenario
        .finalize(vec![None, None], all_failed_statistics())
        .unwrap();

    // Assert
    let scenario = hierarchy.scenario(id).unwrap();
    assert_eq!(scenario.failure_count(), Some(2));
    assert_eq!(scenario.success_count(), Some(0));
    assert_eq!(scenario.average_score(), None);
    assert_eq!(scenario.average_score_with_uninitialized_prefix(), None);
    assert_eq!(scenario.standard_deviation_string(), None);
    assert!(scenario.median().unwrap().rank().is_none());
    assert!(scenario.is_score_feasible());
    assert!(!scenario.is_initialized());
}

#[test]
fn test_median_metrics_are_read_back() {
    // Arrange
    let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
    let solver = hierarchy.add_solver("tabu");
    let problem = hierarchy.add_problem("vrp-32");
    let id = hierarchy.add_scenario(solver, problem).unwrap();
    let scenario = hierarchy.scenario_mut(id).unwrap();
    scenario
        .push_trial(
            TrialResult::succeeded(0, HardSoftScore::of(0, -10))
                .with_used_memory_after_input_solution(4096)
                .with_winning_score_difference(HardSoftScore::of(0, -2))
                .with_worst_score_difference_percentage(ScoreDifferencePercentage::new(vec![
                    0.0, 20.0,
                ])),
        )
        .unwrap();
    let median = RepresentativeMetrics::from_trial(&scenario.trials()[0]);

    // Act
    scenario
        .finalize(
            vec![Some(0)],
            ScenarioStatistics {
                aggregate: AggregateStats {
                    failure_count: 0,
                    total_score: Some(HardSoftScore::of(0, -10)),
                    average_score: Some(HardSoftScore::of(0, -10)),
                    total_uninitialized_variable_count: 0,
                    average_uninitialized_variable_count: Some(0),
                    uninitialized_solution_count: 0,
                    infeasible_score_count: 0,
                },
                standard_deviation: Some(vec![0.0, 0.0]),
                representatives: Representatives {
                    best: 0,
                    median: 0,
                    worst: 0,
                },
                median_metrics: median,
            },
        )
        .unwrap();

    // Assert
    let scenario = hierarchy.scenario(id).unwrap();
    assert_eq!(scenario.used_memory_after_input_solution(), Some(4096));
    assert_eq!(
        scenario.winning_score_difference(),
        Some(&HardSoftScore::of(0, -2))
    );
    assert_eq!(
        scenario.worst_score_difference_percentage().unwrap().to_string(),
        "0.00%/20.00%"
    );
    assert_eq!(scenario.standard_deviation_string().unwrap(), "0.00/0.00");
    assert_eq!(
        scenario.average_score_with_uninitialized_prefix().unwrap(),
        "0hard/-10soft"
    );
    assert!(scenario.has_all_success());
    assert!(scenario.is_initialized());
}

#[test]
fn test_trials_cannot_be_added_after_finalize() {
    let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
    let solver = hierarchy.add_solver("tabu");
    let problem = hierarchy.add_problem("vrp-32");
    let id = hierarchy.add_scenario(solver, problem).unwrap();
    let scenario = hierarchy.scenario_mut(id).unwrap();
    scenario.push_trial(TrialResult::failed(0)).unwrap();
    scenario.push_trial(TrialResult::failed(1)).unwrap();
    scenario
        .finalize(vec![None, None], all_failed_statistics())
        .unwrap();

    let err = scenario.push_trial(TrialResult::failed(2)).unwrap_err();

    assert_eq!(
        err,
        AggregationError::ScenarioFinalized {
            scenario: "vrp-32_tabu".to_string()
        }
    );
    assert_eq!(scenario.trial_count(), 2);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn test_scenario_serialization_keeps_ranks_and_statistics() {
    let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
    let solver = hierarchy.add_solver("tabu");
    let problem = hierarchy.add_problem("vrp-32");
    let id = hierarchy.add_scenario(solver, problem).unwrap();
    let scenario = hierarchy.scenario_mut(id).unwrap();
    scenario.push_trial(TrialResult::failed(0)).unwrap();
    scenario.push_trial(TrialResult::failed(1)).unwrap();
    scenario
        .finalize(vec![None, None], all_failed_statistics())
        .unwrap();

    let json = serde_json::to_string(hierarchy.scenario(id).unwrap()).unwrap();
    let restored: ScenarioAggregate<HardSoftScore> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.id(), id);
    assert!(restored.is_accumulated());
    assert_eq!(restored.failure_count(), Some(2));
    assert_eq!(restored.time_millis_spent(), Some(40));
}

#[test]
fn test_inconsistent_restored_statistics_report_absent_counts() {
    // Arrange: two failed trials persisted with a corrupted aggregate
    let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
    let solver = hierarchy.add_solver("first-fit");
    let problem = hierarchy.add_problem("exam-01");
    let id = hierarchy.add_scenario(solver, problem).unwrap();
    let scenario = hierarchy.scenario_mut(id).unwrap();
    scenario.push_trial(TrialResult::failed(0)).unwrap();
    scenario.push_trial(TrialResult::failed(1)).unwrap();
    scenario
        .finalize(vec![None, None], all_failed_statistics())
        .unwrap();

    let mut json = serde_json::to_value(hierarchy.scenario(id).unwrap()).unwrap();
    json["statistics"]["aggregate"]["failure_count"] = serde_json::json!(5);
    let too_many_failures: ScenarioAggregate<HardSoftScore> =
        serde_json::from_value(json.clone()).unwrap();

    json["statistics"]["aggregate"]["failure_count"] = serde_json::json!(2);
    json["statistics"]["aggregate"]["average_score"] = serde_json::json!({"hard": 0, "soft": -1});
    let stray_average: ScenarioAggregate<HardSoftScore> = serde_json::from_value(json).unwrap();

    // Act / Assert
    assert_eq!(too_many_failures.success_count(), None);
    assert_eq!(stray_average.success_count(), Some(0));
    assert_eq!(stray_average.average_score_with_uninitialized_prefix(), None);
}
