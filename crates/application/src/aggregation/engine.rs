//! Aggregation Engine - runs every accumulation stage over a scenario
//!
//! The engine is configured once with a dominance comparator and then
//! accumulates scenarios one at a time. Accumulation is synchronous and
//! assumes the trial list is complete.

use super::aggregator::aggregate;
use super::comparator::{comparator_for, DominanceComparator};
use super::deviation::standard_deviation;
use super::ranker::rank_trials;
use super::representative::select_representatives;
use solver_benchmark_common::AggregationSettings;
use solver_benchmark_domain::{
    AggregationError, AggregationResult, BenchmarkHierarchy, RepresentativeMetrics,
    ScenarioAggregate, ScenarioStatistics, Score,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Accumulates scenario statistics with a fixed dominance comparator
pub struct AggregationEngine<S> {
    comparator: Arc<dyn DominanceComparator<S>>,
}

impl<S: Score> AggregationEngine<S> {
    /// Create an engine ranking trials with `comparator`
    pub fn new(comparator: Arc<dyn DominanceComparator<S>>) -> Self {
        Self { comparator }
    }

    /// Create an engine from the configured ranking strategy
    pub fn from_settings(settings: &AggregationSettings) -> Self {
        Self::new(comparator_for(settings.ranking))
    }

    /// Name of the comparator used for ranking
    pub fn comparator_name(&self) -> &'static str {
        self.comparator.name()
    }

    /// Populate every derived field of `scenario`.
    ///
    /// Runs the aggregator, the ranker, the representative selector and the
    /// standard deviation calculator in that order, then finalizes the
    /// scenario. May be called once per scenario.
    #[instrument(
        skip_all,
        fields(scenario = %scenario.name(), trials = scenario.trial_count(), comparator = self.comparator.name())
    )]
    pub fn accumulate(&self, scenario: &mut ScenarioAggregate<S>) -> AggregationResult<()> {
        if scenario.is_accumulated() {
            warn!("Scenario already accumulated");
            return Err(AggregationError::AlreadyAccumulated {
                scenario: scenario.name(),
            });
        }

        let name = scenario.name();
        let trials = scenario.trials();

        let stats = aggregate(&name, trials).map_err(log_fatal)?;
        let success_count = trials.len() - stats.failure_count;
        if success_count == 0 {
            warn!(failures = stats.failure_count, "Every trial failed");
        }

        let ranks = rank_trials(trials, self.comparator.as_ref());
        debug!(?ranks, "Trials ranked");

        let representatives = select_representatives(&name, trials, &ranks).map_err(log_fatal)?;
        debug!(
            best = representatives.best,
            median = representatives.median,
            worst = representatives.worst,
            "Representatives selected"
        );
        let median_metrics = RepresentativeMetrics::from_trial(&trials[representatives.median]);

        let deviation = standard_deviation(trials, stats.average_score.as_ref(), success_count);

        let statistics = ScenarioStatistics {
            aggregate: stats,
            standard_deviation: deviation,
            representatives,
            median_metrics,
        };
        scenario.finalize(ranks, statistics).map_err(log_fatal)?;

        info!(
            failures = scenario.failure_count().unwrap_or_default(),
            average = ?scenario.average_score(),
            "Scenario accumulated"
        );
        Ok(())
    }

    /// Accumulate every scenario of `hierarchy` that is not accumulated yet.
    ///
    /// Returns how many scenarios were accumulated. Stops at the first error.
    #[instrument(skip_all, fields(scenarios = hierarchy.scenario_count()))]
    pub fn accumulate_all(&self, hierarchy: &mut BenchmarkHierarchy<S>) -> AggregationResult<usize> {
        let mut accumulated = 0;
        for scenario in hierarchy.scenarios_mut() {
            if scenario.is_accumulated() {
                debug!(scenario = %scenario.name(), "Skipping accumulated scenario");
                continue;
            }
            self.accumulate(scenario)?;
            accumulated += 1;
        }

        info!(accumulated, "Hierarchy accumulated");
        Ok(accumulated)
    }
}

fn log_fatal(err: AggregationError) -> AggregationError {
    if err.is_fatal() {
        error!(error = %err, "Aggregation precondition violated");
    }
    err
}
