//! Application layer for solver benchmark aggregation
//!
//! This crate turns completed trial lists into scenario statistics.
//!
//! ## Modules
//!
//! - `aggregation` - Aggregator, ranker, representative selector, standard
//!   deviation, merge coordinator and the engine running them
//! - `dto` - Report projections of accumulated scenarios

pub mod aggregation;
pub mod dto;

// Re-export commonly used types
pub use aggregation::{
    aggregate, comparator_for, competition_ranks, merge_into, rank_trials,
    select_representatives, standard_deviation, AggregationEngine, DominanceComparator,
    ScoreComparator, ScoreThenTimeComparator,
};
pub use dto::{ScenarioSummary, TrialSummary};
