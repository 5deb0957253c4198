//! Solver Benchmark Domain Types
//!
//! This crate provides the core domain model for aggregating repeated trial
//! runs of solver benchmarks. It defines scores, trials, scenario aggregates and
//! the hierarchy that groups scenarios by solver configuration and by problem
//! instance.
//!
//! ## Architecture
//!
//! - **score**: the `Score` contract and the concrete `SimpleScore` / `HardSoftScore`
//! - **trial**: the immutable outcome of one trial run
//! - **scenario**: a scenario's trials and its write-once derived statistics
//! - **hierarchy**: groupings by solver and by problem, with explicit registration
//! - **identifiers**: strongly-typed UUID-based identifiers
//! - **errors**: invariant-violation error types
//! - **math**: integer helpers
//!
//! ## Usage
//!
//! ```rust
//! use solver_benchmark_domain::{BenchmarkHierarchy, HardSoftScore, TrialResult};
//!
//! let mut hierarchy = BenchmarkHierarchy::<HardSoftScore>::new();
//! let solver = hierarchy.add_solver("tabu-search");
//! let problem = hierarchy.add_problem("cloud-balancing-400");
//! let id = hierarchy.add_scenario(solver, problem).unwrap();
//!
//! let scenario = hierarchy.scenario_mut(id).unwrap();
//! scenario
//!     .push_trial(TrialResult::succeeded(0, HardSoftScore::of(0, -120)))
//!     .unwrap();
//! assert_eq!(scenario.name(), "cloud-balancing-400_tabu-search");
//! ```

#![warn(clippy::all)]

pub mod errors;
pub mod hierarchy;
pub mod identifiers;
pub mod math;
pub mod scenario;
pub mod score;
pub mod trial;

// Re-export commonly used types
pub use errors::{
    AggregationError, AggregationResult, DomainError, DomainResult, HierarchyError,
    HierarchyResult,
};
pub use hierarchy::{BenchmarkHierarchy, ProblemGroup, SolverGroup};
pub use identifiers::*;
pub use math::ceil_div;
pub use scenario::{
    standard_deviation_string, AggregateStats, RepresentativeMetrics, Representatives,
    ScenarioAggregate, ScenarioStatistics,
};
pub use score::{
    score_with_uninitialized_prefix, HardSoftScore, Score, ScoreDifferencePercentage, SimpleScore,
};
pub use trial::{TrialOutcome, TrialResult};
