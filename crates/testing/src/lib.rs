//! Testing utilities for the solver benchmark crates
//!
//! This crate provides:
//! - Fluent builders for trials, scenarios and hierarchies
//! - Fixtures with realistic trial sets
//! - Property-based testing strategies
//!
//! # Examples
//!
//! ```
//! use solver_benchmark_testing::{builders::*, fixtures::*};
//!
//! let scenario = ScenarioBuilder::new()
//!     .with_solver("tabu-search")
//!     .with_problem("vrp-32")
//!     .with_trials(create_mixed_trials())
//!     .build();
//!
//! assert_eq!(scenario.trial_count(), 5);
//! ```

pub mod builders;
pub mod fixtures;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
