//! Aggregation module - scenario statistics, ranking and representatives
//!
//! Once every trial of a scenario is known, the engine runs the stages in a
//! fixed order: aggregator, ranker, representative selector, standard
//! deviation. The merge coordinator is the alternate entry point used to
//! restore previously accumulated scenarios under a rebuilt hierarchy.

mod aggregator;
mod comparator;
mod deviation;
mod engine;
mod merge;
mod ranker;
mod representative;

pub use aggregator::*;
pub use comparator::*;
pub use deviation::*;
pub use engine::*;
pub use merge::*;
pub use ranker::*;
pub use representative::*;
