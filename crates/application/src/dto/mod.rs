//! Data Transfer Objects (DTOs) for report renderers
//!
//! DTOs are read-only projections of accumulated scenarios with scores
//! rendered as strings, so renderers never depend on the score type.

mod scenario;

pub use scenario::*;
