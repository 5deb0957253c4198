//! Shared infrastructure for the solver benchmark tools.
//!
//! - Configuration management
//! - Logging setup

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AggregationSettings, BenchConfig, RankingStrategy, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
