//! Solver Benchmark CLI Library
//!
//! Reads completed trial runs, accumulates every scenario and renders the
//! scenario statistics as a table, JSON or plain text.

pub mod commands;
pub mod input;
pub mod output;

pub use input::{BenchmarkInput, ScenarioInput};
pub use output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
