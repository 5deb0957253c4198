//! CLI commands

pub mod accumulate;
pub mod config;

use crate::output::OutputFormat;
use solver_benchmark_common::BenchConfig;

/// Context passed to all commands
pub struct CommandContext {
    pub config: BenchConfig,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(config: BenchConfig, format: OutputFormat) -> Self {
        Self { config, format }
    }
}
