//! Configuration management for benchmark aggregation.
//!
//! Settings are layered from configuration files and environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! [aggregation]
//! ranking = "score_then_time"
//!
//! [telemetry]
//! service_name = "solver-benchmark"
//! json_logging = false
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default)]
    pub aggregation: AggregationSettings,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Aggregation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationSettings {
    /// How trials of one scenario are ordered for ranking
    #[serde(default)]
    pub ranking: RankingStrategy,
}

/// Dominance order used to rank a scenario's trials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RankingStrategy {
    /// Higher score wins; equal scores tie
    #[default]
    Score,
    /// Higher score wins; equal scores are split by less time spent
    ScoreThenTime,
}

impl std::fmt::Display for RankingStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Score => write!(f, "score"),
            Self::ScoreThenTime => write!(f, "score_then_time"),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name for tracing
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: default_json_logging(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_service_name() -> String {
    "solver-benchmark".to_string()
}

fn default_json_logging() -> bool {
    false
}

fn default_log_level() -> String {
    "info".to_string()
}

impl BenchConfig {
    /// Load configuration from configuration files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from BENCH_ENV)
    /// 4. Environment variables (prefixed with BENCH__)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use solver_benchmark_common::config::BenchConfig;
    ///
    /// let config = BenchConfig::load().expect("Failed to load configuration");
    /// println!("Ranking trials by {}", config.aggregation.ranking);
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("BENCH_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Example: BENCH__AGGREGATION__RANKING=score_then_time
            .add_source(
                config::Environment::with_prefix("BENCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        Self::from_config(config)
    }

    /// Load configuration from one explicit file, without environment overrides
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self> {
        let bench_config: BenchConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        bench_config.validate()?;

        Ok(bench_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.telemetry.service_name.trim().is_empty() {
            anyhow::bail!("Telemetry service name must not be empty");
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }
}
