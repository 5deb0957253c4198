//! Logging setup.
//!
//! Logs go to stderr so that reports printed on stdout stay machine-readable.

use crate::config::TelemetryConfig;
use anyhow::{Context, Result};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log_level` when it is set. Fails if the
/// filter does not parse or a subscriber is already installed.
///
/// # Examples
///
/// ```no_run
/// use solver_benchmark_common::telemetry::init_tracing;
///
/// init_tracing("solver-benchmark", false, "info").expect("Failed to initialize tracing");
/// ```
pub fn init_tracing(service_name: &str, json_format: bool, log_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level)
            .with_context(|| format!("Invalid log level filter '{}'", log_level))?,
    };

    let output = if json_format {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_current_span(true)
            .with_span_list(false)
            .boxed()
    } else {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_span_events(FmtSpan::CLOSE)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(output)
        .with(filter)
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!(service = service_name, json_format, "Tracing initialized");
    Ok(())
}

/// Install the global tracing subscriber from a telemetry section
pub fn init_from_config(config: &TelemetryConfig) -> Result<()> {
    init_tracing(&config.service_name, config.json_logging, &config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_subscriber_is_installed() {
        let first = init_tracing("test-service", false, "info");
        let second = init_from_config(&TelemetryConfig::default());
        assert!(first.is_err() || second.is_err());
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        // RUST_LOG would bypass the configured level
        if std::env::var_os("RUST_LOG").is_none() {
            let err = init_tracing("test-service", false, "solver=[").unwrap_err();
            assert!(err.to_string().contains("Invalid log level filter"));
        }
    }
}
