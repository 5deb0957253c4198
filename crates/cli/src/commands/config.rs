//! Config command

use anyhow::Result;

use crate::commands::CommandContext;
use crate::output::{JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Print the effective configuration
pub fn show(ctx: &CommandContext) -> Result<()> {
    println!("{}", render(ctx)?);
    Ok(())
}

pub fn render(ctx: &CommandContext) -> Result<String> {
    let config = &ctx.config;
    match ctx.format {
        OutputFormat::Json => JsonFormatter::format(config),
        OutputFormat::Plain => PlainFormatter::format(config),
        OutputFormat::Table => Ok(TableFormatter::key_value(vec![
            ("aggregation.ranking", config.aggregation.ranking.to_string()),
            ("telemetry.service_name", config.telemetry.service_name.clone()),
            ("telemetry.json_logging", config.telemetry.json_logging.to_string()),
            ("telemetry.log_level", config.telemetry.log_level.clone()),
        ])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_benchmark_common::BenchConfig;

    #[test]
    fn test_render_plain_config() {
        let ctx = CommandContext::new(BenchConfig::default(), OutputFormat::Plain);
        let rendered = render(&ctx).unwrap();
        assert!(rendered.contains("aggregation.ranking = score"));
        assert!(rendered.contains("telemetry.log_level = info"));
    }
}
