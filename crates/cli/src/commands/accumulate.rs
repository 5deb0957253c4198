//! Accumulate command

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solver_benchmark_application::{AggregationEngine, ScenarioSummary};
use solver_benchmark_common::RankingStrategy;
use solver_benchmark_domain::HardSoftScore;
use std::path::Path;
use tracing::info;

use crate::commands::CommandContext;
use crate::input::BenchmarkInput;
use crate::output::{style, JsonFormatter, OutputFormat, TableFormatter};

/// Accumulated statistics of every scenario in an input file
#[derive(Debug, Serialize, Deserialize)]
pub struct AccumulationReport {
    pub ranking: RankingStrategy,
    pub scenarios: Vec<ScenarioSummary>,
}

/// Read trials from `input`, accumulate every scenario and print the report
pub fn run(ctx: &CommandContext, input: &Path, show_trials: bool) -> Result<()> {
    let report = execute(ctx, input)?;
    println!("{}", render(&report, ctx.format, show_trials)?);
    Ok(())
}

/// Build the report without printing it
pub fn execute(ctx: &CommandContext, input: &Path) -> Result<AccumulationReport> {
    let mut hierarchy = BenchmarkInput::from_path(input)?.into_hierarchy()?;

    let engine = AggregationEngine::<HardSoftScore>::from_settings(&ctx.config.aggregation);
    let accumulated = engine
        .accumulate_all(&mut hierarchy)
        .context("Failed to accumulate scenarios")?;
    info!(accumulated, comparator = engine.comparator_name(), "Input accumulated");

    let scenarios = hierarchy
        .scenarios()
        .map(ScenarioSummary::from_scenario)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AccumulationReport {
        ranking: ctx.config.aggregation.ranking,
        scenarios,
    })
}

/// Render the report in the requested format
pub fn render(report: &AccumulationReport, format: OutputFormat, show_trials: bool) -> Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter::format(report),
        OutputFormat::Table => Ok(render_table(report, show_trials)),
        OutputFormat::Plain => Ok(render_plain(report, show_trials)),
    }
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

fn render_table(report: &AccumulationReport, show_trials: bool) -> String {
    let mut out = vec![
        style::heading(&format!("Scenario statistics ({} scenarios)", report.scenarios.len())),
        style::note(&format!("Trials ranked by {}", report.ranking)),
    ];

    let headers = [
        "Scenario", "Average", "Std Dev", "Trials", "Failures", "Best", "Median", "Worst",
        "Time (ms)", "Calc/s",
    ];
    let rows = report
        .scenarios
        .iter()
        .map(|s| {
            vec![
                s.name.clone(),
                or_dash(s.average_score.as_deref()),
                or_dash(s.standard_deviation.as_deref()),
                s.trial_count.to_string(),
                s.failure_count.to_string(),
                format!("#{}", s.best_trial),
                format!("#{}", s.median_trial),
                format!("#{}", s.worst_trial),
                s.time_millis_spent.to_string(),
                s.average_calculate_count_per_second.to_string(),
            ]
        })
        .collect();
    out.push(TableFormatter::numeric(&headers, rows, 2));

    for scenario in &report.scenarios {
        if scenario.success_count == 0 {
            out.push(style::warn(&format!("{}: every trial failed", scenario.name)));
        } else if scenario.failure_count > 0 {
            out.push(style::warn(&format!(
                "{}: {} of {} trials failed",
                scenario.name, scenario.failure_count, scenario.trial_count
            )));
        } else if !scenario.feasible {
            out.push(style::warn(&format!("{}: average score is infeasible", scenario.name)));
        }
    }

    if show_trials {
        for scenario in &report.scenarios {
            out.push(String::new());
            out.push(style::heading(&scenario.name));
            let rows = scenario
                .trials
                .iter()
                .map(|t| {
                    vec![
                        format!("#{}", t.index),
                        if t.failed { "failed" } else { "succeeded" }.to_string(),
                        or_dash(t.score.as_deref()),
                        t.rank.map_or_else(|| "-".to_string(), |rank| rank.to_string()),
                        t.time_millis_spent.to_string(),
                        t.calculate_count_per_second.to_string(),
                    ]
                })
                .collect();
            out.push(TableFormatter::numeric(
                &["Trial", "Status", "Score", "Rank", "Time (ms)", "Calc/s"],
                rows,
                3,
            ));
        }
    }

    if report.scenarios.iter().all(|s| s.failure_count == 0) {
        out.push(style::ok("All trials succeeded"));
    }

    out.join("\n")
}

fn render_plain(report: &AccumulationReport, show_trials: bool) -> String {
    let mut lines = Vec::new();
    for s in &report.scenarios {
        lines.push(format!(
            "{}: average={} stddev={} trials={} failures={} best=#{} median=#{} worst=#{}",
            s.name,
            or_dash(s.average_score.as_deref()),
            or_dash(s.standard_deviation.as_deref()),
            s.trial_count,
            s.failure_count,
            s.best_trial,
            s.median_trial,
            s.worst_trial,
        ));
        if show_trials {
            for t in &s.trials {
                lines.push(format!(
                    "  #{} score={} rank={}",
                    t.index,
                    or_dash(t.score.as_deref()),
                    t.rank.map_or_else(|| "-".to_string(), |rank| rank.to_string()),
                ));
            }
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_benchmark_application::TrialSummary;

    fn report() -> AccumulationReport {
        AccumulationReport {
            ranking: RankingStrategy::Score,
            scenarios: vec![ScenarioSummary {
                id: "0".to_string(),
                name: "vrp-32_tabu".to_string(),
                solver: "tabu".to_string(),
                problem: "vrp-32".to_string(),
                trial_count: 2,
                success_count: 1,
                failure_count: 1,
                total_score: Some("0hard/-10soft".to_string()),
                average_score: Some("0hard/-10soft".to_string()),
                standard_deviation: Some("0.00/0.00".to_string()),
                uninitialized_solution_count: 0,
                infeasible_score_count: 0,
                feasible: true,
                best_trial: 0,
                median_trial: 1,
                worst_trial: 1,
                time_millis_spent: 5,
                calculate_count: 0,
                average_calculate_count_per_second: 0,
                used_memory_after_input_solution: None,
                winning_score_difference: None,
                worst_score_difference_percentage: None,
                trials: vec![
                    TrialSummary {
                        index: 0,
                        failed: false,
                        score: Some("0hard/-10soft".to_string()),
                        rank: Some(0),
                        winner: true,
                        time_millis_spent: 1000,
                        calculate_count_per_second: 70,
                    },
                    TrialSummary {
                        index: 1,
                        failed: true,
                        score: None,
                        rank: None,
                        winner: false,
                        time_millis_spent: 5,
                        calculate_count_per_second: 0,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_render_plain() {
        let rendered = render(&report(), OutputFormat::Plain, true).unwrap();
        assert!(rendered.starts_with("vrp-32_tabu: average=0hard/-10soft stddev=0.00/0.00"));
        assert!(rendered.contains("  #1 score=- rank=-"));
    }

    #[test]
    fn test_render_table_warns_about_failures() {
        colored::control::set_override(false);
        let rendered = render(&report(), OutputFormat::Table, false).unwrap();
        assert!(rendered.contains("vrp-32_tabu: 1 of 2 trials failed"));
        assert!(!rendered.contains("All trials succeeded"));
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&report(), OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["ranking"], "score");
        assert_eq!(value["scenarios"][0]["median_trial"], 1);
    }
}
