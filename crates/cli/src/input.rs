//! Trial input files
//!
//! ```json
//! {
//!   "scenarios": [
//!     {
//!       "solver": "tabu-search",
//!       "problem": "vrp-32",
//!       "trials": [
//!         {
//!           "index": 0,
//!           "outcome": { "status": "succeeded", "score": { "hard": 0, "soft": -120 } },
//!           "time_millis_spent": 30000,
//!           "calculate_count": 1200000
//!         },
//!         { "index": 1, "outcome": { "status": "failed" } }
//!       ]
//!     }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solver_benchmark_domain::{BenchmarkHierarchy, HardSoftScore, TrialResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Completed trials of every scenario in one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkInput {
    pub scenarios: Vec<ScenarioInput>,
}

/// Completed trials of one solver configuration against one problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub solver: String,
    pub problem: String,
    pub trials: Vec<TrialResult<HardSoftScore>>,
}

impl BenchmarkInput {
    /// Read and parse a JSON input file
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Failed to parse input file: {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let input: Self = serde_json::from_str(content).context("Invalid trial input")?;
        input.validate()?;
        Ok(input)
    }

    fn validate(&self) -> Result<()> {
        if self.scenarios.is_empty() {
            anyhow::bail!("Input contains no scenarios");
        }
        for scenario in &self.scenarios {
            if scenario.trials.is_empty() {
                anyhow::bail!(
                    "Scenario {}_{} has no trials",
                    scenario.problem,
                    scenario.solver
                );
            }
        }
        Ok(())
    }

    /// Build the hierarchy; solver and problem groups are shared by name
    pub fn into_hierarchy(self) -> Result<BenchmarkHierarchy<HardSoftScore>> {
        let mut hierarchy = BenchmarkHierarchy::new();

        for scenario in self.scenarios {
            let solver_id = match hierarchy.find_solver(&scenario.solver) {
                Some(group) => group.id(),
                None => hierarchy.add_solver(scenario.solver.clone()),
            };
            let problem_id = match hierarchy.find_problem(&scenario.problem) {
                Some(group) => group.id(),
                None => hierarchy.add_problem(scenario.problem.clone()),
            };
            let id = hierarchy.add_scenario(solver_id, problem_id)?;
            let aggregate = hierarchy.scenario_mut(id)?;
            for trial in scenario.trials {
                aggregate.push_trial(trial)?;
            }
            debug!(scenario = %aggregate.name(), trials = aggregate.trial_count(), "Scenario loaded");
        }

        Ok(hierarchy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"{
        "scenarios": [
            {
                "solver": "tabu",
                "problem": "vrp-32",
                "trials": [
                    { "index": 0, "outcome": { "status": "succeeded", "score": { "hard": 0, "soft": -10 } } },
                    { "index": 1, "outcome": { "status": "failed" } }
                ]
            },
            {
                "solver": "annealing",
                "problem": "vrp-32",
                "trials": [
                    { "index": 0, "outcome": { "status": "succeeded", "score": { "hard": -1, "soft": 0 }, "uninitialized_variable_count": 2 } }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_and_build_hierarchy() {
        let input = BenchmarkInput::from_json(INPUT).unwrap();
        let hierarchy = input.into_hierarchy().unwrap();

        assert_eq!(hierarchy.scenario_count(), 2);
        assert_eq!(hierarchy.problems().count(), 1);
        assert_eq!(hierarchy.solvers().count(), 2);

        let first = hierarchy.scenarios().next().unwrap();
        assert_eq!(first.name(), "vrp-32_tabu");
        assert!(first.trials()[1].has_failed());
    }

    #[test]
    fn test_scenario_without_trials_is_rejected() {
        let err = BenchmarkInput::from_json(
            r#"{ "scenarios": [ { "solver": "tabu", "problem": "vrp", "trials": [] } ] }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("vrp_tabu"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(BenchmarkInput::from_json(r#"{ "scenarios": [] }"#).is_err());
        assert!(BenchmarkInput::from_json("not json").is_err());
    }
}
