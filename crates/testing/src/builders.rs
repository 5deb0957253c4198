//! Fluent builder pattern for constructing test data.

use solver_benchmark_domain::{
    BenchmarkHierarchy, ProblemGroup, ScenarioAggregate, ScenarioId, Score,
    ScoreDifferencePercentage, SimpleScore, SolverGroup, TrialResult,
};

/// Builder for creating TrialResult test instances
#[derive(Clone)]
pub struct TrialBuilder<S> {
    index: usize,
    score: Option<S>,
    uninitialized_variable_count: u64,
    time_millis_spent: u64,
    calculate_count: u64,
    used_memory_after_input_solution: Option<u64>,
    winning_score_difference: Option<S>,
    worst_score_difference_percentage: Option<ScoreDifferencePercentage>,
}

impl<S: Score> TrialBuilder<S> {
    /// A succeeded trial with realistic resource figures
    pub fn succeeded(index: usize, score: S) -> Self {
        Self {
            index,
            score: Some(score),
            uninitialized_variable_count: 0,
            time_millis_spent: 1_000,
            calculate_count: 50_000,
            used_memory_after_input_solution: None,
            winning_score_difference: None,
            worst_score_difference_percentage: None,
        }
    }

    pub fn failed(index: usize) -> Self {
        Self {
            index,
            score: None,
            uninitialized_variable_count: 0,
            time_millis_spent: 10,
            calculate_count: 0,
            used_memory_after_input_solution: None,
            winning_score_difference: None,
            worst_score_difference_percentage: None,
        }
    }

    pub fn with_uninitialized_variable_count(mut self, count: u64) -> Self {
        self.uninitialized_variable_count = count;
        self
    }

    pub fn with_time_millis_spent(mut self, millis: u64) -> Self {
        self.time_millis_spent = millis;
        self
    }

    pub fn with_calculate_count(mut self, count: u64) -> Self {
        self.calculate_count = count;
        self
    }

    pub fn with_used_memory(mut self, bytes: u64) -> Self {
        self.used_memory_after_input_solution = Some(bytes);
        self
    }

    pub fn with_winning_score_difference(mut self, difference: S) -> Self {
        self.winning_score_difference = Some(difference);
        self
    }

    pub fn with_worst_score_difference_percentage(mut self, levels: Vec<f64>) -> Self {
        self.worst_score_difference_percentage = Some(ScoreDifferencePercentage::new(levels));
        self
    }

    pub fn build(self) -> TrialResult<S> {
        let mut trial = match self.score {
            Some(score) => TrialResult::succeeded(self.index, score)
                .with_uninitialized_variable_count(self.uninitialized_variable_count),
            None => TrialResult::failed(self.index),
        };
        trial = trial
            .with_time_millis_spent(self.time_millis_spent)
            .with_calculate_count(self.calculate_count);
        if let Some(bytes) = self.used_memory_after_input_solution {
            trial = trial.with_used_memory_after_input_solution(bytes);
        }
        if let Some(difference) = self.winning_score_difference {
            trial = trial.with_winning_score_difference(difference);
        }
        if let Some(percentage) = self.worst_score_difference_percentage {
            trial = trial.with_worst_score_difference_percentage(percentage);
        }
        trial
    }
}

/// Builder for creating standalone ScenarioAggregate test instances
pub struct ScenarioBuilder<S> {
    solver: String,
    problem: String,
    trials: Vec<TrialResult<S>>,
}

impl<S: Score> ScenarioBuilder<S> {
    pub fn new() -> Self {
        Self {
            solver: "test-solver".to_string(),
            problem: "test-problem".to_string(),
            trials: Vec::new(),
        }
    }

    pub fn with_solver(mut self, name: impl Into<String>) -> Self {
        self.solver = name.into();
        self
    }

    pub fn with_problem(mut self, name: impl Into<String>) -> Self {
        self.problem = name.into();
        self
    }

    pub fn with_trial(mut self, trial: TrialResult<S>) -> Self {
        self.trials.push(trial);
        self
    }

    pub fn with_trials(mut self, trials: impl IntoIterator<Item = TrialResult<S>>) -> Self {
        self.trials.extend(trials);
        self
    }

    /// Build the scenario with every trial appended; it is not accumulated
    pub fn build(self) -> ScenarioAggregate<S> {
        let mut scenario =
            ScenarioAggregate::new(&SolverGroup::new(self.solver), &ProblemGroup::new(self.problem));
        for trial in self.trials {
            scenario
                .push_trial(trial)
                .expect("fresh scenario accepts trials");
        }
        scenario
    }
}

impl<S: Score> Default for ScenarioBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder<SimpleScore> {
    /// Append one succeeded trial per score, indexed in order
    pub fn with_simple_scores(mut self, scores: &[i64]) -> Self {
        let offset = self.trials.len();
        self.trials.extend(
            scores
                .iter()
                .enumerate()
                .map(|(i, &score)| TrialResult::succeeded(offset + i, SimpleScore(score))),
        );
        self
    }
}

/// Builder for creating BenchmarkHierarchy test instances
pub struct HierarchyBuilder<S> {
    scenarios: Vec<(String, String, Vec<TrialResult<S>>)>,
}

impl<S: Score> HierarchyBuilder<S> {
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    /// Add a scenario; solver and problem groups are shared by name
    pub fn with_scenario(
        mut self,
        solver: impl Into<String>,
        problem: impl Into<String>,
        trials: Vec<TrialResult<S>>,
    ) -> Self {
        self.scenarios.push((solver.into(), problem.into(), trials));
        self
    }

    /// Build the hierarchy and return the scenario IDs in insertion order
    pub fn build(self) -> (BenchmarkHierarchy<S>, Vec<ScenarioId>) {
        let mut hierarchy = BenchmarkHierarchy::new();
        let mut ids = Vec::with_capacity(self.scenarios.len());

        for (solver, problem, trials) in self.scenarios {
            let solver_id = match hierarchy.find_solver(&solver) {
                Some(group) => group.id(),
                None => hierarchy.add_solver(solver),
            };
            let problem_id = match hierarchy.find_problem(&problem) {
                Some(group) => group.id(),
                None => hierarchy.add_problem(problem),
            };
            let id = hierarchy
                .add_scenario(solver_id, problem_id)
                .expect("groups were just registered");
            let scenario = hierarchy
                .scenario_mut(id)
                .expect("scenario was just registered");
            for trial in trials {
                scenario
                    .push_trial(trial)
                    .expect("fresh scenario accepts trials");
            }
            ids.push(id);
        }

        (hierarchy, ids)
    }
}

impl<S: Score> Default for HierarchyBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solver_benchmark_domain::HardSoftScore;

    #[test]
    fn test_trial_builder() {
        let trial = TrialBuilder::succeeded(2, HardSoftScore::of(0, -4))
            .with_uninitialized_variable_count(1)
            .with_used_memory(2048)
            .build();

        assert_eq!(trial.index(), 2);
        assert_eq!(trial.uninitialized_variable_count(), Some(1));
        assert_eq!(trial.used_memory_after_input_solution(), Some(2048));
        assert_eq!(trial.time_millis_spent(), 1_000);

        let failed = TrialBuilder::<HardSoftScore>::failed(0).build();
        assert!(failed.has_failed());
    }

    #[test]
    fn test_hierarchy_builder_shares_groups() {
        let (hierarchy, ids) = HierarchyBuilder::<SimpleScore>::new()
            .with_scenario("tabu", "vrp", vec![TrialResult::failed(0)])
            .with_scenario("tabu", "tsp", vec![TrialResult::failed(0)])
            .build();

        assert_eq!(ids.len(), 2);
        assert_eq!(hierarchy.solvers().count(), 1);
        assert_eq!(hierarchy.problems().count(), 2);
    }
}
