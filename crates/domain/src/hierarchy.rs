//! Benchmark hierarchy: scenarios grouped by solver configuration and by
//! problem instance.
//!
//! The hierarchy owns every scenario. Both groupings only hold scenario IDs,
//! and a scenario only holds its groupings' IDs, so there is no cyclic object
//! graph: links are restored through explicit registration calls.

use crate::errors::{HierarchyError, HierarchyResult};
use crate::identifiers::{ProblemGroupId, ScenarioId, SolverGroupId};
use crate::scenario::ScenarioAggregate;
use crate::score::Score;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scenarios sharing one solver configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverGroup {
    id: SolverGroupId,
    name: String,
    scenario_ids: Vec<ScenarioId>,
}

impl SolverGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SolverGroupId::new(),
            name: name.into(),
            scenario_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> SolverGroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered scenarios in registration order
    pub fn scenario_ids(&self) -> &[ScenarioId] {
        &self.scenario_ids
    }
}

/// Scenarios sharing one problem instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemGroup {
    id: ProblemGroupId,
    name: String,
    scenario_ids: Vec<ScenarioId>,
}

impl ProblemGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ProblemGroupId::new(),
            name: name.into(),
            scenario_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> ProblemGroupId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registered scenarios in registration order
    pub fn scenario_ids(&self) -> &[ScenarioId] {
        &self.scenario_ids
    }
}

/// Owner of all groupings and scenarios of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkHierarchy<S> {
    solvers: IndexMap<SolverGroupId, SolverGroup>,
    problems: IndexMap<ProblemGroupId, ProblemGroup>,
    scenarios: IndexMap<ScenarioId, ScenarioAggregate<S>>,
}

impl<S> Default for BenchmarkHierarchy<S> {
    fn default() -> Self {
        Self {
            solvers: IndexMap::new(),
            problems: IndexMap::new(),
            scenarios: IndexMap::new(),
        }
    }
}

impl<S: Score> BenchmarkHierarchy<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a solver configuration grouping
    pub fn add_solver(&mut self, name: impl Into<String>) -> SolverGroupId {
        let group = SolverGroup::new(name);
        let id = group.id();
        self.solvers.insert(id, group);
        id
    }

    /// Register a problem instance grouping
    pub fn add_problem(&mut self, name: impl Into<String>) -> ProblemGroupId {
        let group = ProblemGroup::new(name);
        let id = group.id();
        self.problems.insert(id, group);
        id
    }

    /// Create an empty scenario for the pair and register it in both groupings
    pub fn add_scenario(
        &mut self,
        solver_id: SolverGroupId,
        problem_id: ProblemGroupId,
    ) -> HierarchyResult<ScenarioId> {
        let solver = self.solver(solver_id)?;
        let problem = self.problem(problem_id)?;
        let scenario = ScenarioAggregate::new(solver, problem);
        self.register_scenario(scenario)
    }

    /// Take ownership of a prebuilt scenario and append it to both of its groupings
    pub fn register_scenario(&mut self, scenario: ScenarioAggregate<S>) -> HierarchyResult<ScenarioId> {
        let id = scenario.id();
        if self.scenarios.contains_key(&id) {
            return Err(HierarchyError::DuplicateScenario(id));
        }
        if !self.solvers.contains_key(&scenario.solver_group_id())
            || !self.problems.contains_key(&scenario.problem_group_id())
        {
            return Err(HierarchyError::ForeignScenario(id));
        }

        if let Some(solver) = self.solvers.get_mut(&scenario.solver_group_id()) {
            solver.scenario_ids.push(id);
        }
        if let Some(problem) = self.problems.get_mut(&scenario.problem_group_id()) {
            problem.scenario_ids.push(id);
        }
        self.scenarios.insert(id, scenario);
        Ok(id)
    }

    pub fn solver(&self, id: SolverGroupId) -> HierarchyResult<&SolverGroup> {
        self.solvers
            .get(&id)
            .ok_or(HierarchyError::SolverGroupNotFound(id))
    }

    pub fn problem(&self, id: ProblemGroupId) -> HierarchyResult<&ProblemGroup> {
        self.problems
            .get(&id)
            .ok_or(HierarchyError::ProblemGroupNotFound(id))
    }

    pub fn find_solver(&self, name: &str) -> Option<&SolverGroup> {
        self.solvers.values().find(|group| group.name() == name)
    }

    pub fn find_problem(&self, name: &str) -> Option<&ProblemGroup> {
        self.problems.values().find(|group| group.name() == name)
    }

    pub fn scenario(&self, id: ScenarioId) -> HierarchyResult<&ScenarioAggregate<S>> {
        self.scenarios
            .get(&id)
            .ok_or(HierarchyError::ScenarioNotFound(id))
    }

    pub fn scenario_mut(&mut self, id: ScenarioId) -> HierarchyResult<&mut ScenarioAggregate<S>> {
        self.scenarios
            .get_mut(&id)
            .ok_or(HierarchyError::ScenarioNotFound(id))
    }

    pub fn solvers(&self) -> impl Iterator<Item = &SolverGroup> {
        self.solvers.values()
    }

    pub fn problems(&self) -> impl Iterator<Item = &ProblemGroup> {
        self.problems.values()
    }

    /// All scenarios in registration order
    pub fn scenarios(&self) -> impl Iterator<Item = &ScenarioAggregate<S>> {
        self.scenarios.values()
    }

    pub fn scenarios_mut(&mut self) -> impl Iterator<Item = &mut ScenarioAggregate<S>> {
        self.scenarios.values_mut()
    }

    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    pub fn scenarios_for_solver(
        &self,
        id: SolverGroupId,
    ) -> HierarchyResult<impl Iterator<Item = &ScenarioAggregate<S>>> {
        let solver = self.solver(id)?;
        Ok(solver
            .scenario_ids
            .iter()
            .filter_map(move |scenario_id| self.scenarios.get(scenario_id)))
    }

    pub fn scenarios_for_problem(
        &self,
        id: ProblemGroupId,
    ) -> HierarchyResult<impl Iterator<Item = &ScenarioAggregate<S>>> {
        let problem = self.problem(id)?;
        Ok(problem
            .scenario_ids
            .iter()
            .filter_map(move |scenario_id| self.scenarios.get(scenario_id)))
    }
}
