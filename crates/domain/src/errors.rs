//! Error types for the benchmark aggregation domain.
//!
//! Only caller-side invariant violations are errors here. Failed trials,
//! all-failure scenarios and zero elapsed times are encoded in the data
//! (absent averages, zero counts) and never surface as an `Err`.

use crate::identifiers::*;

/// Top-level domain error type
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Aggregation lifecycle or precondition errors
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// Hierarchy registration or lookup errors
    #[error("Hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),
}

impl DomainError {
    /// Get the machine-readable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Aggregation(_) => "AGGREGATION_ERROR",
            Self::Hierarchy(_) => "HIERARCHY_ERROR",
        }
    }

    /// Check if this error is a programming error in the caller
    ///
    /// Fatal errors must abort the surrounding workflow; they are never
    /// retried or defaulted.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Aggregation(err) => err.is_fatal(),
            Self::Hierarchy(_) => false,
        }
    }
}

/// Aggregation-specific errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregationError {
    /// Statistics or representatives requested over zero trials
    #[error("Cannot aggregate scenario {scenario} with an empty trial list")]
    EmptyTrialList { scenario: String },

    /// `accumulate` was called a second time
    #[error("Scenario {scenario} has already been accumulated")]
    AlreadyAccumulated { scenario: String },

    /// A trial was appended after accumulation
    #[error("Scenario {scenario} is finalized; no more trials can be added")]
    ScenarioFinalized { scenario: String },

    /// Derived statistics were required but never computed
    #[error("Scenario {scenario} has not been accumulated")]
    NotAccumulated { scenario: String },

    /// Rank assignment does not cover the trial list
    #[error("Rank assignment covers {actual} trials, expected {expected}")]
    RankCountMismatch { expected: usize, actual: usize },

    /// A representative index points outside the trial list
    #[error("Representative index {index} out of range for {len} trials")]
    RepresentativeOutOfRange { index: usize, len: usize },
}

impl AggregationError {
    /// Whether this error signals a broken caller invariant
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::EmptyTrialList { .. }
                | Self::RankCountMismatch { .. }
                | Self::RepresentativeOutOfRange { .. }
        )
    }
}

/// Hierarchy-specific errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HierarchyError {
    /// Solver grouping not registered
    #[error("Solver group not found: {0}")]
    SolverGroupNotFound(SolverGroupId),

    /// Problem grouping not registered
    #[error("Problem group not found: {0}")]
    ProblemGroupNotFound(ProblemGroupId),

    /// Scenario not registered
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(ScenarioId),

    /// Scenario registered twice
    #[error("Duplicate scenario: {0}")]
    DuplicateScenario(ScenarioId),

    /// Scenario references groupings this hierarchy does not own
    #[error("Scenario {0} references groups outside this hierarchy")]
    ForeignScenario(ScenarioId),
}

/// Domain-wide result type
pub type DomainResult<T> = Result<T, DomainError>;

/// Aggregation result type
pub type AggregationResult<T> = Result<T, AggregationError>;

/// Hierarchy result type
pub type HierarchyResult<T> = Result<T, HierarchyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = DomainError::from(AggregationError::EmptyTrialList {
            scenario: "p_s".to_string(),
        });
        assert_eq!(err.error_code(), "AGGREGATION_ERROR");
        assert!(err.is_fatal());

        let err = DomainError::from(HierarchyError::ScenarioNotFound(ScenarioId::new()));
        assert_eq!(err.error_code(), "HIERARCHY_ERROR");
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_lifecycle_errors_are_not_fatal() {
        let err = AggregationError::AlreadyAccumulated {
            scenario: "p_s".to_string(),
        };
        assert!(!err.is_fatal());
        assert!(err.to_string().contains("p_s"));
    }
}
