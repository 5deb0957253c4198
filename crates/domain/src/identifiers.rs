//! Strongly-typed identifier types for the benchmark result hierarchy.
//!
//! Scenarios and the two groupings that own them (by solver configuration and
//! by problem instance) are addressed by distinct ID types, so a scenario ID
//! can never be used where a grouping ID is expected.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Fresh time-ordered ID
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Display::fmt(&self.0, f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    ScenarioId,
    "Unique identifier for one (solver configuration, problem instance) scenario"
);

define_id!(
    SolverGroupId,
    "Unique identifier for the grouping of scenarios sharing a solver configuration"
);

define_id!(
    ProblemGroupId,
    "Unique identifier for the grouping of scenarios sharing a problem instance"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(ScenarioId::new(), ScenarioId::new());
    }

    #[test]
    fn test_id_from_string() {
        let id1 = SolverGroupId::new();
        let s = id1.to_string();
        let id2: SolverGroupId = s.parse().unwrap();
        assert_eq!(id1, id2);
    }

    #[test]
    fn test_id_serialization() {
        let id = ProblemGroupId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ProblemGroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types_share_uuid() {
        let uuid = Uuid::now_v7();
        let solver = SolverGroupId::from_uuid(uuid);
        let problem = ProblemGroupId::from_uuid(uuid);
        assert_eq!(solver.as_uuid(), problem.as_uuid());
    }
}
