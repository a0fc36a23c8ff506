//! Geometric validation of a loaded scene

mod geometric;
mod report;

pub use geometric::GeometricValidator;
pub use report::ValidationReport;

use std::fmt;
use thiserror::Error;

use crate::core::types::Identifier;
use crate::scene::entity::{Structure, StructureKind};

/// Kind and identifier of a structure named in a validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureRef {
    pub kind: StructureKind,
    pub id: Identifier,
}

impl From<&Structure> for StructureRef {
    fn from(s: &Structure) -> Self {
        Self {
            kind: s.kind,
            id: s.id.clone(),
        }
    }
}

impl fmt::Display for StructureRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

fn overlap_message(first: &StructureRef, second: &StructureRef) -> String {
    if first.kind == second.kind {
        let plural = crate::core::types::EntityKind::from(first.kind).plural();
        format!("{} {} and {} are overlapping", plural, first.id, second.id)
    } else {
        format!("{} and {} are overlapping", first, second)
    }
}

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{}", overlap_message(.first, .second))]
    OverlappingStructures { first: StructureRef, second: StructureRef },

    #[error("antennas {first} and {second} have the same position")]
    CoincidentAntennas { first: Identifier, second: Identifier },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sref(kind: StructureKind, id: &str) -> StructureRef {
        StructureRef {
            kind,
            id: Identifier::new(id).unwrap(),
        }
    }

    #[test]
    fn test_overlap_messages() {
        let same = ValidationError::OverlappingStructures {
            first: sref(StructureKind::Building, "b1"),
            second: sref(StructureKind::Building, "b2"),
        };
        assert_eq!(same.to_string(), "buildings b1 and b2 are overlapping");

        let mixed = ValidationError::OverlappingStructures {
            first: sref(StructureKind::Building, "b1"),
            second: sref(StructureKind::House, "h1"),
        };
        assert_eq!(mixed.to_string(), "building b1 and house h1 are overlapping");
    }

    #[test]
    fn test_antenna_message() {
        let err = ValidationError::CoincidentAntennas {
            first: Identifier::new("a1").unwrap(),
            second: Identifier::new("a2").unwrap(),
        };
        assert_eq!(err.to_string(), "antennas a1 and a2 have the same position");
    }
}
