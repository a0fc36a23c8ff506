//! Antenna coverage quality of buildings and houses
//!
//! An antenna covers the square of half side `radius` around its position,
//! the same square it contributes to the scene's bounding box. A structure is
//! graded by how many of its four corners at least one antenna covers.

use serde::Serialize;
use std::fmt;

use crate::core::types::{Identifier, Point};
use crate::scene::entity::{Antenna, Structure, StructureKind};
use crate::scene::store::Scene;

pub use crate::spatial::geometry::Boundary;

/// Coverage quality, `A` (all four corners covered) down to `E` (none)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QualityGrade {
    A,
    B,
    C,
    D,
    E,
}

impl QualityGrade {
    /// Grade for a number of covered corners; counts above 4 saturate to `A`
    pub fn from_covered_corners(corners: usize) -> Self {
        match corners {
            0 => QualityGrade::E,
            1 => QualityGrade::D,
            2 => QualityGrade::C,
            3 => QualityGrade::B,
            _ => QualityGrade::A,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            QualityGrade::A => 'A',
            QualityGrade::B => 'B',
            QualityGrade::C => 'C',
            QualityGrade::D => 'D',
            QualityGrade::E => 'E',
        }
    }
}

impl fmt::Display for QualityGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Grade of one structure in a quality report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityEntry {
    pub kind: StructureKind,
    pub id: Identifier,
    pub covered_corners: usize,
    pub grade: QualityGrade,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverageEvaluator {
    pub boundary: Boundary,
}

impl CoverageEvaluator {
    pub fn new(boundary: Boundary) -> Self {
        Self { boundary }
    }

    pub fn is_point_covered(&self, point: Point, antennas: &[Antenna]) -> bool {
        antennas.iter().any(|a| a.range().contains(point, self.boundary))
    }

    /// Number of corners (0..=4) of `structure` covered by some antenna
    pub fn count_covered_corners(&self, structure: &Structure, antennas: &[Antenna]) -> usize {
        structure
            .corners()
            .into_iter()
            .filter(|&corner| self.is_point_covered(corner, antennas))
            .count()
    }

    pub fn grade(&self, structure: &Structure, antennas: &[Antenna]) -> QualityGrade {
        QualityGrade::from_covered_corners(self.count_covered_corners(structure, antennas))
    }

    /// Grades of every building then every house, in store order
    pub fn quality_report(&self, scene: &Scene) -> Vec<QualityEntry> {
        scene
            .structures()
            .map(|s| {
                let covered_corners = self.count_covered_corners(s, scene.antennas());
                let grade = QualityGrade::from_covered_corners(covered_corners);
                tracing::debug!(kind = %s.kind, id = %s.id, covered_corners, %grade, "graded structure");
                QualityEntry {
                    kind: s.kind,
                    id: s.id.clone(),
                    covered_corners,
                    grade,
                }
            })
            .collect()
    }
}
