//! Typed scene entities: rectangular structures and antennas

use serde::Serialize;

use crate::core::types::{EntityKind, Identifier, Point};
use crate::spatial::geometry::Rect;

/// Kind of a solid structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StructureKind {
    Building,
    House,
}

impl From<StructureKind> for EntityKind {
    fn from(kind: StructureKind) -> Self {
        match kind {
            StructureKind::Building => EntityKind::Building,
            StructureKind::House => EntityKind::House,
        }
    }
}

impl std::fmt::Display for StructureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&EntityKind::from(*self), f)
    }
}

/// A building or a house: an axis-aligned rectangle centered at `center`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Structure {
    pub kind: StructureKind,
    pub id: Identifier,
    pub center: Point,
    /// Half length along x, strictly positive
    pub half_width: i64,
    /// Half length along y, strictly positive
    pub half_height: i64,
}

impl Structure {
    pub fn new(
        kind: StructureKind,
        id: Identifier,
        center: Point,
        half_width: i64,
        half_height: i64,
    ) -> Self {
        Self { kind, id, center, half_width, half_height }
    }

    pub fn footprint(&self) -> Rect {
        Rect::centered(self.center, self.half_width, self.half_height)
    }

    pub fn corners(&self) -> [Point; 4] {
        self.footprint().corners()
    }

    pub fn overlaps(&self, other: &Structure) -> bool {
        self.footprint().overlaps(&other.footprint())
    }
}

/// A coverage source with a square range of half side `radius`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Antenna {
    pub id: Identifier,
    pub position: Point,
    /// Strictly positive
    pub radius: i64,
}

impl Antenna {
    pub fn new(id: Identifier, position: Point, radius: i64) -> Self {
        Self { id, position, radius }
    }

    /// Square bounding the antenna's circle of coverage
    pub fn range(&self) -> Rect {
        Rect::square(self.position, self.radius)
    }

    pub fn same_position(&self, other: &Antenna) -> bool {
        self.position == other.position
    }
}

/// Any entity decoded from a scene line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    Structure(Structure),
    Antenna(Antenna),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Structure(s) => s.kind.into(),
            Entity::Antenna(_) => EntityKind::Antenna,
        }
    }

    pub fn id(&self) -> &Identifier {
        match self {
            Entity::Structure(s) => &s.id,
            Entity::Antenna(a) => &a.id,
        }
    }
}
