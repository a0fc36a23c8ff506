//! Text rendering of scene information for the command line

use crate::core::types::EntityKind;
use crate::coverage::QualityEntry;
use crate::scene::entity::{Antenna, Structure};
use crate::scene::store::{Scene, SceneSummary};
use crate::spatial::geometry::Rect;

fn counted(count: usize, kind: EntityKind) -> String {
    if count == 1 {
        format!("1 {}", kind.keyword())
    } else {
        format!("{} {}", count, kind.plural())
    }
}

/// `An empty scene`, or the non-zero counts by kind, e.g.
/// `A scene with 2 buildings, 1 house and 1 antenna`
pub fn summary_line(summary: &SceneSummary) -> String {
    let parts: Vec<String> = [EntityKind::Building, EntityKind::House, EntityKind::Antenna]
        .into_iter()
        .filter(|&kind| summary.count(kind) > 0)
        .map(|kind| counted(summary.count(kind), kind))
        .collect();
    match parts.as_slice() {
        [] => "An empty scene".to_string(),
        [only] => format!("A scene with {}", only),
        [init @ .., last] => format!("A scene with {} and {}", init.join(", "), last),
    }
}

pub fn bounding_box_line(bounding_box: Option<Rect>) -> String {
    match bounding_box {
        Some(r) => format!(
            "bounding box [{}, {}] x [{}, {}]",
            r.x_min, r.x_max, r.y_min, r.y_max
        ),
        None => "undefined (empty scene)".to_string(),
    }
}

pub fn structure_line(s: &Structure) -> String {
    format!(
        "  {} {} at {} {} with dimensions {} {}",
        s.kind, s.id, s.center.x, s.center.y, s.half_width, s.half_height
    )
}

pub fn antenna_line(a: &Antenna) -> String {
    format!(
        "  antenna {} at {} {} with range {}",
        a.id, a.position.x, a.position.y, a.radius
    )
}

/// Summary followed by every building, house and antenna
pub fn describe_lines(scene: &Scene) -> Vec<String> {
    std::iter::once(summary_line(&scene.summary()))
        .chain(scene.structures().map(structure_line))
        .chain(scene.antennas().iter().map(antenna_line))
        .collect()
}

pub fn quality_line(entry: &QualityEntry) -> String {
    format!("{} {}: {}", entry.kind, entry.id, entry.grade)
}
