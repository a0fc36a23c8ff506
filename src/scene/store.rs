//! Scene store: per-kind collections kept sorted by identifier

use serde::Serialize;

use crate::core::types::{EntityKind, Identifier};
use crate::scene::entity::{Antenna, Entity, Structure, StructureKind};
use crate::scene::loader::LoadError;
use crate::spatial::geometry::Rect;

/// Entity counts by kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneSummary {
    pub buildings: usize,
    pub houses: usize,
    pub antennas: usize,
}

impl SceneSummary {
    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Building => self.buildings,
            EntityKind::House => self.houses,
            EntityKind::Antenna => self.antennas,
        }
    }

    pub fn total(&self) -> usize {
        self.buildings + self.houses + self.antennas
    }
}

/// All buildings, houses and antennas of one input stream
///
/// Each collection is held in ascending identifier order, whatever the
/// insertion order was, and identifiers are unique within a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    buildings: Vec<Structure>,
    houses: Vec<Structure>,
    antennas: Vec<Antenna>,
}

/// Insert `item` into `items` keeping it sorted by `id`. Returns false, leaving
/// the existing entry untouched, when the identifier is already present.
fn insert_sorted<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> &Identifier) -> bool {
    match items.binary_search_by(|entry| id(entry).cmp(id(&item))) {
        Ok(_) => false,
        Err(pos) => {
            items.insert(pos, item);
            true
        }
    }
}

fn find_sorted<'a, T>(items: &'a [T], key: &str, id: impl Fn(&T) -> &Identifier) -> Option<&'a T> {
    items
        .binary_search_by(|entry| id(entry).as_str().cmp(key))
        .ok()
        .map(|pos| &items[pos])
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert any decoded entity into its kind's collection
    pub fn insert(&mut self, entity: Entity) -> Result<(), LoadError> {
        match entity {
            Entity::Structure(s) => self.insert_structure(s),
            Entity::Antenna(a) => self.insert_antenna(a),
        }
    }

    pub fn insert_structure(&mut self, structure: Structure) -> Result<(), LoadError> {
        let kind = EntityKind::from(structure.kind);
        let id = structure.id.clone();
        let target = match structure.kind {
            StructureKind::Building => &mut self.buildings,
            StructureKind::House => &mut self.houses,
        };
        if insert_sorted(target, structure, |s| &s.id) {
            Ok(())
        } else {
            Err(LoadError::DuplicateIdentifier { kind, id })
        }
    }

    pub fn insert_antenna(&mut self, antenna: Antenna) -> Result<(), LoadError> {
        let id = antenna.id.clone();
        if insert_sorted(&mut self.antennas, antenna, |a| &a.id) {
            Ok(())
        } else {
            Err(LoadError::DuplicateIdentifier {
                kind: EntityKind::Antenna,
                id,
            })
        }
    }

    pub fn buildings(&self) -> &[Structure] {
        &self.buildings
    }

    pub fn houses(&self) -> &[Structure] {
        &self.houses
    }

    pub fn antennas(&self) -> &[Antenna] {
        &self.antennas
    }

    /// Buildings then houses, each in identifier order
    pub fn structures(&self) -> impl Iterator<Item = &Structure> {
        self.buildings.iter().chain(self.houses.iter())
    }

    pub fn get_building(&self, id: &str) -> Option<&Structure> {
        find_sorted(&self.buildings, id, |s| &s.id)
    }

    pub fn get_house(&self, id: &str) -> Option<&Structure> {
        find_sorted(&self.houses, id, |s| &s.id)
    }

    pub fn get_antenna(&self, id: &str) -> Option<&Antenna> {
        find_sorted(&self.antennas, id, |a| &a.id)
    }

    pub fn is_empty(&self) -> bool {
        self.buildings.is_empty() && self.houses.is_empty() && self.antennas.is_empty()
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            buildings: self.buildings.len(),
            houses: self.houses.len(),
            antennas: self.antennas.len(),
        }
    }

    /// Smallest rectangle enclosing every structure footprint and every
    /// antenna's square range, `None` for an empty scene
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::enclosing(
            self.structures()
                .map(Structure::footprint)
                .chain(self.antennas.iter().map(Antenna::range)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Point;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    fn building(name: &str, x: i64, y: i64, w: i64, h: i64) -> Structure {
        Structure::new(StructureKind::Building, id(name), Point::new(x, y), w, h)
    }

    fn house(name: &str, x: i64, y: i64, w: i64, h: i64) -> Structure {
        Structure::new(StructureKind::House, id(name), Point::new(x, y), w, h)
    }

    #[test]
    fn test_new_scene_is_empty() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.bounding_box(), None);
        assert_eq!(scene.summary().total(), 0);
    }

    #[test]
    fn test_insert_keeps_identifier_order() {
        let mut scene = Scene::new();
        for name in ["c", "a", "b"] {
            scene.insert_structure(building(name, 0, 0, 1, 1)).unwrap();
        }
        let ids: Vec<&str> = scene.buildings().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_identifier_rejected() {
        let mut scene = Scene::new();
        scene.insert_structure(building("b1", 0, 0, 1, 1)).unwrap();
        let err = scene.insert_structure(building("b1", 0, 0, 1, 1)).unwrap_err();
        assert!(matches!(
            err,
            LoadError::DuplicateIdentifier { kind: EntityKind::Building, .. }
        ));
        assert_eq!(scene.buildings().len(), 1);
    }

    #[test]
    fn test_duplicate_keeps_existing_entry() {
        let mut scene = Scene::new();
        scene.insert_antenna(Antenna::new(id("a"), Point::new(1, 1), 2)).unwrap();
        assert!(scene.insert_antenna(Antenna::new(id("a"), Point::new(9, 9), 5)).is_err());
        assert_eq!(scene.get_antenna("a").unwrap().position, Point::new(1, 1));
    }

    #[test]
    fn test_namespaces_are_per_kind() {
        let mut scene = Scene::new();
        scene.insert_structure(building("x", 0, 0, 1, 1)).unwrap();
        scene.insert_structure(house("x", 10, 10, 1, 1)).unwrap();
        scene.insert_antenna(Antenna::new(id("x"), Point::new(0, 0), 1)).unwrap();
        assert_eq!(scene.summary(), SceneSummary { buildings: 1, houses: 1, antennas: 1 });
        assert_eq!(scene.get_house("x").unwrap().center, Point::new(10, 10));
    }

    #[test]
    fn test_bounding_box_single_building() {
        let mut scene = Scene::new();
        scene.insert_structure(building("b1", 0, 0, 1, 1)).unwrap();
        assert_eq!(scene.bounding_box(), Some(Rect::new(-1, 1, -1, 1)));
    }

    #[test]
    fn test_bounding_box_includes_houses_and_antennas() {
        let mut scene = Scene::new();
        scene.insert_structure(building("b1", 0, 0, 1, 1)).unwrap();
        scene.insert_structure(house("h1", 10, 0, 2, 1)).unwrap();
        scene.insert_antenna(Antenna::new(id("a1"), Point::new(0, -5), 3)).unwrap();
        assert_eq!(scene.bounding_box(), Some(Rect::new(-3, 12, -8, 1)));
    }

    #[test]
    fn test_structures_lists_buildings_then_houses() {
        let mut scene = Scene::new();
        scene.insert_structure(house("a", 0, 0, 1, 1)).unwrap();
        scene.insert_structure(building("z", 5, 5, 1, 1)).unwrap();
        let kinds: Vec<StructureKind> = scene.structures().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StructureKind::Building, StructureKind::House]);
    }
}
