//! Geometric validation: structure overlaps and antenna positions
//!
//! Pairs are visited in store order (`i < j`) and the first violation is
//! returned; nothing past it is checked.

use super::ValidationError;
use crate::scene::entity::{Antenna, Structure};
use crate::scene::store::Scene;

pub struct GeometricValidator;

impl GeometricValidator {
    /// Validate structure overlaps first, then antenna positions
    pub fn validate_scene(scene: &Scene) -> Result<(), ValidationError> {
        Self::validate_structures(scene)?;
        Self::validate_antennas(scene)
    }

    /// Check building/building, house/house, then building/house pairs
    pub fn validate_structures(scene: &Scene) -> Result<(), ValidationError> {
        let pair = Self::first_overlap_within(scene.buildings())
            .or_else(|| Self::first_overlap_within(scene.houses()))
            .or_else(|| Self::first_overlap_between(scene.buildings(), scene.houses()));
        match pair {
            Some((first, second)) => Err(ValidationError::OverlappingStructures {
                first: first.into(),
                second: second.into(),
            }),
            None => Ok(()),
        }
    }

    /// Check that no two antennas share the exact same position
    pub fn validate_antennas(scene: &Scene) -> Result<(), ValidationError> {
        match Self::first_pair(scene.antennas(), Antenna::same_position) {
            Some((first, second)) => Err(ValidationError::CoincidentAntennas {
                first: first.id.clone(),
                second: second.id.clone(),
            }),
            None => Ok(()),
        }
    }

    fn first_overlap_within(items: &[Structure]) -> Option<(&Structure, &Structure)> {
        Self::first_pair(items, Structure::overlaps)
    }

    fn first_overlap_between<'a>(
        left: &'a [Structure],
        right: &'a [Structure],
    ) -> Option<(&'a Structure, &'a Structure)> {
        left.iter()
            .flat_map(|l| right.iter().map(move |r| (l, r)))
            .find(|(l, r)| l.overlaps(r))
    }

    /// First pair `(items[i], items[j])`, `i < j`, satisfying `pred`
    fn first_pair<T>(items: &[T], pred: impl Fn(&T, &T) -> bool) -> Option<(&T, &T)> {
        items.iter().enumerate().find_map(|(i, a)| {
            items[i + 1..].iter().find(|&b| pred(a, b)).map(|b| (a, b))
        })
    }
}
