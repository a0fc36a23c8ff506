//! Validity outcome of a scene, ready for a caller to render

use super::{GeometricValidator, ValidationError};
use crate::scene::store::Scene;

/// Result of validating one scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// First violation found, `None` when the scene is valid
    pub error: Option<ValidationError>,
}

impl ValidationReport {
    pub fn for_scene(scene: &Scene) -> Self {
        match GeometricValidator::validate_scene(scene) {
            Ok(()) => {
                tracing::info!("scene is valid");
                Self { is_valid: true, error: None }
            }
            Err(error) => {
                tracing::info!(%error, "scene is invalid");
                Self { is_valid: false, error: Some(error) }
            }
        }
    }

    /// Error message of the first violation, if any
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
