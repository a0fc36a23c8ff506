//! Plane geometry and scene validation

pub mod geometry;
pub mod validation;

pub use geometry::{intervals_overlap, Boundary, Rect};
pub use validation::{GeometricValidator, ValidationError, ValidationReport};
