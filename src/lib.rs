//! Kover - scene loading, validation and antenna coverage grading

pub mod core;
pub mod coverage;
pub mod report;
pub mod scene;
pub mod spatial;
