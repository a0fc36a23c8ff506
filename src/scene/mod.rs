//! Scene model: entities, line parsing and the sorted scene store

pub mod decode;
pub mod entity;
pub mod lexer;
pub mod loader;
pub mod store;

pub use entity::{Antenna, Entity, Structure, StructureKind};
pub use loader::{load_from_reader, load_from_str, LoadError, LoaderState, SceneLoader};
pub use store::{Scene, SceneSummary};
