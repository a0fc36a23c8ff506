pub mod config;
pub mod error;
pub mod types;

pub use config::KoverConfig;
pub use error::{KoverError, Result};
pub use types::{EntityKind, Identifier, Point};
