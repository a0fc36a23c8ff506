use thiserror::Error;

use crate::scene::loader::LoadError;
use crate::spatial::validation::ValidationError;

#[derive(Error, Debug)]
pub enum KoverError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl KoverError {
    /// Whether the failure came from geometric validation of a loaded scene
    pub fn is_validation(&self) -> bool {
        matches!(self, KoverError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, KoverError>;
