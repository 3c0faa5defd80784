// src/generators/mod.rs
use thiserror::Error;

use crate::models::CharacterClass;

pub mod charset;
pub mod password;
pub mod random;
pub mod validation;

pub use password::PasswordGenerator;
pub use random::{RandomSource, RngSource};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("generated password has no {0}")]
    MissingClass(CharacterClass),

    #[error("generated password is {actual} characters long, expected {expected}")]
    LengthMismatch { actual: usize, expected: usize },

    #[error("password size {size} is too small, the requested constraints need at least {minimum} characters")]
    InvalidSize { size: usize, minimum: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
