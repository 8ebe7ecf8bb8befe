// src/generators/mod.rs
use thiserror::Error;

mod password;
mod strength;

pub use password::{
    is_valid_password, validate, PasswordGenerator, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use strength::{analyze_password_strength, strength_feedback, StrengthBand};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Password length must be between {min} and {max} characters")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("At least one character type must be included")]
    NoCharacterClasses,
}

pub type Result<T> = std::result::Result<T, ValidationError>;
