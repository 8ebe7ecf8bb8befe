// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::{Result, ValidationError};
use crate::models::{CharClasses, PasswordGenerationOptions};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 64;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> Result<String> {
        self.generate(options.length, options.classes())
    }

    /// Draws `length` characters uniformly from the union of `classes`
    /// using the thread-local CSPRNG.
    pub fn generate(&self, length: usize, classes: CharClasses) -> Result<String> {
        self.generate_with_rng(length, classes, &mut rand::thread_rng())
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        length: usize,
        classes: CharClasses,
        rng: &mut R,
    ) -> Result<String> {
        validate(length, classes)?;

        let chars = classes.charset();
        let dist = Uniform::from(0..chars.len());

        Ok((0..length)
            .map(|_| chars[dist.sample(rng)] as char)
            .collect())
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects an empty class set for any length, then lengths outside the bound.
pub fn validate(length: usize, classes: CharClasses) -> Result<()> {
    if classes.is_empty() {
        return Err(ValidationError::NoCharacterClasses);
    }

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) {
        return Err(ValidationError::LengthOutOfRange {
            length,
            min: MIN_PASSWORD_LENGTH,
            max: MAX_PASSWORD_LENGTH,
        });
    }

    Ok(())
}

/// True when `password` could have come from `generate(length, classes)`.
pub fn is_valid_password(password: &str, length: usize, classes: CharClasses) -> bool {
    let charset = classes.charset();
    password.chars().count() == length
        && password
            .chars()
            .all(|c| c.is_ascii() && charset.contains(&(c as u8)))
}
