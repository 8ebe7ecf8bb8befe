// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A named subset of printable ASCII characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Canonical order used when building a character set.
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Lowercase => LOWERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    fn bit(self) -> u8 {
        match self {
            CharClass::Uppercase => 0b0001,
            CharClass::Lowercase => 0b0010,
            CharClass::Digit => 0b0100,
            CharClass::Symbol => 0b1000,
        }
    }
}

/// Set of enabled character classes. May be empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses(u8);

impl CharClasses {
    pub fn empty() -> Self {
        CharClasses(0)
    }

    #[cfg(test)]
    pub fn all() -> Self {
        CharClass::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn contains(&self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(move |class| self.contains(*class))
    }

    /// Concatenation of the enabled classes' characters, in canonical order.
    pub fn charset(&self) -> Vec<u8> {
        self.iter()
            .flat_map(|class| class.charset().bytes())
            .collect()
    }
}

impl FromIterator<CharClass> for CharClasses {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut classes = CharClasses::empty();
        for class in iter {
            classes.insert(class);
        }
        classes
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub fn classes(&self) -> CharClasses {
        let mut classes = CharClasses::empty();
        if self.include_uppercase {
            classes.insert(CharClass::Uppercase);
        }
        if self.include_lowercase {
            classes.insert(CharClass::Lowercase);
        }
        if self.include_numbers {
            classes.insert(CharClass::Digit);
        }
        if self.include_symbols {
            classes.insert(CharClass::Symbol);
        }
        classes
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}
