// src/models.rs
use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::generators::GeneratorError;

/// Smallest password the generator accepts.
pub const MIN_PASSWORD_SIZE: usize = 4;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const NUMBERS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%&*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Number,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Number,
        CharacterClass::Special,
    ];

    /// The fixed alphabet characters of this class are drawn from.
    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Number => NUMBERS,
            CharacterClass::Special => SPECIAL,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        ch.is_ascii() && self.alphabet().contains(&(ch as u8))
    }

    /// Classifies a character by alphabet membership. Characters outside all
    /// four alphabets have no class.
    pub fn of(ch: char) -> Option<CharacterClass> {
        Self::ALL.into_iter().find(|class| class.contains(ch))
    }

    // Menu label
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Number => "Number",
            CharacterClass::Special => "Special Character",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase letter"),
            CharacterClass::Uppercase => write!(f, "uppercase letter"),
            CharacterClass::Number => write!(f, "number"),
            CharacterClass::Special => write!(f, "special character"),
        }
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRequest {
    pub size: usize,
    pub starts_with: CharacterClass,
    pub ends_with: CharacterClass,
    pub with_numbers: bool,
    pub with_special_chars: bool,
}

impl PasswordRequest {
    /// Whether `class` must appear at least once in the password. Letters are
    /// always required; numbers and special characters follow their flags.
    pub fn is_required(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase | CharacterClass::Uppercase => true,
            CharacterClass::Number => self.with_numbers,
            CharacterClass::Special => self.with_special_chars,
        }
    }

    /// Required classes not already claimed by the first or last character.
    pub fn unplaced_required_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|&class| class != self.starts_with && class != self.ends_with)
            .filter(|&class| self.is_required(class))
            .collect()
    }

    /// Smallest size that can hold both boundaries and one character of every
    /// unplaced required class.
    pub fn minimum_size(&self) -> usize {
        MIN_PASSWORD_SIZE.max(2 + self.unplaced_required_classes().len())
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        let minimum = self.minimum_size();
        if self.size < minimum {
            return Err(GeneratorError::InvalidSize {
                size: self.size,
                minimum,
            });
        }
        Ok(())
    }
}

/// A generated password. Immutable once returned by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
