// src/generators/validation.rs
use crate::generators::{GeneratorError, Result};
use crate::models::{CharacterClass, PasswordRequest};

/// Fails with the first required class that `password` does not contain.
///
/// Lowercase and uppercase letters are always required. Numbers and special
/// characters are required only when the request enables them; a digit or
/// symbol in a password that does not require one is accepted.
pub fn check_required_classes(password: &str, request: &PasswordRequest) -> Result<()> {
    let mut has_lower = false;
    let mut has_upper = false;
    let mut has_number = false;
    let mut has_special = false;

    for ch in password.chars() {
        match CharacterClass::of(ch) {
            Some(CharacterClass::Lowercase) => has_lower = true,
            Some(CharacterClass::Uppercase) => has_upper = true,
            Some(CharacterClass::Number) => has_number = true,
            Some(CharacterClass::Special) => has_special = true,
            None => {}
        }
    }

    if !has_lower {
        return Err(GeneratorError::MissingClass(CharacterClass::Lowercase));
    }
    if !has_upper {
        return Err(GeneratorError::MissingClass(CharacterClass::Uppercase));
    }
    if request.with_numbers && !has_number {
        return Err(GeneratorError::MissingClass(CharacterClass::Number));
    }
    if request.with_special_chars && !has_special {
        return Err(GeneratorError::MissingClass(CharacterClass::Special));
    }

    Ok(())
}

/// Compares the character count (not the byte length) with `expected`.
pub fn check_length(password: &str, expected: usize) -> Result<()> {
    let actual = password.chars().count();
    if actual != expected {
        return Err(GeneratorError::LengthMismatch { actual, expected });
    }
    Ok(())
}
