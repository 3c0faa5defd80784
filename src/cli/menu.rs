// src/cli/menu.rs
use std::fmt;

use console::style;
use inquire::error::InquireResult;
use inquire::{Confirm, Select, Text};

use crate::models::{CharacterClass, PasswordRequest, MIN_PASSWORD_SIZE};

/// Select option showing the menu label of a class.
#[derive(Debug, Clone, Copy)]
struct ClassOption(CharacterClass);

impl fmt::Display for ClassOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.label())
    }
}

/// Asks for every field of a request. Sizes below the minimum are re-asked
/// right away; limits that depend on the chosen classes are left to the
/// generator.
pub fn prompt_request() -> InquireResult<PasswordRequest> {
    let size = prompt_size()?;
    let starts_with = prompt_class("Your password should start with?")?;
    let ends_with = prompt_class("Your password should end with?")?;

    let with_numbers = Confirm::new("Should the password contain numbers?")
        .with_default(true)
        .prompt()?;

    let with_special_chars = Confirm::new("Should the password contain special characters?")
        .with_default(true)
        .prompt()?;

    Ok(PasswordRequest {
        size,
        starts_with,
        ends_with,
        with_numbers,
        with_special_chars,
    })
}

fn prompt_size() -> InquireResult<usize> {
    loop {
        let input = Text::new("What's the size of the new password?").prompt()?;
        match check_size(&input) {
            Ok(size) => return Ok(size),
            Err(message) => println!("{}", style(message).red()),
        }
    }
}

fn prompt_class(message: &str) -> InquireResult<CharacterClass> {
    let options: Vec<ClassOption> = CharacterClass::ALL.into_iter().map(ClassOption).collect();
    let selected = Select::new(message, options).prompt()?;
    Ok(selected.0)
}

pub fn check_size(input: &str) -> Result<usize, String> {
    match parse_size(input) {
        Some(size) if size >= MIN_PASSWORD_SIZE => Ok(size),
        Some(_) => Err(format!("Minimum password size is {}", MIN_PASSWORD_SIZE)),
        None => Err("Please enter a number".to_string()),
    }
}

// Digits only; no sign, no whitespace inside
pub fn parse_size(input: &str) -> Option<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(12))]
    #[case(" 8\n", Some(8))]
    #[case("0", Some(0))]
    #[case("", None)]
    #[case("-4", None)]
    #[case("+4", None)]
    #[case("4.5", None)]
    #[case("ten", None)]
    #[case("99999999999999999999999999", None)]
    fn size_input(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(parse_size(input), expected);
    }

    #[rstest]
    #[case("4", Ok(4))]
    #[case("32", Ok(32))]
    #[case("3", Err("Minimum password size is 4"))]
    #[case("0", Err("Minimum password size is 4"))]
    #[case("abc", Err("Please enter a number"))]
    fn size_prompt_answer(#[case] input: &str, #[case] expected: Result<usize, &str>) {
        assert_eq!(check_size(input), expected.map_err(str::to_string));
    }

    #[test]
    fn prompt_request_yields_inquire_result() {
        let prompt: fn() -> InquireResult<PasswordRequest> = prompt_request;
        let _ = prompt;
    }

    #[test]
    fn options_use_menu_labels() {
        let labels: Vec<String> = CharacterClass::ALL
            .into_iter()
            .map(|class| ClassOption(class).to_string())
            .collect();
        assert_eq!(labels, ["Lowercase", "Uppercase", "Number", "Special Character"]);
    }
}
