// src/cli/handlers.rs
use anyhow::Context;
use console::style;
use serde::Serialize;

use crate::generators::{self, PasswordGenerator, RandomSource};
use crate::models::{Password, PasswordRequest};

#[derive(Debug, Serialize)]
pub struct GenerationResponse<'a> {
    /// Whether a password was produced
    pub success: bool,
    /// Generated password
    pub password: Option<&'a str>,
    /// The request as received
    pub request: &'a PasswordRequest,
    /// Error message (if generation failed)
    pub error: Option<String>,
}

/// Generates one password for `request` and prints the outcome. A
/// generation failure is printed as JSON in JSON mode and otherwise only
/// returned; `main` reports it on stderr.
pub fn handle_generate<S: RandomSource>(
    generator: &mut PasswordGenerator<S>,
    request: &PasswordRequest,
    json: bool,
) -> anyhow::Result<()> {
    log::debug!("Generating password for {:?}", request);

    let outcome = generator.generate(request);
    // Failures are reported once, by the caller
    if let Ok(password) = &outcome {
        log::info!("Generated a {}-character password", password.char_count());
    }

    if json {
        println!("{}", render_json(request, &outcome)?);
    } else if let Ok(password) = &outcome {
        println!("{}", render_plain(password));
    }

    outcome.map(|_| ()).context("could not generate password")
}

pub fn render_plain(password: &Password) -> String {
    format!("\n{} {}", style("Generated password:").bold(), style(password).green())
}

pub fn render_json(
    request: &PasswordRequest,
    outcome: &generators::Result<Password>,
) -> serde_json::Result<String> {
    let response = match outcome {
        Ok(password) => GenerationResponse {
            success: true,
            password: Some(password.as_str()),
            request,
            error: None,
        },
        Err(e) => GenerationResponse {
            success: false,
            password: None,
            request,
            error: Some(e.to_string()),
        },
    };
    serde_json::to_string_pretty(&response)
}
