// src/core/config.rs
use std::env;

use clap::ValueEnum;
use log::LevelFilter;

use crate::models::{CharacterClass, PasswordRequest};

// Defaults for the non-interactive generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_size: usize,
    pub default_starts_with: CharacterClass,
    pub default_ends_with: CharacterClass,
    pub default_with_numbers: bool,
    pub default_with_special: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_size: 16,
            default_starts_with: CharacterClass::Lowercase,
            default_ends_with: CharacterClass::Number,
            default_with_numbers: true,
            default_with_special: true,

            // Logging
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Log level alone, read before the logger exists so that `load` can
    /// report bad values through it.
    pub fn load_log_level() -> LevelFilter {
        Self::log_level_from_lookup(|key| env::var(key).ok())
    }

    pub fn log_level_from_lookup<F>(lookup: F) -> LevelFilter
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("LOG_LEVEL")
            .and_then(|level| parse_log_level(&level))
            .unwrap_or(Config::default().log_level)
    }

    /// Builds a config from any key/value lookup; unset or unparseable keys
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Password Generation
        if let Some(val) = lookup("PASSWORD_SIZE") {
            match val.trim().parse() {
                Ok(size) => config.default_size = size,
                Err(_) => log::warn!("Ignoring invalid PASSWORD_SIZE '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSWORD_STARTS_WITH") {
            match parse_class(&val) {
                Some(class) => config.default_starts_with = class,
                None => log::warn!("Ignoring invalid PASSWORD_STARTS_WITH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSWORD_ENDS_WITH") {
            match parse_class(&val) {
                Some(class) => config.default_ends_with = class,
                None => log::warn!("Ignoring invalid PASSWORD_ENDS_WITH '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSWORD_WITH_NUMBERS") {
            match val.trim().parse() {
                Ok(enabled) => config.default_with_numbers = enabled,
                Err(_) => log::warn!("Ignoring invalid PASSWORD_WITH_NUMBERS '{}'", val),
            }
        }

        if let Some(val) = lookup("PASSWORD_WITH_SPECIAL") {
            match val.trim().parse() {
                Ok(enabled) => config.default_with_special = enabled,
                Err(_) => log::warn!("Ignoring invalid PASSWORD_WITH_SPECIAL '{}'", val),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(filter) => config.log_level = filter,
                None => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        config
    }

    /// The request described by the configured defaults.
    pub fn default_request(&self) -> PasswordRequest {
        PasswordRequest {
            size: self.default_size,
            starts_with: self.default_starts_with,
            ends_with: self.default_ends_with,
            with_numbers: self.default_with_numbers,
            with_special_chars: self.default_with_special,
        }
    }
}

fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn parse_class(value: &str) -> Option<CharacterClass> {
    CharacterClass::from_str(value.trim(), true).ok()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_generation_defaults() {
        let config = config_from(&[
            ("PASSWORD_SIZE", "24"),
            ("PASSWORD_STARTS_WITH", "Uppercase"),
            ("PASSWORD_ENDS_WITH", "special"),
            ("PASSWORD_WITH_NUMBERS", "false"),
            ("PASSWORD_WITH_SPECIAL", "true"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(
            config.default_request(),
            PasswordRequest {
                size: 24,
                starts_with: CharacterClass::Uppercase,
                ends_with: CharacterClass::Special,
                with_numbers: false,
                with_special_chars: true,
            }
        );
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn log_level_is_readable_before_the_rest() {
        let level = |pairs: &[(&str, &str)]| {
            let vars: HashMap<String, String> = pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            Config::log_level_from_lookup(|key| vars.get(key).cloned())
        };

        assert_eq!(level(&[("LOG_LEVEL", " Info ")]), LevelFilter::Info);
        assert_eq!(level(&[("LOG_LEVEL", "loud"), ("PASSWORD_SIZE", "twelve")]), LevelFilter::Warn);
        assert_eq!(level(&[]), Config::default().log_level);
        assert_eq!(
            level(&[("LOG_LEVEL", "trace")]),
            config_from(&[("LOG_LEVEL", "trace")]).log_level
        );
    }

    #[test]
    fn invalid_values_keep_defaults() {
        let config = config_from(&[
            ("PASSWORD_SIZE", "twelve"),
            ("PASSWORD_STARTS_WITH", "emoji"),
            ("PASSWORD_WITH_NUMBERS", "maybe"),
            ("LOG_LEVEL", "loud"),
        ]);
        assert_eq!(config, Config::default());
    }
}
