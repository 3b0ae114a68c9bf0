//! Runtime configuration read from the environment.

use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the output format
pub const OUTPUT_VAR: &str = "TICTACTOE_OUTPUT";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid TICTACTOE_OUTPUT value {0:?}: expected \"text\" or \"json\"")]
    InvalidOutput(String),
}

/// How input is read and output written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Typed commands in, rendered board out
    #[default]
    Text,
    /// One JSON message per line in both directions
    Json,
}

impl FromStr for OutputMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputMode::Text),
            "json" => Ok(OutputMode::Json),
            _ => Err(ConfigError::InvalidOutput(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub output: OutputMode,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup(OUTPUT_VAR) {
            Some(value) => value.parse()?,
            None => OutputMode::default(),
        };
        Ok(Self { output })
    }
}
