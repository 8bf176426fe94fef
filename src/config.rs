use crate::error::ConfigError;
use serde::Deserialize;

/// Shortest input accepted by default, e.g. `1+1`.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// How raw input is split into symbol units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tokenization {
    /// Digit and decimal-point runs form one operand; whitespace separates tokens.
    #[default]
    Numbers,
    /// Legacy mode: strip all whitespace, then every character is its own token.
    /// `"12"` becomes the two operands `1` and `2`.
    Characters,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub tokenization: Tokenization,
    /// Inputs with fewer characters than this (after trimming) are rejected.
    pub min_length: usize,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            tokenization: Tokenization::default(),
            min_length: DEFAULT_MIN_LENGTH,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_tokenization(mut self, tokenization: Tokenization) -> Self {
        self.tokenization = tokenization;
        self
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Loads a config from JSON. Missing fields fall back to their defaults.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
