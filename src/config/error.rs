//! Configuration error types.

use thiserror::Error;

/// A single rule a configuration broke.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("precision {found} exceeds the maximum of {max} digits")]
    PrecisionTooLarge { found: u32, max: u32 },

    #[error("division-by-zero message must not be empty")]
    EmptyDivisionMessage,

    #[error("history limit must be at least 1")]
    ZeroHistoryLimit,
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// Every rule the configuration broke, in check order
    #[error("Invalid configuration: {}", list(.0))]
    Invalid(Vec<ConfigViolation>),
}

fn list(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
