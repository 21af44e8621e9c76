//! Calculator configuration.
//!
//! Configuration is plain data: it deserializes from JSON with every field
//! optional, and [`CalculatorConfig::validate`] reports ALL broken rules at
//! once instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use abacus::config::CalculatorConfig;
//!
//! let config = CalculatorConfig::from_json(r#"{ "precision": 4 }"#).unwrap();
//! assert_eq!(config.precision, 4);
//! assert_eq!(config.division_by_zero_message, "Can't divide by 0!");
//! ```

pub mod error;

pub use error::{ConfigError, ConfigViolation};

use crate::core::{
    Rounding, Settings, DEFAULT_DIVISION_MESSAGE, DEFAULT_HISTORY_LIMIT, DEFAULT_PRECISION,
    MAX_PRECISION,
};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Tunable behaviour of a calculator instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Decimal digits kept when a result is rounded
    pub precision: u32,

    /// Text displayed when a calculation divides by zero
    pub division_by_zero_message: String,

    /// Phase transitions kept in memory for diagnostics
    pub history_limit: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            division_by_zero_message: DEFAULT_DIVISION_MESSAGE.to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validated()
    }

    /// Check every rule, accumulating all violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let checks = vec![
            check(
                self.precision <= MAX_PRECISION,
                ConfigViolation::PrecisionTooLarge {
                    found: self.precision,
                    max: MAX_PRECISION,
                },
            ),
            check(
                !self.division_by_zero_message.trim().is_empty(),
                ConfigViolation::EmptyDivisionMessage,
            ),
            check(self.history_limit > 0, ConfigViolation::ZeroHistoryLimit),
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Return the configuration if it passes validation.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(()) => Ok(self),
            Validation::Failure(violations) => Err(ConfigError::Invalid(
                violations.iter().cloned().collect(),
            )),
        }
    }

    /// Settings consumed by the pure state machine.
    pub fn settings(&self) -> Settings {
        Settings {
            rounding: Rounding::new(self.precision),
            division_by_zero_message: self.division_by_zero_message.clone(),
        }
    }
}

fn check(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}
