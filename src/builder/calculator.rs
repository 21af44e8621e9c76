//! Builder for constructing calculators.

use crate::config::{CalculatorConfig, ConfigError};
use crate::shell::{Calculator, DisplaySink};

/// Builder for constructing calculators with a fluent API.
///
/// Settings not given keep their [`CalculatorConfig::default`] values.
/// Validation happens once, in [`CalculatorBuilder::build`], and reports
/// every broken rule at the same time.
#[derive(Clone, Debug, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the number of decimal digits results are rounded to.
    pub fn precision(mut self, digits: u32) -> Self {
        self.config.precision = digits;
        self
    }

    /// Set the text displayed on division by zero.
    pub fn division_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.config.division_by_zero_message = message.into();
        self
    }

    /// Set how many phase transitions are kept in memory.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    /// Build the calculator, attaching it to `sink`.
    pub fn build<D: DisplaySink>(self, sink: D) -> Result<Calculator<D>, ConfigError> {
        Calculator::with_config(sink, self.config)
    }
}
