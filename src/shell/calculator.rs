//! Calculator that drives the pure state machine and talks to the display.

use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{
    CalculatorState, Digit, Event, Operator, Phase, PhaseHistory, PhaseTransition, Settings,
};
use crate::keyboard;
use crate::shell::display::DisplaySink;

/// One calculator instance.
///
/// Every event runs to completion before the next is accepted; all event
/// methods take `&mut self`. Use [`crate::shell::SharedCalculator`] to
/// share an instance across threads.
///
/// # Example
///
/// ```rust
/// use abacus::shell::{Calculator, RecordingDisplay};
///
/// let mut calc = Calculator::new(RecordingDisplay::new());
/// for key in ["1", "2", "+", "7", "-", "1", "Enter"] {
///     calc.on_key(key);
/// }
/// assert_eq!(calc.sink().current(), Some("18"));
/// ```
pub struct Calculator<D: DisplaySink> {
    id: Uuid,
    config: CalculatorConfig,
    settings: Settings,
    state: CalculatorState,
    history: PhaseHistory,
    sink: D,
}

impl<D: DisplaySink> Calculator<D> {
    /// Create a calculator with the default configuration.
    ///
    /// The display is set to `"0"` immediately.
    pub fn new(sink: D) -> Self {
        Self::from_parts(sink, CalculatorConfig::default())
    }

    /// Create a calculator after validating `config`.
    pub fn with_config(sink: D, config: CalculatorConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self::from_parts(sink, config))
    }

    fn from_parts(mut sink: D, config: CalculatorConfig) -> Self {
        let id = Uuid::new_v4();
        debug!(%id, precision = config.precision, "calculator created");
        sink.set_display("0");
        Self {
            id,
            settings: config.settings(),
            history: PhaseHistory::new(config.history_limit),
            config,
            state: CalculatorState::new(),
            sink,
        }
    }

    /// Process one event.
    pub fn handle(&mut self, event: Event) {
        let span = tracing::debug_span!("calculator", id = %self.id);
        let _entered = span.enter();

        let from = self.state.phase();
        let step = std::mem::take(&mut self.state).transition(event, &self.settings);
        self.state = step.state;
        let to = self.state.phase();

        if from != to {
            debug!(from = from.name(), to = to.name(), "phase changed");
            self.history = self.history.record(PhaseTransition {
                from,
                to,
                event,
                timestamp: chrono::Utc::now(),
            });
        }

        if let Some(text) = step.display {
            if let Some(error) = self.state.fault() {
                warn!(%error, %event, "calculation failed");
            } else if matches!(event, Event::Operator(_) | Event::Equals) {
                info!(result = %text, %event, "calculated");
            }
            self.sink.set_display(&text);
        }

        debug!(
            %event,
            phase = to.name(),
            buffer = self.state.buffer(),
            "handled event"
        );
    }

    pub fn on_digit(&mut self, digit: Digit) {
        self.handle(Event::Digit(digit));
    }

    pub fn on_decimal(&mut self) {
        self.handle(Event::Decimal);
    }

    pub fn on_operator(&mut self, op: Operator) {
        self.handle(Event::Operator(op));
    }

    pub fn on_equals(&mut self) {
        self.handle(Event::Equals);
    }

    pub fn on_clear(&mut self) {
        self.handle(Event::Clear);
    }

    pub fn on_backspace(&mut self) {
        self.handle(Event::Backspace);
    }

    /// Translate a key name and process it.
    ///
    /// Returns `false` when the key is not part of the keyboard mapping.
    pub fn on_key(&mut self, key: &str) -> bool {
        match keyboard::translate(key) {
            Some(event) => {
                self.handle(event);
                true
            }
            None => {
                trace!(id = %self.id, key, "ignored key");
                false
            }
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn history(&self) -> &PhaseHistory {
        &self.history
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn into_sink(self) -> D {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigViolation;
    use crate::shell::display::RecordingDisplay;

    fn press(calc: &mut Calculator<RecordingDisplay>, keys: &[&str]) {
        for key in keys {
            assert!(calc.on_key(key), "key {key:?} should be recognized");
        }
    }

    #[test]
    fn new_calculator_shows_zero() {
        let calc = Calculator::new(RecordingDisplay::new());
        assert_eq!(calc.sink().updates(), ["0"]);
        assert_eq!(calc.phase(), Phase::Empty);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn event_methods_drive_the_machine() {
        let mut calc = Calculator::new(RecordingDisplay::new());
        calc.on_digit(Digit::new(6).unwrap());
        calc.on_decimal();
        calc.on_digit(Digit::new(5).unwrap());
        calc.on_operator(Operator::Multiply);
        calc.on_digit(Digit::new(2).unwrap());
        calc.on_equals();

        assert_eq!(calc.sink().current(), Some("13"));
        assert_eq!(calc.phase(), Phase::ResultShown);

        calc.on_backspace();
        assert_eq!(calc.state().buffer(), "13");

        calc.on_clear();
        assert_eq!(calc.sink().current(), Some("0"));
        assert_eq!(calc.state(), &CalculatorState::new());
    }

    #[test]
    fn unknown_keys_do_not_touch_display() {
        let mut calc = Calculator::new(RecordingDisplay::new());
        assert!(!calc.on_key("Shift"));
        assert!(!calc.on_key("q"));
        assert_eq!(calc.sink().updates(), ["0"]);
    }

    #[test]
    fn silent_events_do_not_touch_display() {
        let mut calc = Calculator::new(RecordingDisplay::new());
        press(&mut calc, &["9", "Enter", "+"]);
        assert_eq!(calc.sink().updates(), ["0", "9"]);
    }

    #[test]
    fn history_records_phase_changes() {
        let mut calc = Calculator::new(RecordingDisplay::new());
        press(&mut calc, &["5", "/", "0", "Enter", "3"]);

        assert_eq!(
            calc.history().path(),
            vec![Phase::Empty, Phase::OperandPending, Phase::Error, Phase::Empty]
        );
        let events: Vec<Event> = calc.history().transitions().iter().map(|t| t.event).collect();
        assert_eq!(
            events,
            vec![
                Event::Operator(Operator::Divide),
                Event::Equals,
                Event::Digit(Digit::new(3).unwrap())
            ]
        );
    }

    #[test]
    fn history_respects_configured_limit() {
        let config = CalculatorConfig {
            history_limit: 2,
            ..CalculatorConfig::default()
        };
        let mut calc = Calculator::with_config(RecordingDisplay::new(), config).unwrap();
        press(&mut calc, &["1", "+", "2", "Enter", "+", "c"]);

        assert_eq!(calc.history().transitions().len(), 2);
    }

    #[test]
    fn configured_precision_and_message_apply() {
        let config = CalculatorConfig {
            precision: 2,
            division_by_zero_message: "Nope".to_string(),
            ..CalculatorConfig::default()
        };
        let mut calc = Calculator::with_config(RecordingDisplay::new(), config).unwrap();

        press(&mut calc, &["2", "/", "3", "Enter"]);
        assert_eq!(calc.sink().current(), Some("0.67"));

        press(&mut calc, &["/", "0", "Enter"]);
        assert_eq!(calc.sink().current(), Some("Nope"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = CalculatorConfig {
            history_limit: 0,
            ..CalculatorConfig::default()
        };
        let result = Calculator::with_config(RecordingDisplay::new(), config);
        match result {
            Err(ConfigError::Invalid(violations)) => {
                assert_eq!(violations, vec![ConfigViolation::ZeroHistoryLimit]);
            }
            _ => panic!("Expected invalid configuration"),
        }
    }

    #[test]
    fn instances_are_independent() {
        let mut first = Calculator::new(RecordingDisplay::new());
        let mut second = Calculator::new(RecordingDisplay::new());
        press(&mut first, &["4", "+"]);
        press(&mut second, &["7"]);

        assert_ne!(first.id(), second.id());
        assert_eq!(first.phase(), Phase::OperandPending);
        assert_eq!(second.phase(), Phase::Empty);
        assert_eq!(second.into_sink().current(), Some("7"));
    }
}
