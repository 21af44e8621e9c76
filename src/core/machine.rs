//! Input state machine.
//!
//! [`CalculatorState`] holds everything the calculator remembers between
//! events. [`CalculatorState::transition`] is a pure function: it consumes
//! the state and an [`Event`] and returns the next state together with the
//! text the display should show, if anything changes.

use serde::{Deserialize, Serialize};

use super::arithmetic::{
    apply_rounded, format_number, parse_operand, ArithmeticError, Operator, Rounding,
};
use super::event::Event;

/// Message shown when a calculation divides by zero, unless configured.
pub const DEFAULT_DIVISION_MESSAGE: &str = "Can't divide by 0!";

/// Display text shown after Clear and when the buffer empties.
const ZERO: &str = "0";

/// Settings the transition function reads but never changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub rounding: Rounding,
    pub division_by_zero_message: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rounding: Rounding::default(),
            division_by_zero_message: DEFAULT_DIVISION_MESSAGE.to_string(),
        }
    }
}

/// Coarse position of the machine, derived from its fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No operand committed; the buffer may hold an entry in progress.
    Empty,
    /// An operand and an operator are committed.
    OperandPending,
    /// A result from Equals is committed as the operand, with no operator.
    ResultShown,
    /// The division-by-zero message is displayed.
    Error,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::OperandPending => "OperandPending",
            Self::ResultShown => "ResultShown",
            Self::Error => "Error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// Outcome of one transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub state: CalculatorState,
    /// Text for the display, or `None` when the display is left untouched.
    pub display: Option<String>,
}

impl Step {
    fn show(state: CalculatorState, text: impl Into<String>) -> Self {
        Self {
            state,
            display: Some(text.into()),
        }
    }

    fn silent(state: CalculatorState) -> Self {
        Self {
            state,
            display: None,
        }
    }
}

/// Everything the calculator remembers between events.
///
/// # Example
///
/// ```rust
/// use abacus::core::{CalculatorState, Digit, Event, Operator, Settings};
///
/// let settings = Settings::default();
/// let digit = |d| Event::Digit(Digit::new(d).unwrap());
///
/// let state = CalculatorState::new()
///     .transition(digit(6), &settings)
///     .state
///     .transition(Event::Operator(Operator::Multiply), &settings)
///     .state
///     .transition(digit(7), &settings)
///     .state;
///
/// let step = state.transition(Event::Equals, &settings);
/// assert_eq!(step.display.as_deref(), Some("42"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    buffer: String,
    pending_operand: Option<String>,
    pending_operator: Option<Operator>,
    awaiting_new_entry: bool,
    fault: Option<ArithmeticError>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text currently being typed, or the string form of the last result.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// First operand of the current operation, in its raw textual form.
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending_operand.as_deref()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn is_awaiting_new_entry(&self) -> bool {
        self.awaiting_new_entry
    }

    /// The error raised by the previous event, if it raised one.
    pub fn fault(&self) -> Option<ArithmeticError> {
        self.fault
    }

    pub fn phase(&self) -> Phase {
        if self.fault.is_some() {
            return Phase::Error;
        }
        match (&self.pending_operand, self.pending_operator) {
            (None, _) => Phase::Empty,
            (Some(_), Some(_)) => Phase::OperandPending,
            (Some(_), None) => Phase::ResultShown,
        }
    }

    /// True once a second operand has been typed after an operator.
    fn has_fresh_entry(&self) -> bool {
        !self.awaiting_new_entry && !self.buffer.is_empty()
    }

    /// Advance the machine by one event.
    pub fn transition(mut self, event: Event, settings: &Settings) -> Step {
        self.fault = None;
        match event {
            Event::Digit(digit) => self.enter(digit.as_char()),
            Event::Decimal => self.enter('.'),
            Event::Operator(op) => self.press_operator(op, settings),
            Event::Equals => self.press_equals(settings),
            Event::Clear => Step::show(Self::new(), ZERO),
            Event::Backspace => self.press_backspace(),
        }
    }

    fn enter(mut self, symbol: char) -> Step {
        if self.awaiting_new_entry {
            self.buffer.clear();
            self.awaiting_new_entry = false;
        }

        if symbol == '.' && self.buffer.contains('.') {
            return Step::silent(self);
        }

        if self.buffer == ZERO && symbol != '.' {
            self.buffer.clear();
        }
        self.buffer.push(symbol);

        let text = self.display_text();
        Step::show(self, text)
    }

    fn press_operator(mut self, op: Operator, settings: &Settings) -> Step {
        let mut display = None;

        if self.pending_operand.is_none() {
            let operand = if self.buffer.is_empty() {
                ZERO.to_string()
            } else {
                self.buffer.clone()
            };
            self.pending_operand = Some(operand);
        } else if let Some(pending) = self.pending_operator.filter(|_| self.has_fresh_entry()) {
            let operand = self.pending_operand.as_deref().unwrap_or(ZERO);
            match calculate(pending, operand, &self.buffer, settings) {
                Ok(result) => {
                    self.pending_operand = Some(result.clone());
                    self.buffer = result.clone();
                    display = Some(result);
                }
                Err(error) => return self.fail(error, settings),
            }
        }

        self.pending_operator = Some(op);
        self.awaiting_new_entry = true;
        Step {
            state: self,
            display,
        }
    }

    fn press_equals(mut self, settings: &Settings) -> Step {
        let Some(pending) = self.pending_operator else {
            return Step::silent(self);
        };
        if self.pending_operand.is_none() || self.buffer.is_empty() {
            return Step::silent(self);
        }

        let operand = self.pending_operand.as_deref().unwrap_or(ZERO);
        match calculate(pending, operand, &self.buffer, settings) {
            Ok(result) => {
                self.pending_operand = Some(result.clone());
                self.pending_operator = None;
                self.buffer = result.clone();
                self.awaiting_new_entry = true;
                Step::show(self, result)
            }
            Err(error) => self.fail(error, settings),
        }
    }

    fn press_backspace(mut self) -> Step {
        if self.awaiting_new_entry {
            self.awaiting_new_entry = false;
            match (&self.pending_operand, self.pending_operator) {
                // A bare result is showing: make it editable again.
                (Some(operand), None) => self.buffer = operand.clone(),
                _ => self.buffer.clear(),
            }
        } else if self.buffer.pop().is_none() {
            return Step::silent(self);
        }

        let text = self.display_text();
        Step::show(self, text)
    }

    fn display_text(&self) -> String {
        if self.buffer.is_empty() {
            ZERO.to_string()
        } else {
            self.buffer.clone()
        }
    }

    /// Reset after an arithmetic error and show its message.
    fn fail(self, error: ArithmeticError, settings: &Settings) -> Step {
        let state = Self {
            awaiting_new_entry: true,
            fault: Some(error),
            ..Self::new()
        };
        Step::show(state, settings.division_by_zero_message.clone())
    }
}

fn calculate(
    op: Operator,
    operand: &str,
    entry: &str,
    settings: &Settings,
) -> Result<String, ArithmeticError> {
    let result = apply_rounded(
        op,
        parse_operand(operand),
        parse_operand(entry),
        settings.rounding,
    )?;
    Ok(format_number(result))
}
