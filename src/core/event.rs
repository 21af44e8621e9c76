//! Input events delivered to the state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::arithmetic::Operator;

/// Errors raised when building events from raw symbols.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("'{0}' is not a decimal digit")]
    InvalidDigit(char),

    #[error("'{0}' is not an operator, expected one of + - * /")]
    InvalidOperator(String),
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        symbol
            .to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(InputError::InvalidDigit(symbol))
    }
}

impl TryFrom<u8> for Digit {
    type Error = InputError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(InputError::InvalidDigit(char::from(value)))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five kinds of input the calculator understands (digit and decimal
/// counted as entry events).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    Backspace,
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Digit(_) => "Digit",
            Self::Decimal => "Decimal",
            Self::Operator(_) => "Operator",
            Self::Equals => "Equals",
            Self::Clear => "Clear",
            Self::Backspace => "Backspace",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "Digit({d})"),
            Self::Operator(op) => write!(f, "Operator({op})"),
            other => f.write_str(other.name()),
        }
    }
}
