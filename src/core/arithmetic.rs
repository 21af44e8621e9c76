//! Arithmetic engine: binary operations and the result-rounding policy.
//!
//! Everything here is pure. Division by zero is reported as a
//! [`ArithmeticError::DivisionByZero`] value instead of a panic or a
//! sentinel number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::event::InputError;

/// Number of decimal digits kept by the default rounding policy.
pub const DEFAULT_PRECISION: u32 = 7;

/// Largest precision accepted by [`Rounding`].
pub const MAX_PRECISION: u32 = 15;

// 2^52: at or above this magnitude an f64 has no fractional bits left.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0;

/// Errors produced by the arithmetic engine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArithmeticError {
    #[error("division by zero")]
    DivisionByZero,
}

/// One of the four binary operators.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The key symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(InputError::InvalidOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(InputError::InvalidOperator(s.to_string())),
        }
    }
}

pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`, refusing a zero divisor (either sign).
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::DivisionByZero);
    }
    Ok(a / b)
}

/// Apply `op` and round the result with the default policy.
///
/// # Example
///
/// ```rust
/// use abacus::core::{apply, ArithmeticError, Operator};
///
/// assert_eq!(apply(Operator::Add, 0.1, 0.2), Ok(0.3));
/// assert_eq!(apply(Operator::Divide, 1.0, 0.0), Err(ArithmeticError::DivisionByZero));
/// ```
pub fn apply(op: Operator, a: f64, b: f64) -> Result<f64, ArithmeticError> {
    apply_rounded(op, a, b, Rounding::default())
}

/// Apply `op` and round the result once with `rounding`.
pub fn apply_rounded(
    op: Operator,
    a: f64,
    b: f64,
    rounding: Rounding,
) -> Result<f64, ArithmeticError> {
    let raw = match op {
        Operator::Add => add(a, b),
        Operator::Subtract => subtract(a, b),
        Operator::Multiply => multiply(a, b),
        Operator::Divide => divide(a, b)?,
    };
    Ok(rounding.round(raw))
}

/// Rounding policy that suppresses floating-point representation noise.
///
/// A value is scaled by `10^digits`, rounded half toward positive infinity
/// and scaled back. Values too large to carry a fraction, and non-finite
/// values, pass through unchanged, so rounding is idempotent.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Rounding {
    digits: u32,
}

impl Rounding {
    /// Create a policy keeping `digits` decimal digits, capped at
    /// [`MAX_PRECISION`].
    pub fn new(digits: u32) -> Self {
        Self {
            digits: digits.min(MAX_PRECISION),
        }
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    pub fn round(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return value;
        }
        let factor = 10f64.powi(self.digits as i32);
        let scaled = value * factor;
        if scaled.abs() >= INTEGRAL_LIMIT {
            return value;
        }
        // A value already on the 10^-digits grid stays put, even when scaling
        // it back up lands a little off the integer it came from.
        let nearest = scaled.round();
        if [nearest - 1.0, nearest, nearest + 1.0]
            .iter()
            .any(|k| k / factor == value)
        {
            return value;
        }
        (scaled + 0.5).floor() / factor
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Self::new(DEFAULT_PRECISION)
    }
}

/// Round to seven decimal digits.
pub fn round7(value: f64) -> f64 {
    Rounding::default().round(value)
}

/// String form of a computed value as the display shows it.
///
/// Integral values carry no fraction, negative zero renders as `0`, and
/// non-finite values render as `Infinity`, `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Read a buffer or stored operand as a number.
///
/// Partial entries are accepted: `""`, `"."` and `"-"` read as zero, `"5."`
/// as five and `".5"` as one half. An `Infinity` or `NaN` result that was
/// edited further keeps its value (`"Infinity5"` is infinity). Text that
/// still fails to parse reads as zero.
pub fn parse_operand(text: &str) -> f64 {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let magnitude = match digits {
        "" => 0.0,
        _ if digits.starts_with("Infinity") => f64::INFINITY,
        _ if digits.starts_with("NaN") => f64::NAN,
        _ if digits.starts_with('.') => format!("0{digits}").parse().unwrap_or(0.0),
        _ => digits.parse().unwrap_or(0.0),
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}
