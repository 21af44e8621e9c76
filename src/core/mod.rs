//! Pure calculator core.
//!
//! - Arithmetic on `f64` with a single rounding pass per result
//! - Input events and the validated `Digit` type
//! - The input state machine as a pure transition function
//! - Bounded phase history for diagnostics
//!
//! Nothing in this module performs I/O or logging; the shell in
//! [`crate::shell`] owns those concerns.

mod arithmetic;
mod event;
mod history;
mod machine;

pub use arithmetic::{
    add, apply, apply_rounded, divide, format_number, multiply, parse_operand, round7,
    subtract, ArithmeticError, Operator, Rounding, DEFAULT_PRECISION, MAX_PRECISION,
};
pub use event::{Digit, Event, InputError};
pub use history::{PhaseHistory, PhaseTransition, DEFAULT_HISTORY_LIMIT};
pub use machine::{CalculatorState, Phase, Settings, Step, DEFAULT_DIVISION_MESSAGE};
