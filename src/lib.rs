//! Abacus: the input/display core of a four-function calculator
//!
//! Abacus follows the "pure core, imperative shell" split. The core turns a
//! stream of key events into display text with pure functions; the shell
//! owns the mutable instance, the display sink and logging.
//!
//! # Core Concepts
//!
//! - **Arithmetic**: `f64` operations with a single rounding pass per result
//! - **State machine**: `CalculatorState::transition` consumes an event and
//!   returns the next state plus any display update
//! - **Shell**: `Calculator` applies transitions and notifies a `DisplaySink`
//! - **Keyboard**: stateless mapping from key names to events
//!
//! # Example
//!
//! ```rust
//! use abacus::{Calculator, RecordingDisplay};
//!
//! let mut calc = Calculator::new(RecordingDisplay::new());
//! for key in ["5", "/", "0", "Enter"] {
//!     calc.on_key(key);
//! }
//! assert_eq!(calc.sink().current(), Some("Can't divide by 0!"));
//!
//! calc.on_key("3");
//! assert_eq!(calc.sink().current(), Some("3"));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod keyboard;
pub mod shell;

// Re-export commonly used types
pub use builder::CalculatorBuilder;
pub use config::{CalculatorConfig, ConfigError};
pub use core::{ArithmeticError, CalculatorState, Digit, Event, Operator, Phase};
pub use shell::{Calculator, DisplaySink, RecordingDisplay, SharedCalculator};
