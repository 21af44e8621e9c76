//! The imperative shell around the pure core.
//!
//! [`Calculator`] owns one [`crate::core::CalculatorState`], feeds it events,
//! forwards display updates to a [`DisplaySink`] and logs what happened.
//! [`SharedCalculator`] puts a calculator behind a mutex for multi-threaded
//! hosts.

mod calculator;
mod display;
mod shared;

pub use calculator::Calculator;
pub use display::{DisplaySink, RecordingDisplay};
pub use shared::SharedCalculator;
