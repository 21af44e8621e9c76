//! Builder API for ergonomic calculator construction.

mod calculator;

pub use calculator::CalculatorBuilder;
