//! End-to-end calculator sessions driven through the public API.

use abacus::core::{Digit, Event, Operator, Phase, DEFAULT_DIVISION_MESSAGE};
use abacus::{Calculator, CalculatorBuilder, RecordingDisplay, SharedCalculator};

fn calculator() -> Calculator<RecordingDisplay> {
    Calculator::new(RecordingDisplay::new())
}

fn digit(d: u8) -> Event {
    Event::Digit(Digit::new(d).unwrap())
}

fn send(calc: &mut Calculator<RecordingDisplay>, events: &[Event]) {
    for event in events {
        calc.handle(*event);
    }
}

fn keys(calc: &mut Calculator<RecordingDisplay>, keys: &[&str]) {
    for key in keys {
        calc.on_key(key);
    }
}

#[test]
fn chained_operation_displays_running_results() {
    let mut calc = calculator();
    send(
        &mut calc,
        &[
            Event::Clear,
            digit(1),
            digit(2),
            Event::Operator(Operator::Add),
            digit(7),
            Event::Operator(Operator::Subtract),
            digit(1),
            Event::Equals,
        ],
    );

    assert_eq!(calc.sink().current(), Some("18"));
    assert_eq!(
        calc.sink().updates(),
        ["0", "0", "1", "12", "7", "19", "1", "18"]
    );
}

#[test]
fn division_by_zero_then_fresh_digit() {
    let mut calc = calculator();
    send(
        &mut calc,
        &[
            Event::Clear,
            digit(5),
            Event::Operator(Operator::Divide),
            digit(0),
            Event::Equals,
        ],
    );
    assert_eq!(calc.sink().current(), Some(DEFAULT_DIVISION_MESSAGE));
    assert_eq!(calc.phase(), Phase::Error);

    calc.handle(digit(3));
    assert_eq!(calc.sink().current(), Some("3"));
    assert_eq!(calc.state().buffer(), "3");
}

#[test]
fn operator_first_treats_empty_entry_as_zero() {
    let mut calc = calculator();
    send(&mut calc, &[Event::Clear, Event::Operator(Operator::Add)]);

    let state = calc.state();
    assert_eq!(state.pending_operand(), Some("0"));
    assert_eq!(state.pending_operator(), Some(Operator::Add));
    assert!(state.is_awaiting_new_entry());

    send(&mut calc, &[digit(4), Event::Equals]);
    assert_eq!(calc.sink().current(), Some("4"));
}

#[test]
fn equals_without_operator_keeps_display() {
    let mut calc = calculator();
    send(&mut calc, &[Event::Clear, digit(9), Event::Equals]);
    assert_eq!(calc.sink().current(), Some("9"));
    assert_eq!(calc.sink().updates(), ["0", "0", "9"]);
}

#[test]
fn equals_right_after_operator_uses_entry_as_both_operands() {
    let mut calc = calculator();
    keys(&mut calc, &["c", "4", "+", "Enter"]);
    assert_eq!(calc.sink().current(), Some("8"));

    keys(&mut calc, &["c", "1", "2", "+", "7", "-", "Enter"]);
    assert_eq!(calc.sink().current(), Some("0"));
    assert_eq!(calc.phase(), Phase::ResultShown);
}

#[test]
fn backspace_after_operator_starts_empty_entry() {
    let mut calc = calculator();
    send(
        &mut calc,
        &[Event::Clear, digit(4), Event::Operator(Operator::Add), Event::Backspace],
    );
    assert_eq!(calc.sink().current(), Some("0"));
    assert_eq!(calc.state().pending_operand(), Some("4"));
}

#[test]
fn backspace_after_result_makes_it_editable() {
    let mut calc = calculator();
    keys(&mut calc, &["4", "*", "4", "Enter", "Backspace", "Backspace"]);
    assert_eq!(calc.sink().current(), Some("1"));
    assert_eq!(calc.state().buffer(), "1");
}

#[test]
fn keyboard_session_matches_button_session() {
    let mut by_keys = calculator();
    keys(&mut by_keys, &["C", "1", ".", "5", "*", "4", "Enter"]);

    let mut by_buttons = calculator();
    by_buttons.on_clear();
    by_buttons.on_digit(Digit::new(1).unwrap());
    by_buttons.on_decimal();
    by_buttons.on_digit(Digit::new(5).unwrap());
    by_buttons.on_operator(Operator::Multiply);
    by_buttons.on_digit(Digit::new(4).unwrap());
    by_buttons.on_equals();

    assert_eq!(by_keys.sink().updates(), by_buttons.sink().updates());
    assert_eq!(by_keys.sink().current(), Some("6"));
}

#[test]
fn floating_point_noise_is_rounded_away() {
    let mut calc = calculator();
    keys(&mut calc, &["0", ".", "1", "+", "0", ".", "2", "Enter"]);
    assert_eq!(calc.sink().current(), Some("0.3"));

    keys(&mut calc, &["c", "1", "/", "3", "Enter"]);
    assert_eq!(calc.sink().current(), Some("0.3333333"));
}

#[test]
fn negative_results_chain() {
    let mut calc = calculator();
    keys(&mut calc, &["3", "-", "8", "Enter", "*", "2", "Enter"]);
    assert_eq!(calc.sink().current(), Some("-10"));
}

#[test]
fn builder_configured_calculator() {
    let mut calc = CalculatorBuilder::new()
        .precision(3)
        .division_by_zero_message("Cannot divide by zero")
        .build(RecordingDisplay::new())
        .unwrap();

    keys(&mut calc, &["2", "/", "3", "+"]);
    assert_eq!(calc.sink().current(), Some("0.667"));

    keys(&mut calc, &["0", "/", "0", "/"]);
    assert_eq!(calc.sink().current(), Some("Cannot divide by zero"));
}

#[test]
fn shared_calculator_serializes_events() {
    let shared = SharedCalculator::new(calculator());
    for key in ["9", "-", "4", "Enter"] {
        assert!(shared.press_key(key));
    }
    let current = shared.with(|calc| calc.sink().current().map(String::from));
    assert_eq!(current.as_deref(), Some("5"));
}
