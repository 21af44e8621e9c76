//! Keyboard translation.
//!
//! Maps DOM-style key names onto calculator [`Event`]s. The mapping holds
//! no state; unrecognized keys map to `None`.

use crate::core::{Digit, Event, Operator};

/// Translate a key name into an event.
///
/// | Key | Event |
/// |---|---|
/// | `0`-`9` | `Digit` |
/// | `.` | `Decimal` |
/// | `+ - * /` | `Operator` |
/// | `Enter` | `Equals` |
/// | `Backspace` | `Backspace` |
/// | `c` / `C` | `Clear` |
///
/// # Example
///
/// ```rust
/// use abacus::core::{Event, Operator};
/// use abacus::keyboard::translate;
///
/// assert_eq!(translate("*"), Some(Event::Operator(Operator::Multiply)));
/// assert_eq!(translate("Enter"), Some(Event::Equals));
/// assert_eq!(translate("Shift"), None);
/// ```
pub fn translate(key: &str) -> Option<Event> {
    match key {
        "." => Some(Event::Decimal),
        "Enter" => Some(Event::Equals),
        "Backspace" => Some(Event::Backspace),
        "c" | "C" => Some(Event::Clear),
        _ => single_char(key).and_then(translate_char),
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn translate_char(symbol: char) -> Option<Event> {
    if let Ok(digit) = Digit::try_from(symbol) {
        return Some(Event::Digit(digit));
    }
    Operator::try_from(symbol).ok().map(Event::Operator)
}
