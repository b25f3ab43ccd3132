//! # Domain Types
//!
//! Input and output types of the calculator engine.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   INPUT (one per button press)          OUTPUT (after every press)      │
//! │                                                                         │
//! │  ┌─────────────────┐                   ┌─────────────────────────┐      │
//! │  │     Event       │                   │       Snapshot          │      │
//! │  │  ─────────────  │                   │  ─────────────────────  │      │
//! │  │  Digit(Digit)   │                   │  display      "12.5"    │      │
//! │  │  DecimalPoint   │ ── dispatch ──►   │  summary      "3 +"     │      │
//! │  │  Clear          │                   │  pendingOperator        │      │
//! │  │  Backspace      │                   │  awaitingFreshOperand   │      │
//! │  │  Operator(op)   │                   └─────────────────────────┘      │
//! │  │  Equals         │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Operator     │   │    KeyKind      │  (styling category only)     │
//! │  │  Add      +     │   │  Number         │                              │
//! │  │  Subtract -     │   │  Operator       │                              │
//! │  │  Multiply *     │   │  Special        │                              │
//! │  │  Divide   /     │   │  Equals         │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Operator
// =============================================================================

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown in the summary line.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CoreError;

    /// Parses an operator symbol, accepting the glyphs keypads print
    /// (`×`, `÷`, `−`) as well as the ASCII forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Operator::Add),
            "-" | "−" => Ok(Operator::Subtract),
            "*" | "x" | "X" | "×" => Ok(Operator::Multiply),
            "/" | "÷" => Ok(Operator::Divide),
            other => Err(CoreError::InvalidOperator(other.to_string())),
        }
    }
}

// =============================================================================
// Digit
// =============================================================================

/// A single decimal digit, `0` through `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, as = "u8")]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value.
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value <= 9 {
            Ok(Digit(value))
        } else {
            Err(CoreError::InvalidDigit(value.to_string()))
        }
    }

    /// Returns the numeric value.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Returns the digit as the character it appends to the display.
    #[inline]
    pub const fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CoreError::InvalidDigit(c.to_string()))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Digit::new(value)
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// =============================================================================
// Key Kind
// =============================================================================

/// Button category, used by presentation layers to pick a style.
///
/// Has no effect on engine behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    Number,
    Operator,
    Special,
    Equals,
}

// =============================================================================
// Event
// =============================================================================

/// One discrete input event.
///
/// ## Serialization
/// Adjacently tagged so a web keypad can send
/// `{ "kind": "digit", "value": 7 }` or `{ "kind": "operator", "value": "add" }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Event {
    Digit(Digit),
    DecimalPoint,
    Clear,
    Backspace,
    Operator(Operator),
    Equals,
}

impl Event {
    /// Shorthand for a digit event from a character.
    pub fn digit(c: char) -> Result<Self, CoreError> {
        Digit::try_from(c).map(Event::Digit)
    }

    /// The styling category of the key that produces this event.
    ///
    /// The decimal point sits on the number pad, so it is a `Number` key.
    pub const fn kind(&self) -> KeyKind {
        match self {
            Event::Digit(_) | Event::DecimalPoint => KeyKind::Number,
            Event::Operator(_) => KeyKind::Operator,
            Event::Clear | Event::Backspace => KeyKind::Special,
            Event::Equals => KeyKind::Equals,
        }
    }
}

impl From<Operator> for Event {
    fn from(op: Operator) -> Self {
        Event::Operator(op)
    }
}

impl From<Digit> for Event {
    fn from(d: Digit) -> Self {
        Event::Digit(d)
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The observable state after an event.
///
/// `summary` is `"{accumulator} {symbol}"` and is only present while an
/// operation is pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Main display text.
    pub display: String,

    /// Pending-operation line, e.g. `"12 +"`.
    pub summary: Option<String>,

    /// Operator awaiting its right-hand operand.
    pub pending_operator: Option<Operator>,

    /// Whether the next digit starts a new number.
    pub awaiting_fresh_operand: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_symbols_round_trip() {
        let all = [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ];
        for op in all {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_operator_glyphs() {
        assert_eq!("×".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("x".parse::<Operator>().unwrap(), Operator::Multiply);
        assert_eq!("÷".parse::<Operator>().unwrap(), Operator::Divide);
        assert_eq!("−".parse::<Operator>().unwrap(), Operator::Subtract);
        assert!("%".parse::<Operator>().is_err());
    }

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert_eq!(Digit::try_from('0').unwrap().as_char(), '0');
        assert!(Digit::try_from('a').is_err());
        assert!(Digit::try_from('.').is_err());
        assert!(Digit::new(10).is_err());
    }

    #[test]
    fn test_event_kinds() {
        assert_eq!(Event::digit('3').unwrap().kind(), KeyKind::Number);
        assert_eq!(Event::DecimalPoint.kind(), KeyKind::Number);
        assert_eq!(Event::Operator(Operator::Add).kind(), KeyKind::Operator);
        assert_eq!(Event::Clear.kind(), KeyKind::Special);
        assert_eq!(Event::Backspace.kind(), KeyKind::Special);
        assert_eq!(Event::Equals.kind(), KeyKind::Equals);
    }

    #[test]
    fn test_event_serialization() {
        let json = serde_json::to_string(&Event::digit('7').unwrap()).unwrap();
        assert_eq!(json, r#"{"kind":"digit","value":7}"#);

        let json = serde_json::to_string(&Event::Operator(Operator::Divide)).unwrap();
        assert_eq!(json, r#"{"kind":"operator","value":"divide"}"#);

        let json = serde_json::to_string(&Event::Equals).unwrap();
        assert_eq!(json, r#"{"kind":"equals"}"#);

        let parsed: Event = serde_json::from_str(r#"{"kind":"decimal_point"}"#).unwrap();
        assert_eq!(parsed, Event::DecimalPoint);

        assert!(serde_json::from_str::<Event>(r#"{"kind":"digit","value":12}"#).is_err());
    }
}
