//! # Keypad Commands
//!
//! One command per button kind, plus label-based commands for text input.
//!
//! ## Calculation Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculation Lifecycle                                │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │ Entering │────►│ Operator │────►│ Entering │────►│  Result  │       │
//! │  │ operand  │     │ pending  │     │ operand  │     │ shown    │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲         press_operator         │       press_equals  │         │
//! │       │                                │ press_operator      │         │
//! │       │                                ▼ (chains)            │         │
//! │       │                          ┌──────────┐                │         │
//! │       │                          │ Operator │                │         │
//! │       │                          │ pending  │                │         │
//! │       │                          └──────────┘                │         │
//! │       └────────────────── press_digit ◄──────────────────────┘         │
//! │                                                                         │
//! │  clear_all ─────────────────────────────────► (back to "0")            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use abacus_core::validation::{parse_key, parse_keys};
use abacus_core::{Calculator, Digit, Event, Operator, Snapshot};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiResult;
use crate::state::CalculatorState;

/// Display response returned by every keypad command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayResponse {
    /// Display, summary line and pending operator.
    #[serde(flatten)]
    pub snapshot: Snapshot,

    /// Events applied by this command.
    pub events_applied: usize,
}

impl DisplayResponse {
    fn new(calc: &Calculator, events_applied: usize) -> Self {
        DisplayResponse {
            snapshot: calc.snapshot(),
            events_applied,
        }
    }
}

/// Gets the current display without pressing anything.
pub fn get_display(calc: &CalculatorState) -> DisplayResponse {
    debug!("get_display command");
    calc.with_calculator(|c| DisplayResponse::new(c, 0))
}

/// Presses a digit key.
///
/// ## Arguments
/// * `digit` - `'0'` through `'9'`
pub fn press_digit(calc: &CalculatorState, digit: char) -> ApiResult<DisplayResponse> {
    debug!(digit = %digit, "press_digit command");
    let digit = Digit::try_from(digit)?;
    Ok(apply(calc, Event::Digit(digit)))
}

/// Presses the decimal point key.
pub fn press_decimal_point(calc: &CalculatorState) -> DisplayResponse {
    debug!("press_decimal_point command");
    apply(calc, Event::DecimalPoint)
}

/// Presses an operator key.
///
/// ## Arguments
/// * `symbol` - `+`, `-`, `*`, `/` or the keypad glyphs `×`, `÷`, `−`
pub fn press_operator(calc: &CalculatorState, symbol: &str) -> ApiResult<DisplayResponse> {
    debug!(symbol = %symbol, "press_operator command");
    let op: Operator = symbol.parse()?;
    Ok(apply(calc, Event::Operator(op)))
}

/// Presses the equals key.
pub fn press_equals(calc: &CalculatorState) -> DisplayResponse {
    debug!("press_equals command");
    apply(calc, Event::Equals)
}

/// Presses AC.
pub fn clear_all(calc: &CalculatorState) -> DisplayResponse {
    debug!("clear_all command");
    apply(calc, Event::Clear)
}

/// Presses DEL.
pub fn backspace(calc: &CalculatorState) -> DisplayResponse {
    debug!("backspace command");
    apply(calc, Event::Backspace)
}

/// Presses the key with the given label (`"7"`, `"×"`, `"AC"`, ...).
pub fn press_key(calc: &CalculatorState, label: &str) -> ApiResult<DisplayResponse> {
    debug!(label = %label, "press_key command");
    let event = parse_key(label)?;
    Ok(apply(calc, event))
}

/// Presses every key on a line, in order.
///
/// ## Behavior
/// The whole line is validated first. If any label is unknown nothing is
/// pressed and the calculator keeps its state.
pub fn press_keys(calc: &CalculatorState, line: &str) -> ApiResult<DisplayResponse> {
    let events = parse_keys(line)?;
    debug!(line = %line, events = events.len(), "press_keys command");

    Ok(calc.with_calculator_mut(|c| {
        for event in &events {
            c.dispatch(*event);
        }
        DisplayResponse::new(c, events.len())
    }))
}

fn apply(calc: &CalculatorState, event: Event) -> DisplayResponse {
    calc.with_calculator_mut(|c| {
        c.dispatch(event);
        DisplayResponse::new(c, 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_chained_presses() {
        let calc = CalculatorState::default();
        press_digit(&calc, '2').unwrap();
        press_operator(&calc, "+").unwrap();
        press_digit(&calc, '3').unwrap();
        let mid = press_operator(&calc, "×").unwrap();
        assert_eq!(mid.snapshot.display, "5");
        assert_eq!(mid.snapshot.summary.as_deref(), Some("5 *"));

        press_digit(&calc, '4').unwrap();
        let done = press_equals(&calc);
        assert_eq!(done.snapshot.display, "20");
        assert_eq!(done.snapshot.summary, None);
    }

    #[test]
    fn test_decimal_and_backspace() {
        let calc = CalculatorState::default();
        press_digit(&calc, '7').unwrap();
        press_decimal_point(&calc);
        press_decimal_point(&calc);
        assert_eq!(get_display(&calc).snapshot.display, "7.");

        backspace(&calc);
        backspace(&calc);
        let resp = backspace(&calc);
        assert_eq!(resp.snapshot.display, "0");
    }

    #[test]
    fn test_press_keys_line() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "7.5 + 2 =").unwrap();
        assert_eq!(resp.snapshot.display, "9.5");
        assert_eq!(resp.events_applied, 6);
    }

    #[test]
    fn test_press_key_labels() {
        let calc = CalculatorState::default();
        press_key(&calc, "5").unwrap();
        press_key(&calc, "÷").unwrap();
        press_key(&calc, "0").unwrap();
        let resp = press_key(&calc, "=").unwrap();
        assert_eq!(resp.snapshot.display, "0");

        let resp = press_key(&calc, "AC").unwrap();
        assert_eq!(resp.snapshot.display, "0");
        assert!(!resp.snapshot.awaiting_fresh_operand);
    }

    #[test]
    fn test_rejected_line_leaves_state_untouched() {
        let calc = CalculatorState::default();
        press_keys(&calc, "12+").unwrap();
        let before = get_display(&calc);

        let err = press_keys(&calc, "3 sqrt").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidKey);
        assert_eq!(get_display(&calc), before);
    }

    #[test]
    fn test_invalid_digit_and_operator() {
        let calc = CalculatorState::default();
        assert_eq!(press_digit(&calc, 'z').unwrap_err().code, ErrorCode::InvalidKey);
        assert_eq!(press_operator(&calc, "^").unwrap_err().code, ErrorCode::InvalidKey);
        assert_eq!(get_display(&calc).snapshot.display, "0");
    }

    #[test]
    fn test_clear_all_resets() {
        let calc = CalculatorState::default();
        press_keys(&calc, "9*9").unwrap();
        let resp = clear_all(&calc);
        assert_eq!(resp.snapshot.display, "0");
        assert_eq!(resp.snapshot.summary, None);
        assert_eq!(resp.snapshot.pending_operator, None);
    }

    #[test]
    fn test_json_shape_is_flat() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "3+").unwrap();
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["display"], "3");
        assert_eq!(json["summary"], "3 +");
        assert_eq!(json["pendingOperator"], "add");
        assert_eq!(json["awaitingFreshOperand"], true);
        assert_eq!(json["eventsApplied"], 2);
    }
}
