//! # Calculator Engine
//!
//! The input/evaluation state machine. Every button press is one [`Event`];
//! every event moves the engine to its next state and yields a [`Snapshot`].
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Engine State Transitions                             │
//! │                                                                         │
//! │  Key Press            Operation                 State Change            │
//! │  ─────────            ─────────                 ────────────            │
//! │                                                                         │
//! │  0-9 ───────────────► enter_digit() ──────────► display += d            │
//! │                                                 (or replace "0"/fresh)  │
//! │                                                                         │
//! │  . ─────────────────► enter_decimal_point() ──► display += "."          │
//! │                                                 (or "0." when fresh)    │
//! │                                                                         │
//! │  + - * / ───────────► apply_operator() ───────► accumulator = reduce()  │
//! │                                                 pending = op            │
//! │                                                                         │
//! │  = ─────────────────► equals() ───────────────► display = result        │
//! │                                                 accumulator = None      │
//! │                                                                         │
//! │  DEL ───────────────► backspace() ────────────► display.pop()           │
//! │                                                                         │
//! │  AC ────────────────► clear_all() ────────────► initial state           │
//! │                                                                         │
//! │  NOTE: No operator precedence. "2 + 3 * 4 =" is (2 + 3) * 4 = 20.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - `display` is never empty.
//! - `summary` is present exactly while an operation is pending.
//! - Digit entry stops at `max_digits` digits per operand; results are never
//!   truncated.

use crate::arithmetic::{format_number, parse_number, reduce};
use crate::types::{Digit, Event, Operator, Snapshot};
use crate::DEFAULT_MAX_DIGITS;

/// The engine state for one calculator session.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    /// Operand being entered, or the most recent result.
    display: String,

    /// Left-hand operand carried across a chain.
    accumulator: Option<f64>,

    /// Operator waiting for its right-hand operand.
    pending_operator: Option<Operator>,

    /// Next digit starts a new number.
    awaiting_fresh_operand: bool,

    /// Digit-entry bound for one operand.
    max_digits: usize,
}

impl Calculator {
    /// Creates a calculator in its initial state.
    pub fn new() -> Self {
        Self::with_max_digits(DEFAULT_MAX_DIGITS)
    }

    /// Creates a calculator that accepts at most `max_digits` digits per
    /// operand. A bound of zero is treated as one.
    pub fn with_max_digits(max_digits: usize) -> Self {
        Calculator {
            display: "0".to_string(),
            accumulator: None,
            pending_operator: None,
            awaiting_fresh_operand: false,
            max_digits: max_digits.max(1),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left-hand operand of the pending operation.
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Operator awaiting its right-hand operand.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next digit starts a new number.
    pub fn is_awaiting_fresh_operand(&self) -> bool {
        self.awaiting_fresh_operand
    }

    /// Digit-entry bound.
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    /// The pending-operation line, e.g. `"12 +"`.
    pub fn summary(&self) -> Option<String> {
        match (self.accumulator, self.pending_operator) {
            (Some(acc), Some(op)) => Some(format!("{} {}", format_number(acc), op.symbol())),
            _ => None,
        }
    }

    /// The observable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.display.clone(),
            summary: self.summary(),
            pending_operator: self.pending_operator,
            awaiting_fresh_operand: self.awaiting_fresh_operand,
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Routes one event to its operation.
    pub fn dispatch(&mut self, event: Event) -> Snapshot {
        match event {
            Event::Digit(d) => self.enter_digit(d),
            Event::DecimalPoint => self.enter_decimal_point(),
            Event::Clear => self.clear_all(),
            Event::Backspace => self.backspace(),
            Event::Operator(op) => self.apply_operator(op),
            Event::Equals => self.equals(),
        }
    }

    /// By-value transition: the state after `event`.
    ///
    /// ## Example
    /// ```rust
    /// use abacus_core::{Calculator, Event, Operator};
    ///
    /// let calc = Calculator::new()
    ///     .next(Event::digit('6').unwrap())
    ///     .next(Event::Operator(Operator::Multiply))
    ///     .next(Event::digit('7').unwrap())
    ///     .next(Event::Equals);
    /// assert_eq!(calc.display(), "42");
    /// ```
    pub fn next(mut self, event: Event) -> Self {
        self.dispatch(event);
        self
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Enters one digit.
    ///
    /// ## Behavior
    /// - Display `"0"` or fresh operand: the digit replaces the display
    /// - Otherwise: the digit is appended, unless the operand is full
    pub fn enter_digit(&mut self, digit: Digit) -> Snapshot {
        if self.display == "0" || self.awaiting_fresh_operand {
            self.display = digit.to_string();
            self.awaiting_fresh_operand = false;
        } else if self.digit_count() < self.max_digits {
            self.display.push(digit.as_char());
        }
        self.snapshot()
    }

    /// Enters the decimal point. At most one per operand.
    pub fn enter_decimal_point(&mut self) -> Snapshot {
        if self.awaiting_fresh_operand {
            self.display = "0.".to_string();
            self.awaiting_fresh_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.snapshot()
    }

    /// Returns to the initial state. The digit bound is kept.
    pub fn clear_all(&mut self) -> Snapshot {
        *self = Self::with_max_digits(self.max_digits);
        self.snapshot()
    }

    /// Removes the last display character, bottoming out at `"0"`.
    ///
    /// Leaves the accumulator, pending operator and fresh-operand flag alone.
    pub fn backspace(&mut self) -> Snapshot {
        if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
        self.snapshot()
    }

    /// Selects an operator, reducing any pending operation first.
    ///
    /// ## Chaining
    /// ```text
    /// 2  +        accumulator = 2          pending = +
    /// 3  *        accumulator = 2 + 3 = 5  pending = *   display = "5"
    /// 4  =        display = 5 * 4 = "20"
    /// ```
    pub fn apply_operator(&mut self, op: Operator) -> Snapshot {
        let current = parse_number(&self.display);

        match (self.accumulator, self.pending_operator) {
            (None, _) => self.accumulator = Some(current),
            (Some(acc), Some(pending)) => {
                let result = reduce(acc, pending, current);
                self.accumulator = Some(result);
                self.display = format_number(result);
            }
            (Some(_), None) => {}
        }

        self.pending_operator = Some(op);
        self.awaiting_fresh_operand = true;
        self.snapshot()
    }

    /// Completes the pending operation. No-op when nothing is pending.
    pub fn equals(&mut self) -> Snapshot {
        if let (Some(acc), Some(op)) = (self.accumulator, self.pending_operator) {
            let current = parse_number(&self.display);
            let result = reduce(acc, op, current);
            self.display = format_number(result);
            self.accumulator = None;
            self.pending_operator = None;
            self.awaiting_fresh_operand = true;
        }
        self.snapshot()
    }

    /// Digits typed into the current operand. The `0` placed before a
    /// leading decimal point is not counted.
    fn digit_count(&self) -> usize {
        let typed = self.display.strip_prefix("0.").unwrap_or(&self.display);
        typed.chars().filter(|c| c.is_ascii_digit()).count()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
