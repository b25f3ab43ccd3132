//! # Calculator State
//!
//! Holds the one engine instance of the session.
//!
//! ## Ownership
//! The calculator is wrapped in `Arc<Mutex<T>>` so every command can borrow
//! it through the same handle. Events are still applied one at a time: each
//! command holds the lock for exactly one dispatch (or one validated line of
//! dispatches).
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Calculator State Operations                          │
//! │                                                                         │
//! │  Key Typed               Command                  Engine Call           │
//! │  ─────────               ───────                  ───────────           │
//! │                                                                         │
//! │  "7" ──────────────────► press_digit() ─────────► enter_digit()        │
//! │                                                                         │
//! │  "+" ──────────────────► press_operator() ──────► apply_operator()     │
//! │                                                                         │
//! │  "=" ──────────────────► press_equals() ────────► equals()             │
//! │                                                                         │
//! │  "12+3=" ──────────────► press_keys() ──────────► dispatch() × 5       │
//! │                                                                         │
//! │  (refresh) ────────────► get_display() ─────────► snapshot()           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use abacus_core::Calculator;

/// Shared calculator state.
#[derive(Debug, Clone)]
pub struct CalculatorState {
    calculator: Arc<Mutex<Calculator>>,
}

impl CalculatorState {
    /// Creates a calculator in its initial state with the given digit bound.
    pub fn new(max_digits: usize) -> Self {
        CalculatorState {
            calculator: Arc::new(Mutex::new(Calculator::with_max_digits(max_digits))),
        }
    }

    /// Executes a function with read access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = calc_state.with_calculator(|calc| calc.snapshot());
    /// ```
    pub fn with_calculator<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Calculator) -> R,
    {
        let calc = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&calc)
    }

    /// Executes a function with write access to the calculator.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// calc_state.with_calculator_mut(|calc| calc.dispatch(Event::Equals));
    /// ```
    pub fn with_calculator_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Calculator) -> R,
    {
        let mut calc = self.calculator.lock().expect("Calculator mutex poisoned");
        f(&mut calc)
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(abacus_core::DEFAULT_MAX_DIGITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::{Event, Operator};

    #[test]
    fn test_state_starts_at_zero() {
        let state = CalculatorState::default();
        assert_eq!(state.with_calculator(|c| c.display().to_string()), "0");
    }

    #[test]
    fn test_clones_share_one_engine() {
        let state = CalculatorState::new(8);
        let handle = state.clone();

        handle.with_calculator_mut(|c| {
            c.dispatch(Event::digit('9').unwrap());
            c.dispatch(Event::Operator(Operator::Multiply));
        });

        let summary = state.with_calculator(|c| c.summary());
        assert_eq!(summary.as_deref(), Some("9 *"));
        assert_eq!(state.with_calculator(|c| c.max_digits()), 8);
    }

    #[test]
    #[should_panic(expected = "Calculator mutex poisoned")]
    fn test_poisoned_lock_panics() {
        let state = CalculatorState::default();
        let handle = state.clone();
        let _ = std::thread::spawn(move || {
            handle.with_calculator_mut(|_| panic!("command failed mid-update"));
        })
        .join();

        state.with_calculator(|c| c.display().to_string());
    }
}
