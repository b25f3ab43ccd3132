//! # Error Types
//!
//! Domain-specific error types for abacus-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Boundaries                                │
//! │                                                                         │
//! │  Key label ("7", "×", "DEL") ──► validation::parse_key ──► Event        │
//! │                                        │                                │
//! │                                        ▼                                │
//! │                              ValidationError::UnknownKey                │
//! │                                                                         │
//! │  Event ──► Calculator::dispatch ──► Snapshot                            │
//! │                    │                                                    │
//! │                    └── TOTAL: no error path, ever                       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError (terminal) → Display      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine itself cannot fail. Division by zero, repeated decimal points
//! and backspacing an empty display are absorbed by the state machine.
//! Errors only exist where raw text is turned into typed input.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while building engine input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A digit key carried something other than `0`-`9`.
    #[error("Invalid digit: {0}")]
    InvalidDigit(String),

    /// An operator key carried an unknown symbol.
    #[error("Invalid operator: {0:?}")]
    InvalidOperator(String),

    /// A key label or setting failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Errors from parsing key labels and checking settings.
///
/// Raised by [`crate::validation`] before anything reaches the engine, so a
/// rejected key never changes calculator state.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Input was empty.
    #[error("{field} is required")]
    Required { field: String },

    /// The key label does not map to any calculator button.
    #[error("Unknown key: {key:?}")]
    UnknownKey { key: String },

    /// A setting is outside its allowed range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g. a malformed setting value).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result alias for engine-input operations.
pub type CoreResult<T> = Result<T, CoreError>;
