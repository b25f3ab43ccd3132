//! # abacus-core: The Calculator Engine
//!
//! This crate is the **heart** of Abacus. It holds the input/evaluation
//! state machine of a four-function calculator as pure, deterministic code
//! with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Presentation (terminal shell, web keypad)              │   │
//! │  │    Keypad ──► key labels ──► display + summary line             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Event / Snapshot                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ abacus-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │arithmetic │  │ validation│  │   │
//! │  │   │   Event   │  │Calculator │  │  reduce   │  │ parse_key │  │   │
//! │  │   │  Snapshot │  │ dispatch  │  │  format   │  │  bounds   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE • TOTAL TRANSITIONS     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Events, operators, snapshots
//! - [`engine`] - The `Calculator` state machine
//! - [`arithmetic`] - Reduction and number/text conversion
//! - [`error`] - Error types for input parsing
//! - [`validation`] - Key label parsing and setting checks
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The engine is a value owned by its dispatcher
//! 2. **Total Transitions**: Every event is accepted in every state
//! 3. **No Precedence**: Operators reduce strictly left to right
//! 4. **Typed Input**: Raw labels are validated before reaching the engine
//!
//! ## Example Usage
//!
//! ```rust
//! use abacus_core::validation::parse_keys;
//! use abacus_core::Calculator;
//!
//! let mut calc = Calculator::new();
//! for event in parse_keys("2 + 3 * 4 =").unwrap() {
//!     calc.dispatch(event);
//! }
//!
//! // Left to right: (2 + 3) * 4
//! assert_eq!(calc.display(), "20");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod arithmetic;
pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::Calculator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of digits one operand may hold.
///
/// About the precision of an `f64`.
pub const DEFAULT_MAX_DIGITS: usize = 16;

/// Upper limit for a configured digit bound.
pub const MAX_DIGITS_LIMIT: usize = 32;
