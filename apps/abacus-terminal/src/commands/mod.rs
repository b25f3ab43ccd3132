//! # Commands Module
//!
//! Every action the terminal can take on behalf of a typed line.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── keypad.rs   ◄─── Button presses and key lines
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin line: "12 + 3"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  press_keys(&CalculatorState, line)                                     │
//! │      -> Result<DisplayResponse, ApiError>                               │
//! │         │                                                               │
//! │         │ (Renderer: text or JSON lines)                                │
//! │         ▼                                                               │
//! │  stdout:                     12 +                                       │
//! │                                 3                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the calculator
//! fn press_equals(calc: &CalculatorState) -> DisplayResponse
//!
//! // Only needs config
//! fn get_config(config: &ConfigState) -> ConfigState
//! ```

pub mod config;
pub mod keypad;

pub use config::get_config;
pub use keypad::{
    backspace, clear_all, get_display, press_decimal_point, press_digit, press_equals, press_key,
    press_keys, press_operator, DisplayResponse,
};
