//! # State Module
//!
//! Manages application state for the terminal shell.
//!
//! Instead of one `AppState` struct, each concern gets its own state type so
//! a command declares exactly what it needs:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      run() (lib.rs)                             │   │
//! │  │  let calculator = CalculatorState::new(config.max_digits);      │   │
//! │  │  let config = ConfigState::load_or_default(path);               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │             ┌────────────────┴────────────────┐                         │
//! │             ▼                                 ▼                         │
//! │  ┌──────────────────────┐          ┌──────────────────────┐            │
//! │  │   CalculatorState    │          │     ConfigState      │            │
//! │  │                      │          │                      │            │
//! │  │  Arc<Mutex<          │          │  max_digits          │            │
//! │  │    Calculator        │          │  output              │            │
//! │  │  >>                  │          │  show_summary        │            │
//! │  └──────────────────────┘          └──────────────────────┘            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod calculator;
mod config;

pub use calculator::CalculatorState;
pub use config::{ConfigError, ConfigResult, ConfigState, OutputMode};
