//! # Abacus Terminal Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Abacus Terminal                                  │
//! │                                                                         │
//! │   $ abacus                                                              │
//! │                          0                                              │
//! │   12 + 3                                                                │
//! │                       12 +                                              │
//! │                          3                                              │
//! │   =                                                                     │
//! │                                                                         │
//! │                         15                                              │
//! │                                                                         │
//! │  main.rs ────► Starts the runtime                                       │
//! │  lib.rs ─────► Logging, config, state, session loop                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    // The actual setup is in lib.rs for testability
    abacus_terminal::run().await
}
