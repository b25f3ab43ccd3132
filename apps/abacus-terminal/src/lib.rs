//! # Abacus Terminal Library
//!
//! Terminal front end for the Abacus calculator.
//! Reads key labels from stdin and writes the display to stdout.
//!
//! ## Module Organization
//! ```text
//! abacus_terminal/
//! ├── lib.rs          ◄─── You are here (startup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── calculator.rs ◄─ Shared calculator engine
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── keypad.rs   ◄─── Button and key-line commands
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── render.rs       ◄─── Text / JSON-lines output
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Terminal Session                                     │
//! │                                                                         │
//! │  stdin line ──► "quit" / "exit" / EOF ──────────────────► end           │
//! │       │                                                                 │
//! │       ├──────► ":config" ──► get_config() ──► render_config()           │
//! │       │                                                                 │
//! │       └──────► press_keys() ──┬── Ok  ──► render()        ──► stdout    │
//! │                               └── Err ──► warn! + render_error()        │
//! │                                           (calculator unchanged)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod state;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use error::ApiResult;
use render::Renderer;
use state::{CalculatorState, ConfigState};

/// Runs the terminal calculator on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: INFO (DEBUG for abacus), override with RUST_LOG          │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • abacus.toml, then ABACUS_* overrides                              │
/// │     • Falls back to defaults on any error                               │
/// │                                                                         │
/// │  3. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CalculatorState: engine bounded by max_digits                     │
/// │     • ConfigState: read-only                                            │
/// │                                                                         │
/// │  4. Session Loop ─────────────────────────────────────────────────────► │
/// │     • One line at a time until quit or EOF                              │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> std::io::Result<()> {
    init_tracing();

    info!("Starting Abacus terminal");

    let config = ConfigState::load_or_default(None);
    info!(
        max_digits = config.max_digits,
        output = ?config.output,
        "Configuration loaded"
    );

    let calc = CalculatorState::new(config.max_digits);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    run_session(stdin, stdout, &calc, &config).await?;

    info!("Session ended");
    Ok(())
}

/// Drives one session: renders the initial display, then handles each input
/// line until `quit`, `exit` or end of input.
pub async fn run_session<R, W>(
    reader: R,
    mut writer: W,
    calc: &CalculatorState,
    config: &ConfigState,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let renderer = Renderer::new(config);

    emit(&mut writer, renderer.render(&commands::get_display(calc))).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => {
                debug!("Quit requested");
                break;
            }
            ":config" => {
                let current = commands::get_config(config);
                emit(&mut writer, renderer.render_config(&current)).await?;
            }
            keys => {
                let output = match commands::press_keys(calc, keys) {
                    Ok(response) => renderer.render(&response),
                    Err(e) => {
                        warn!(line = %keys, "Rejected keys: {}", e.message);
                        renderer.render_error(&e)
                    }
                };
                emit(&mut writer, output).await?;
            }
        }
    }

    Ok(())
}

/// Writes rendered output. Rendering failures are logged, not fatal.
async fn emit<W>(writer: &mut W, output: ApiResult<String>) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    match output {
        Ok(text) => {
            writer.write_all(text.as_bytes()).await?;
            writer.flush().await
        }
        Err(e) => {
            error!(code = ?e.code, "Failed to render output: {}", e.message);
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=abacus=trace` - Show trace for abacus crates only
/// - Default: INFO, DEBUG for abacus
///
/// Logs go to stderr; stdout carries only the display.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,abacus=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use state::OutputMode;

    async fn session(input: &str, config: &ConfigState) -> (String, CalculatorState) {
        let calc = CalculatorState::new(config.max_digits);
        let mut out = Vec::new();
        run_session(input.as_bytes(), &mut out, &calc, config)
            .await
            .unwrap();
        (String::from_utf8(out).unwrap(), calc)
    }

    fn narrow(output: OutputMode) -> ConfigState {
        ConfigState {
            output,
            display_width: 8,
            ..ConfigState::default()
        }
    }

    #[tokio::test]
    async fn test_session_renders_each_line() {
        let (out, calc) = session("2 + 3\n*4=\n", &narrow(OutputMode::Text)).await;
        let expected = concat!(
            "        \n       0\n",
            "     2 +\n       3\n",
            "        \n      20\n",
        );
        assert_eq!(out, expected);
        assert_eq!(calc.with_calculator(|c| c.display().to_string()), "20");
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let (_, calc) = session("9\nquit\n1\n", &narrow(OutputMode::Text)).await;
        assert_eq!(calc.with_calculator(|c| c.display().to_string()), "9");
    }

    #[tokio::test]
    async fn test_rejected_line_is_reported() {
        let (out, calc) = session("12\nfoo\n", &narrow(OutputMode::Text)).await;
        assert!(out.ends_with("error: Unknown key: \"foo\"\n"));
        assert_eq!(calc.with_calculator(|c| c.display().to_string()), "12");
    }

    #[tokio::test]
    async fn test_json_session() {
        let (out, _) = session("5/0=\n\n:config\n", &narrow(OutputMode::Json)).await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);

        let result: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(result["display"], "0");
        assert_eq!(result["eventsApplied"], 4);

        let config: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(config["output"], "json");
    }
}
