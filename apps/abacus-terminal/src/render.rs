//! # Display Rendering
//!
//! Turns command responses into stdout text.
//!
//! ## Output Modes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Text (default, width 24)                                               │
//! │  ┌────────────────────────┐                                             │
//! │  │                   7.5 +│  ◄── summary line (blank when none)         │
//! │  │                       2│  ◄── display                                │
//! │  └────────────────────────┘                                             │
//! │                                                                         │
//! │  JSON (one object per line)                                             │
//! │  {"display":"2","summary":"7.5 +","pendingOperator":"add",...}          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::commands::DisplayResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::{ConfigState, OutputMode};

/// Formats responses according to the loaded configuration.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    mode: OutputMode,
    show_summary: bool,
    width: usize,
}

impl Renderer {
    pub fn new(config: &ConfigState) -> Self {
        Renderer {
            mode: config.output,
            show_summary: config.show_summary,
            width: config.display_width,
        }
    }

    /// Renders a display response, newline-terminated.
    ///
    /// `show_summary` applies to text mode only; JSON always carries the
    /// full snapshot.
    pub fn render(&self, response: &DisplayResponse) -> ApiResult<String> {
        match self.mode {
            OutputMode::Json => json_line(response),
            OutputMode::Text => {
                let width = self.width;
                let display = &response.snapshot.display;
                if self.show_summary {
                    let summary = response.snapshot.summary.as_deref().unwrap_or("");
                    Ok(format!("{:>width$}\n{:>width$}\n", summary, display))
                } else {
                    Ok(format!("{:>width$}\n", display))
                }
            }
        }
    }

    /// Renders a rejected command.
    pub fn render_error(&self, error: &ApiError) -> ApiResult<String> {
        match self.mode {
            OutputMode::Json => json_line(error),
            OutputMode::Text => Ok(format!("error: {}\n", error.message)),
        }
    }

    /// Renders the active configuration: TOML in text mode, JSON otherwise.
    pub fn render_config(&self, config: &ConfigState) -> ApiResult<String> {
        match self.mode {
            OutputMode::Json => json_line(config),
            OutputMode::Text => toml::to_string_pretty(config)
                .map_err(|e| ApiError::internal(format!("Failed to encode config: {}", e))),
        }
    }
}

fn json_line<T: Serialize>(value: &T) -> ApiResult<String> {
    let mut line = serde_json::to_string(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))?;
    line.push('\n');
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::press_keys;
    use crate::state::CalculatorState;

    fn config(output: OutputMode, show_summary: bool) -> ConfigState {
        ConfigState {
            output,
            show_summary,
            display_width: 10,
            ..ConfigState::default()
        }
    }

    #[test]
    fn test_text_with_summary() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "7.5+2").unwrap();
        let out = Renderer::new(&config(OutputMode::Text, true)).render(&resp).unwrap();
        assert_eq!(out, "     7.5 +\n         2\n");
    }

    #[test]
    fn test_text_blank_summary_line() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "42").unwrap();
        let out = Renderer::new(&config(OutputMode::Text, true)).render(&resp).unwrap();
        assert_eq!(out, "          \n        42\n");
    }

    #[test]
    fn test_text_without_summary() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "3*").unwrap();
        let out = Renderer::new(&config(OutputMode::Text, false)).render(&resp).unwrap();
        assert_eq!(out, "         3\n");
    }

    #[test]
    fn test_long_display_is_not_cut() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "0.1+0.2=").unwrap();
        let out = Renderer::new(&config(OutputMode::Text, false)).render(&resp).unwrap();
        assert_eq!(out, "0.30000000000000004\n");
    }

    #[test]
    fn test_json_line() {
        let calc = CalculatorState::default();
        let resp = press_keys(&calc, "9").unwrap();
        let out = Renderer::new(&config(OutputMode::Json, false)).render(&resp).unwrap();
        assert!(out.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(out.trim_end()).unwrap();
        assert_eq!(value["display"], "9");
        assert_eq!(value["summary"], serde_json::Value::Null);
        assert_eq!(value["eventsApplied"], 1);
    }

    #[test]
    fn test_errors() {
        let err = ApiError::invalid_key("Unknown key: \"%\"");

        let text = Renderer::new(&config(OutputMode::Text, true)).render_error(&err).unwrap();
        assert_eq!(text, "error: Unknown key: \"%\"\n");

        let json = Renderer::new(&config(OutputMode::Json, true)).render_error(&err).unwrap();
        assert!(json.starts_with(r#"{"code":"INVALID_KEY""#));
    }

    #[test]
    fn test_config_rendering() {
        let text_cfg = config(OutputMode::Text, true);
        let out = Renderer::new(&text_cfg).render_config(&text_cfg).unwrap();
        assert!(out.contains("display_width = 10"));

        let json_cfg = config(OutputMode::Json, true);
        let out = Renderer::new(&json_cfg).render_config(&json_cfg).unwrap();
        assert!(out.contains(r#""output":"json""#));
    }
}
