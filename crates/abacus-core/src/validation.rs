//! # Validation Module
//!
//! Turns raw key labels into engine events and checks engine settings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Layers                                       │
//! │                                                                         │
//! │  Layer 1: Presentation (terminal, web keypad)                           │
//! │  └── Raw labels: "7", "×", "DEL", "12+3="                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── parse_key / parse_keys: label → Event                              │
//! │  └── Rejects unknown labels BEFORE the engine sees anything             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                        │
//! │  └── Total over every Event; nothing left to reject                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use abacus_core::validation::{parse_key, parse_keys};
//! use abacus_core::{Event, Operator};
//!
//! assert_eq!(parse_key("÷").unwrap(), Event::Operator(Operator::Divide));
//! assert_eq!(parse_keys("12+3=").unwrap().len(), 5);
//! assert!(parse_key("sin").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Digit, Event, Operator};
use crate::MAX_DIGITS_LIMIT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Key Labels
// =============================================================================

/// Maps one key label to its event.
///
/// ## Accepted Labels
/// | Event         | Labels                                   |
/// |---------------|------------------------------------------|
/// | Digit         | `0` … `9`                                |
/// | DecimalPoint  | `.` `,`                                  |
/// | Operator      | `+` `-` `−` `*` `x` `×` `/` `÷`          |
/// | Equals        | `=` `enter` `return`                     |
/// | Clear         | `AC` `C` `clear` `esc` `escape`          |
/// | Backspace     | `DEL` `⌫` `backspace` `bs`               |
///
/// Word labels are case-insensitive.
pub fn parse_key(label: &str) -> ValidationResult<Event> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "key".to_string(),
        });
    }

    let mut chars = label.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Ok(digit) = Digit::try_from(c) {
            return Ok(Event::Digit(digit));
        }
        match c {
            '.' | ',' => return Ok(Event::DecimalPoint),
            '=' => return Ok(Event::Equals),
            '⌫' => return Ok(Event::Backspace),
            _ => {}
        }
        if let Ok(op) = label.parse::<Operator>() {
            return Ok(Event::Operator(op));
        }
    }

    match label.to_lowercase().as_str() {
        "ac" | "c" | "clear" | "esc" | "escape" => Ok(Event::Clear),
        "del" | "backspace" | "bs" => Ok(Event::Backspace),
        "enter" | "return" => Ok(Event::Equals),
        _ => Err(ValidationError::UnknownKey {
            key: label.to_string(),
        }),
    }
}

/// Maps a whitespace-separated line of key labels to events.
///
/// A token that is not a label itself is split into one key per character
/// when every character is a key, so `"12+3="` and `"1 2 + 3 ="` are the
/// same input. The whole line is rejected if any token is unknown.
pub fn parse_keys(line: &str) -> ValidationResult<Vec<Event>> {
    let mut events = Vec::new();

    for token in line.split_whitespace() {
        match parse_key(token) {
            Ok(event) => events.push(event),
            Err(err) => {
                if token.chars().count() < 2 {
                    return Err(err);
                }
                let split: ValidationResult<Vec<Event>> = token
                    .chars()
                    .map(|c| parse_key(&c.to_string()))
                    .collect();
                match split {
                    Ok(split) => events.extend(split),
                    Err(_) => return Err(err),
                }
            }
        }
    }

    Ok(events)
}

// =============================================================================
// Settings
// =============================================================================

/// Validates the per-operand digit bound.
///
/// ## Rules
/// - Must be between 1 and MAX_DIGITS_LIMIT (32)
pub fn validate_max_digits(max_digits: usize) -> ValidationResult<()> {
    if max_digits == 0 || max_digits > MAX_DIGITS_LIMIT {
        return Err(ValidationError::OutOfRange {
            field: "max_digits".to_string(),
            min: 1,
            max: MAX_DIGITS_LIMIT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_digit_and_point_keys() {
        assert_eq!(parse_key("7").unwrap(), Event::digit('7').unwrap());
        assert_eq!(parse_key(" 0 ").unwrap(), Event::digit('0').unwrap());
        assert_eq!(parse_key(".").unwrap(), Event::DecimalPoint);
        assert_eq!(parse_key(",").unwrap(), Event::DecimalPoint);
    }

    #[test]
    fn test_parse_operator_keys() {
        assert_eq!(parse_key("+").unwrap(), Event::Operator(Operator::Add));
        assert_eq!(parse_key("−").unwrap(), Event::Operator(Operator::Subtract));
        assert_eq!(parse_key("×").unwrap(), Event::Operator(Operator::Multiply));
        assert_eq!(parse_key("x").unwrap(), Event::Operator(Operator::Multiply));
        assert_eq!(parse_key("/").unwrap(), Event::Operator(Operator::Divide));
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key("AC").unwrap(), Event::Clear);
        assert_eq!(parse_key("c").unwrap(), Event::Clear);
        assert_eq!(parse_key("Escape").unwrap(), Event::Clear);
        assert_eq!(parse_key("DEL").unwrap(), Event::Backspace);
        assert_eq!(parse_key("⌫").unwrap(), Event::Backspace);
        assert_eq!(parse_key("=").unwrap(), Event::Equals);
        assert_eq!(parse_key("Enter").unwrap(), Event::Equals);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(matches!(parse_key(""), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_key("   "), Err(ValidationError::Required { .. })));
        assert!(matches!(parse_key("%"), Err(ValidationError::UnknownKey { .. })));
        assert!(matches!(parse_key("sqrt"), Err(ValidationError::UnknownKey { .. })));
    }

    #[test]
    fn test_parse_keys_splits_runs() {
        let spaced = parse_keys("1 2 + 3 =").unwrap();
        let packed = parse_keys("12+3=").unwrap();
        assert_eq!(spaced, packed);
        assert_eq!(packed.len(), 5);
        assert_eq!(packed[2], Event::Operator(Operator::Add));
    }

    #[test]
    fn test_parse_keys_mixes_words_and_runs() {
        let events = parse_keys("7.5+ DEL AC").unwrap();
        assert_eq!(
            events,
            vec![
                Event::digit('7').unwrap(),
                Event::DecimalPoint,
                Event::digit('5').unwrap(),
                Event::Operator(Operator::Add),
                Event::Backspace,
                Event::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_keys_rejects_whole_line() {
        let err = parse_keys("1 + 2e3").unwrap_err();
        assert!(matches!(err, ValidationError::UnknownKey { key } if key == "2e3"));
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn test_validate_max_digits() {
        assert!(validate_max_digits(1).is_ok());
        assert!(validate_max_digits(16).is_ok());
        assert!(validate_max_digits(32).is_ok());
        assert!(validate_max_digits(0).is_err());
        assert!(validate_max_digits(33).is_err());
    }
}
