//! # Arithmetic Module
//!
//! The pure numeric core: reduction of two operands and the conversions
//! between `f64` values and display text.
//!
//! ## Why `f64` and not decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BEHAVIORAL COMPATIBILITY                                               │
//! │                                                                         │
//! │  Keypad users expect the answers the reference calculator gives:        │
//! │    0.1 + 0.2 = 0.30000000000000004                                      │
//! │    1e308 * 10 = Infinity                                                │
//! │                                                                         │
//! │  So values are IEEE-754 binary64 with no rounding before display,       │
//! │  and text conversion follows the ECMAScript Number-to-String shapes:    │
//! │    shortest round-trip digits, positional for 1e-6 <= |n| < 1e21,       │
//! │    scientific ("1e+21", "1e-7") outside that window.                    │
//! │                                                                         │
//! │  ONE DELIBERATE DEVIATION FROM IEEE-754:                                │
//! │    x / 0 = 0   (not Infinity, not NaN)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Operator;

// =============================================================================
// Reduction
// =============================================================================

/// Applies `op` to the accumulator `a` and the new operand `b`.
///
/// Division by zero (either sign) yields `0`.
///
/// ## Example
/// ```rust
/// use abacus_core::arithmetic::reduce;
/// use abacus_core::Operator;
///
/// assert_eq!(reduce(2.0, Operator::Add, 3.0), 5.0);
/// assert_eq!(reduce(5.0, Operator::Divide, 0.0), 0.0);
/// ```
pub fn reduce(a: f64, op: Operator, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                0.0
            } else {
                a / b
            }
        }
    }
}

// =============================================================================
// Number → Text
// =============================================================================

/// Formats a value the way the display shows results.
///
/// ## Shapes
/// ```text
///   20          9.5         0.30000000000000004
///   0.000001    1e-7        100000000000000000000    1e+21
///   -2.5        0 (for -0)  Infinity   -Infinity    NaN
/// ```
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    if n.is_infinite() {
        return "Infinity".to_string();
    }

    let (digits, point) = shortest_digits(n);
    let k = digits.len() as i32;

    if k <= point && point <= 21 {
        // Integer: digits then trailing zeros
        let mut out = digits;
        out.push_str(&"0".repeat((point - k) as usize));
        out
    } else if 0 < point && point <= 21 {
        let (int_part, frac_part) = digits.split_at(point as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < point && point <= 0 {
        format!("0.{}{}", "0".repeat((-point) as usize), digits)
    } else {
        let exponent = point - 1;
        let sign = if exponent < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, sign, exponent.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, sign, exponent.abs())
        }
    }
}

/// Returns the shortest round-trip significant digits of a positive finite
/// value, and the position of the decimal point relative to them
/// (`n = 0.d1d2d3… × 10^point`).
fn shortest_digits(n: f64) -> (String, i32) {
    // `{:e}` renders the shortest representation, e.g. "1.2345e3"
    let sci = format!("{:e}", n);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    (digits, exponent + 1)
}

// =============================================================================
// Text → Number
// =============================================================================

/// Reads the numeric value of display text.
///
/// Uses the longest numeric prefix, so partial entries like `"7."` read as
/// `7` and a trimmed exponent like `"1e+"` reads as `1`. Text with no numeric
/// prefix reads as `NaN`.
///
/// ## Example
/// ```rust
/// use abacus_core::arithmetic::parse_number;
///
/// assert_eq!(parse_number("7."), 7.0);
/// assert_eq!(parse_number("1e+2"), 100.0);
/// assert!(parse_number("-").is_nan());
/// ```
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        // A lone "." only counts when digits precede it
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
