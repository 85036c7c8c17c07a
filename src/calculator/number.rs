//! Conversions between the display text and numeric operands.

/// Display text standing in for any non-finite result.
pub const ERROR_TEXT: &str = "Error";

/// Parse the text of the current entry into an operand.
///
/// Surrounding whitespace is ignored and empty text is zero. Anything that
/// is not a decimal numeral (including the error sentinel) parses to NaN.
pub fn parse_number(text: &str) -> f64 {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return 0.0;
    }

    // f64::from_str also accepts "inf" and "NaN", which are not numerals here
    let numeric = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !numeric {
        return f64::NAN;
    }

    trimmed.parse().unwrap_or(f64::NAN)
}

/// Format a result for the display.
///
/// Uses the shortest representation that parses back to the same value.
/// Very large or very small magnitudes switch to exponent notation
/// (`1e+21`, `1e-7`). NaN and infinities become [`ERROR_TEXT`].
pub fn format_number(value: f64) -> String {
    if is_error_value(value) {
        return ERROR_TEXT.to_string();
    }

    // Also folds negative zero
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return format!("{}", value);
    }

    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Check if a result must be shown as the error sentinel.
pub fn is_error_value(value: f64) -> bool {
    !value.is_finite()
}
