//! Number formatting for the calculator display.
//!
//! Every computed value passes through [`format_number`] before it becomes
//! the current input again, so binary floating-point noise never reaches
//! the display.

/// Fractional digits kept when rounding a computed value.
pub const FRACTION_DIGITS: usize = 10;

/// Format a computed value as a numeric literal.
///
/// Integers are rendered without a decimal point. Anything else is rounded to
/// [`FRACTION_DIGITS`] places with trailing zeros trimmed, so `0.1 + 0.2`
/// renders as `0.3`. Negative zero becomes `0`.
///
/// Returns `None` for NaN and infinities, which have no literal form.
pub fn format_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    let formatted = if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        let fixed = format!("{:.*}", FRACTION_DIGITS, value);
        fixed
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    };

    // Rounding can leave "-0" behind for tiny negative values.
    if formatted == "-0" {
        Some("0".to_string())
    } else {
        Some(formatted)
    }
}

/// Insert thousand separators into the integer part of a numeric literal.
///
/// Only meant for rendering: the result is not a valid input literal.
pub fn group_thousands(literal: &str) -> String {
    let (sign, unsigned) = match literal.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", literal),
    };
    let (int_part, frac_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}{}", sign, grouped, frac_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_number(14.0).as_deref(), Some("14"));
        assert_eq!(format_number(-3.0).as_deref(), Some("-3"));
        assert_eq!(format_number(0.0).as_deref(), Some("0"));
        assert_eq!(format_number(-0.0).as_deref(), Some("0"));
        assert_eq!(format_number(1e16).as_deref(), Some("10000000000000000"));
    }

    #[test]
    fn test_float_noise_suppressed() {
        assert_eq!(format_number(0.1 + 0.2).as_deref(), Some("0.3"));
        assert_eq!(format_number(1.1 * 3.0).as_deref(), Some("3.3"));
    }

    #[test]
    fn test_rounds_to_ten_places() {
        assert_eq!(format_number(1.0 / 3.0).as_deref(), Some("0.3333333333"));
        assert_eq!(format_number(2.0 / 3.0).as_deref(), Some("0.6666666667"));
        assert_eq!(format_number(-0.5).as_deref(), Some("-0.5"));
    }

    #[test]
    fn test_tiny_values_collapse_to_zero() {
        assert_eq!(format_number(1e-12).as_deref(), Some("0"));
        assert_eq!(format_number(-1e-12).as_deref(), Some("0"));
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number(f64::INFINITY), None);
        assert_eq!(format_number(f64::NEG_INFINITY), None);
        assert_eq!(format_number(f64::NAN), None);
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(group_thousands("1000000"), "1,000,000");
        assert_eq!(group_thousands("-1234.5678"), "-1,234.5678");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("0."), "0.");
        assert_eq!(group_thousands("12345"), "12,345");
    }
}
