//! Result formatting for display

use super::registry::Unit;

/// Two decimal places, e.g. `1,234.50`
pub const DEFAULT_DECIMAL_PLACES: usize = 2;

// Helper to add thousands separators to a string of digits
fn add_thousands_separators(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}

/// Format a number with thousands separators and a fixed number of decimals
///
/// Examples: 1234.5 -> "1,234.50", -1234567.891 -> "-1,234,567.89"
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "∞".to_string() } else { "-∞".to_string() };
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut formatted = String::new();
    if value.is_sign_negative() {
        formatted.push('-');
    }
    formatted.push_str(&add_thousands_separators(integer));
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// Render a finished conversion, e.g. "1,234.50 Meters = 4,050.20 Feet"
pub fn format_conversion(value: f64, from: Unit, result: f64, to: Unit, decimals: usize) -> String {
    format!(
        "{} {} = {} {}",
        format_number(value, decimals),
        from.name(),
        format_number(result, decimals),
        to.name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5, 2), "1,234.50");
        assert_eq!(format_number(0.0, 2), "0.00");
        assert_eq!(format_number(12.0, 2), "12.00");
        assert_eq!(format_number(123.456, 2), "123.46");
        assert_eq!(format_number(1_000_000.0, 2), "1,000,000.00");
        assert_eq!(format_number(-1_234_567.891, 2), "-1,234,567.89");
        assert_eq!(format_number(999.999, 2), "1,000.00");
    }

    #[test]
    fn test_negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(format_number(-0.0, 2), "-0.00");
        assert_eq!(format_number(-0.001, 2), "-0.00");
        assert_eq!(format_number(0.001, 2), "0.00");
    }

    #[test]
    fn test_format_number_decimals() {
        assert_eq!(format_number(1234.0, 0), "1,234");
        assert_eq!(format_number(3.28084, 4), "3.2808");
    }

    #[test]
    fn test_format_special_values() {
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_number(f64::INFINITY, 2), "∞");
        assert_eq!(format_number(f64::NEG_INFINITY, 2), "-∞");
        assert_eq!(format_number(1e20, 2), "100,000,000,000,000,000,000.00");
    }

    #[test]
    fn test_format_conversion() {
        assert_eq!(
            format_conversion(1.0, Unit::Meters, 3.28084, Unit::Feet, DEFAULT_DECIMAL_PLACES),
            "1.00 Meters = 3.28 Feet"
        );
    }
}
