//! Numeric form input
//!
//! Form fields never reject input. Anything that does not read as a number
//! becomes zero.

use rust_decimal::Decimal;

/// Parse a cost, price or promotion field as typed into the form.
///
/// Every character other than an ASCII digit or `.` is dropped before
/// parsing, so signs, currency symbols and thousands separators disappear.
/// Empty or unparseable results (for example `"1.2.3"` or `"."`) become zero.
pub fn sanitize_amount(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    parse_or_zero(&cleaned)
}

/// Parse a numeric value, keeping its sign, falling back to zero.
///
/// Surrounding whitespace is ignored and an empty string is zero. A
/// well-formed number too large for [`Decimal`] saturates to
/// [`Decimal::MAX`] (or [`Decimal::MIN`] when negative).
pub fn parse_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Decimal::ZERO;
    }

    match trimmed.parse::<Decimal>() {
        Ok(value) => value,
        Err(_) if is_numeric_literal(trimmed) => {
            if trimmed.starts_with('-') {
                Decimal::MIN
            } else {
                Decimal::MAX
            }
        }
        Err(_) => Decimal::ZERO,
    }
}

/// Optional sign, digits with at most one `.`, and at least one digit.
fn is_numeric_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['-', '+']).unwrap_or(s);

    unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_becomes_zero() {
        assert_eq!(sanitize_amount("abc"), Decimal::ZERO, "letters only");
        assert_eq!(sanitize_amount(""), Decimal::ZERO, "empty field");
        assert_eq!(sanitize_amount("-"), Decimal::ZERO, "lone sign");
        assert_eq!(sanitize_amount("1.2.3"), Decimal::ZERO, "two decimal points");
    }

    #[test]
    fn non_numeric_characters_are_stripped() {
        assert_eq!(
            sanitize_amount("£15.00"),
            Decimal::new(1500, 2),
            "currency symbol should be dropped"
        );
        assert_eq!(
            sanitize_amount("1,250.5"),
            Decimal::new(12505, 1),
            "thousands separator should be dropped"
        );
        assert_eq!(
            sanitize_amount(" 7 "),
            Decimal::new(7, 0),
            "whitespace should be dropped"
        );
    }

    #[test]
    fn sanitizing_drops_the_sign() {
        assert_eq!(
            sanitize_amount("-5"),
            Decimal::new(5, 0),
            "minus sign is not a digit and should be stripped"
        );
    }

    #[test]
    fn oversized_numbers_saturate() {
        assert_eq!(
            sanitize_amount("123456789012345678901234567890"),
            Decimal::MAX,
            "too many digits should saturate rather than become zero"
        );
        assert_eq!(
            parse_or_zero("-123456789012345678901234567890"),
            Decimal::MIN,
            "negative overflow should saturate to the minimum"
        );
        assert_eq!(
            parse_or_zero("12345678901234567890123456789x"),
            Decimal::ZERO,
            "malformed input is still zero"
        );
    }

    #[test]
    fn parse_or_zero_keeps_sign() {
        assert_eq!(parse_or_zero("-5"), Decimal::new(-5, 0), "sign should be kept");
        assert_eq!(
            parse_or_zero(" 27.10 "),
            Decimal::new(2710, 2),
            "surrounding whitespace should be ignored"
        );
    }

    #[test]
    fn parse_or_zero_rejects_garbage() {
        assert_eq!(parse_or_zero("abc"), Decimal::ZERO, "letters only");
        assert_eq!(parse_or_zero("   "), Decimal::ZERO, "blank field");
        assert_eq!(parse_or_zero("-"), Decimal::ZERO, "lone sign");
    }
}
