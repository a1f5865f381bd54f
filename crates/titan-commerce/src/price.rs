//! Lenient price parsing.

/// Parse the numeric value of a price field.
///
/// Non-numeric characters are stripped first, then the longest parseable
/// numeric prefix wins: `"$10"` is 10.0, `"1,299.50"` is 1299.5,
/// `"12.34.56"` is 12.34. A field with no numeric content contributes
/// 0.0 rather than failing, so one junk price never aborts a checkout.
#[must_use]
pub fn parse_price(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let mut value = 0.0;
    for end in 1..=cleaned.len() {
        if let Ok(parsed) = cleaned[..end].parse::<f64>() {
            value = parsed;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_symbol_stripped() {
        assert!((parse_price("$10") - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_plain_number() {
        assert!((parse_price("5") - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_thousands_separator() {
        assert!((parse_price("1,299.50") - 1299.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_numeric_is_zero() {
        assert!(parse_price("free").abs() < f64::EPSILON);
        assert!(parse_price("").abs() < f64::EPSILON);
    }

    #[test]
    fn test_numeric_prefix_wins() {
        assert!((parse_price("12.34.56") - 12.34).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decimal_only() {
        assert!((parse_price("USD 0.99") - 0.99).abs() < f64::EPSILON);
    }
}
