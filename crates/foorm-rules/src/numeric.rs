//! Numeric validation functions

use crate::patterns::{
    DECIMAL_REGEX, INTEGER_REGEX, NATURAL_NO_ZERO_REGEX, NUMERIC_DASH_REGEX, NUMERIC_REGEX,
};

/// Digits only
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

pub fn is_integer(value: &str) -> bool {
    INTEGER_REGEX.is_match(value)
}

pub fn is_decimal(value: &str) -> bool {
    DECIMAL_REGEX.is_match(value)
}

/// Zero or a positive whole number
pub fn is_natural(value: &str) -> bool {
    NUMERIC_REGEX.is_match(value)
}

pub fn is_natural_no_zero(value: &str) -> bool {
    NATURAL_NO_ZERO_REGEX.is_match(value)
}

/// Compares a decimal value against a numeric bound
fn compare(value: &str, bound: &str, accept: impl Fn(f64, f64) -> bool) -> bool {
    if !is_decimal(value) {
        return false;
    }
    match (value.parse::<f64>(), bound.trim().parse::<f64>()) {
        (Ok(value), Ok(bound)) => accept(value, bound),
        _ => false,
    }
}

pub fn greater_than(value: &str, bound: &str) -> bool {
    compare(value, bound, |v, b| v > b)
}

pub fn less_than(value: &str, bound: &str) -> bool {
    compare(value, bound, |v, b| v < b)
}

/// Luhn checksum over the digits of a card number; dashes and spaces allowed
pub fn is_valid_credit_card(value: &str) -> bool {
    if !NUMERIC_DASH_REGEX.is_match(value) {
        return false;
    }

    let checksum: u32 = value
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, digit)| {
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats() {
        assert!(is_numeric("0123"));
        assert!(!is_numeric("-1"));
        assert!(is_integer("-12"));
        assert!(!is_integer("1.5"));
        assert!(is_decimal("-1.5"));
        assert!(is_decimal(".5"));
        assert!(!is_decimal("1e5"));
    }

    #[test]
    fn test_natural_numbers() {
        assert!(is_natural("0"));
        assert!(is_natural("42"));
        assert!(!is_natural("-1"));
        assert!(is_natural_no_zero("42"));
        assert!(!is_natural_no_zero("0"));
        assert!(!is_natural_no_zero("042"));
    }

    #[test]
    fn test_bounds() {
        assert!(greater_than("10", "5"));
        assert!(!greater_than("5", "5"));
        assert!(less_than("4.99", "5"));
        assert!(!less_than("abc", "5"));
        assert!(!greater_than("10", "five"));
    }

    #[test]
    fn test_credit_cards() {
        assert!(is_valid_credit_card("4111111111111111"));
        assert!(is_valid_credit_card("4111-1111-1111-1111"));
        assert!(is_valid_credit_card("4111 1111 1111 1111"));
        assert!(!is_valid_credit_card("4111111111111112"));
        assert!(!is_valid_credit_card("4111x1111"));
        // Arabic-Indic digits would otherwise sum to a zero checksum
        assert!(!is_valid_credit_card("١٢٣٤"));
        assert!(!is_valid_credit_card("٤١١١ ١١١١ ١١١١ ١١١١"));
    }
}
