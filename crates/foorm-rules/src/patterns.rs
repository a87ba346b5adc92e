// File: foorm-rules/src/patterns.rs
// Purpose: Compiled regular expressions shared by the rule hooks

use once_cell::sync::Lazy;
use regex::Regex;

// `name[param]`
pub static RULE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+?)\[(.+)\]$").unwrap());

pub static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

pub static INTEGER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+$").unwrap());

pub static DECIMAL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").unwrap());

pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

pub static EMAIL_LIST_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

pub static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^[a-z]+$").unwrap());

pub static ALPHA_NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").unwrap());

pub static ALPHA_DASH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_-]+$").unwrap());

pub static NATURAL_NO_ZERO_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*$").unwrap());

pub static IP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})\.){3}(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})$",
    )
    .unwrap()
});

// Matches any character that may not appear in base64
pub static BASE64_INVALID_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9/+=]").unwrap());

// ASCII digits only; `\d` is Unicode-aware here
pub static NUMERIC_DASH_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\-\s]+$").unwrap());

pub static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^((http|https)://([A-Za-z0-9_]+:?[A-Za-z0-9_]*@)?(\S+)|)(:[0-9]+)?(/|/([A-Za-z0-9_#!:.?+=&%@\-/]))?$",
    )
    .unwrap()
});

// Unanchored, like the date check it mirrors
pub static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_regex_splits_name_and_param() {
        let caps = RULE_REGEX.captures("min_length[6]").unwrap();
        assert_eq!(&caps[1], "min_length");
        assert_eq!(&caps[2], "6");

        assert!(RULE_REGEX.captures("required").is_none());
        assert!(RULE_REGEX.captures("min_length[]").is_none());
    }

    #[test]
    fn test_decimal_regex() {
        assert!(DECIMAL_REGEX.is_match("3.14"));
        assert!(DECIMAL_REGEX.is_match("-.5"));
        assert!(DECIMAL_REGEX.is_match("42"));
        assert!(!DECIMAL_REGEX.is_match("4."));
        assert!(!DECIMAL_REGEX.is_match("abc"));
    }

    #[test]
    fn test_digit_classes_are_ascii_only() {
        assert!(NUMERIC_DASH_REGEX.is_match("4111-1111 1111"));
        assert!(!NUMERIC_DASH_REGEX.is_match("١٢٣٤"));
        assert!(!DATE_REGEX.is_match("２０２４-01-01"));
        assert!(DATE_REGEX.is_match("2024-1-1"));
    }

    #[test]
    fn test_email_list_separator_requires_comma() {
        let parts: Vec<&str> = EMAIL_LIST_SEPARATOR.split("a@b.com ,  c@d.org").collect();
        assert_eq!(parts, ["a@b.com", "c@d.org"]);
        assert_eq!(EMAIL_LIST_SEPARATOR.split("a@b.com c@d.org").count(), 1);
    }
}
