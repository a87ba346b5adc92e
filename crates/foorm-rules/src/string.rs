//! String validation functions
//!
//! Lengths are counted in UTF-16 code units so that limits agree with the
//! `maxlength` attribute and `value.length` in the browser.

use crate::patterns::{
    ALPHA_DASH_REGEX, ALPHA_NUMERIC_REGEX, ALPHA_REGEX, BASE64_INVALID_REGEX, IP_REGEX,
    NUMERIC_REGEX, URL_REGEX,
};

/// Length of a value as the browser reports it
pub fn browser_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Parses a length parameter; only plain digit strings are accepted
fn parse_length(param: &str) -> Option<usize> {
    if !NUMERIC_REGEX.is_match(param) {
        return None;
    }
    param.parse().ok()
}

pub fn min_length(value: &str, param: &str) -> bool {
    parse_length(param).is_some_and(|min| browser_len(value) >= min)
}

pub fn max_length(value: &str, param: &str) -> bool {
    parse_length(param).is_some_and(|max| browser_len(value) <= max)
}

pub fn exact_length(value: &str, param: &str) -> bool {
    parse_length(param).is_some_and(|len| browser_len(value) == len)
}

pub fn is_alpha(value: &str) -> bool {
    ALPHA_REGEX.is_match(value)
}

pub fn is_alpha_numeric(value: &str) -> bool {
    ALPHA_NUMERIC_REGEX.is_match(value)
}

/// Letters, digits, underscores and dashes
pub fn is_alpha_dash(value: &str) -> bool {
    ALPHA_DASH_REGEX.is_match(value)
}

pub fn is_valid_ip(value: &str) -> bool {
    IP_REGEX.is_match(value)
}

pub fn is_valid_base64(value: &str) -> bool {
    !BASE64_INVALID_REGEX.is_match(value)
}

pub fn is_valid_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}
