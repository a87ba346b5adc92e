//! Email validation functions

use crate::patterns::{EMAIL_LIST_SEPARATOR, EMAIL_REGEX};

/// Validates a single email address
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validates a comma-separated list of addresses; whitespace around commas is ignored
///
/// A trailing separator produces an empty entry, which fails.
pub fn are_valid_emails(list: &str) -> bool {
    EMAIL_LIST_SEPARATOR.split(list).all(is_valid_email)
}
