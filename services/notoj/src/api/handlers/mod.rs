//! API handlers and shared utilities for Notoj.
//!
//! This module organizes the service's route handlers and provides common
//! functions for input validation and time handling.

pub mod auth;
pub mod error;
pub mod health;
pub mod notes;
pub mod root;

use regex::Regex;
use std::time::SystemTime;

/// Lightweight email sanity check used by auth handlers before persisting data.
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Display names are letters and whitespace only.
pub fn valid_name(name: &str) -> bool {
    !name.is_empty() && Regex::new(r"^[A-Za-z\s]+$").is_ok_and(|re| re.is_match(name))
}

/// Login passwords must be at least 12 characters with a lowercase letter, an
/// uppercase letter, a digit, and a symbol. Checked by counting character
/// classes; the `regex` crate has no lookahead.
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= 12
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

/// Unix seconds for token issue/expiry validation.
pub(crate) fn now_unix_seconds() -> i64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_simple() {
        assert!(valid_email("user@example.com"));
        assert!(valid_email("name.surname@example.co"));
    }

    #[test]
    fn valid_email_rejects_missing_parts() {
        assert!(!valid_email("user.example.com"));
        assert!(!valid_email("missing-domain@"));
        assert!(!valid_email("spaces in@example.com"));
    }

    #[test]
    fn valid_email_is_case_sensitive_passthrough() {
        // The check accepts either case; lookups stay exact-match.
        assert!(valid_email("Alice@Example.COM"));
    }

    #[test]
    fn valid_name_accepts_letters_and_spaces() {
        assert!(valid_name("Alice"));
        assert!(valid_name("Alice Liddell"));
    }

    #[test]
    fn valid_name_rejects_digits_and_punctuation() {
        assert!(!valid_name(""));
        assert!(!valid_name("Alice2"));
        assert!(!valid_name("Alice!"));
    }

    #[test]
    fn valid_password_accepts_all_classes() {
        assert!(valid_password("Str0ng-Enough!"));
    }

    #[test]
    fn valid_password_rejects_short() {
        assert!(!valid_password("Str0ng-Pwd!"));
    }

    #[test]
    fn valid_password_rejects_missing_class() {
        assert!(!valid_password("str0ng-enough!")); // no uppercase
        assert!(!valid_password("STR0NG-ENOUGH!")); // no lowercase
        assert!(!valid_password("Strong-Enough!")); // no digit
        assert!(!valid_password("Str0ngEnough1")); // no symbol
    }

    #[test]
    fn now_unix_seconds_is_positive() {
        assert!(now_unix_seconds() > 0);
    }
}
