//! Recipient address validation

use regex::Regex;
use std::sync::OnceLock;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Whether `address` looks like an email address
///
/// A deliberately simple shape check: local part from `[A-Za-z0-9._%+-]`,
/// `@`, domain from `[A-Za-z0-9.-]`, a dot and a TLD of two or more letters.
///
/// # Examples
///
/// ```
/// use checkmate_mailer::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("a@b"));
/// ```
pub fn validate_email(address: &str) -> bool {
    EMAIL_PATTERN
        .get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
                .expect("this regex should always be valid")
        })
        .is_match(address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_addresses() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("a.b+c@sub.domain.io"));
        assert!(validate_email("student_01%x@school.ac.kr"));
    }

    #[test]
    fn test_invalid_addresses() {
        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("@b.co"));
        assert!(!validate_email("a@b.c"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email(" a@b.co"));
        assert!(!validate_email("a@b.co\n"));
        assert!(!validate_email(""));
    }
}
