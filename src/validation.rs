//! Email address syntax check.
//!
//! A deliberately loose check: it only filters out input that would
//! obviously waste a round trip. It is not RFC 5322 validation.

use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMAIL_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in EMAIL_RE: {}. This is a programming error.",
            EMAIL_PATTERN, e
        )
    })
});

/// Returns true iff `email` looks like `local@domain.tld`.
///
/// Each of the three parts must be non-empty and free of `@` and whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn test_accepts_simple_address() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(!is_valid_email(" a@b.com"));
        assert!(!is_valid_email("a@b.com\n"));
        assert!(!is_valid_email("a@b.com\t"));
    }

    #[test]
    fn test_dot_may_appear_anywhere_after_at() {
        // The domain part before the final dot may itself contain dots
        assert!(is_valid_email("x@a.b.c"));
        // A dot in the local part alone does not satisfy the domain rule
        assert!(!is_valid_email("x.y@localhost"));
    }
}
