//! Identifier validation for place and transition names.

use once_cell::sync::Lazy;
use regex::Regex;

const MAX_NAME_LENGTH: usize = 256;

static NAME_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_/]*$").unwrap());

/// True iff `s` is an admissible identifier for a place or transition:
/// non-empty, shorter than 256 characters, starting with an ASCII letter
/// and containing only ASCII letters, digits, underscore, or slash.
pub fn is_valid_name(s: &str) -> bool {
    s.len() < MAX_NAME_LENGTH && NAME_SHAPE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(!is_valid_name(""));
    }

    #[test]
    fn accepts_letters_digits_underscore_slash() {
        assert!(is_valid_name("Test/Name_123"));
    }

    #[test]
    fn rejects_leading_slash() {
        assert!(!is_valid_name("/test"));
    }

    #[test]
    fn rejects_disallowed_punctuation() {
        assert!(!is_valid_name("Test*Name"));
    }

    #[test]
    fn rejects_names_at_or_over_length_limit() {
        let long = "a".repeat(256);
        assert!(!is_valid_name(&long));
        let ok = "a".repeat(255);
        assert!(is_valid_name(&ok));
    }
}
