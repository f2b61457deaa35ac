//! Generic null-token recognition.

/// Values that always mean "no value", compared case-insensitively after
/// trimming.
pub const NULL_TOKENS: &[&str] = &["", "N/A", "NULL", "NONE"];

/// Returns true if the (already trimmed) value is a generic null token.
///
/// # Examples
///
/// ```
/// use formd_normalization::is_null_token;
///
/// assert!(is_null_token("n/a"));
/// assert!(is_null_token("None"));
/// assert!(!is_null_token("NA"));
/// ```
pub fn is_null_token(trimmed: &str) -> bool {
    NULL_TOKENS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_every_token_in_any_case() {
        for token in NULL_TOKENS {
            assert!(is_null_token(token));
            assert!(is_null_token(&token.to_lowercase()));
        }
        assert!(is_null_token("nUlL"));
    }

    #[test]
    fn does_not_trim_or_match_substrings() {
        assert!(!is_null_token(" N/A"));
        assert!(!is_null_token("NONE SPECIFIED"));
        assert!(!is_null_token("NIL"));
    }
}
