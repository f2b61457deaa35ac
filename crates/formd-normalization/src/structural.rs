//! Structural value rewrites used by [`RuleAction`](crate::RuleAction).

/// Left-pad `value` with `fill` to `width` characters.
///
/// # Examples
///
/// ```
/// use formd_normalization::structural::pad_left;
///
/// assert_eq!(pad_left("1234", 5, '0'), "01234");
/// assert_eq!(pad_left("123456", 5, '0'), "123456");
/// ```
pub fn pad_left(value: &str, width: usize, fill: char) -> String {
    let len = value.chars().count();
    if len >= width {
        return value.to_string();
    }
    let mut padded = String::with_capacity(value.len() + (width - len) * fill.len_utf8());
    padded.extend(std::iter::repeat_n(fill, width - len));
    padded.push_str(value);
    padded
}

/// Reformat a phone number as `DDD-DDD-DDDD`.
///
/// Only ASCII digits count; other Unicode decimal digits (e.g. Arabic-Indic)
/// are dropped along with punctuation. Returns `None` unless exactly ten
/// digits are present.
///
/// # Examples
///
/// ```
/// use formd_normalization::structural::format_phone;
///
/// assert_eq!(format_phone("(123) 456-7890").as_deref(), Some("123-456-7890"));
/// assert_eq!(format_phone("1234567"), None);
/// ```
pub fn format_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return None;
    }
    Some(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]))
}

/// Strip every leading and trailing double quote, along with any whitespace
/// between them.
///
/// Quotes do not need to be balanced. The result never starts or ends with
/// a quote or whitespace.
///
/// # Examples
///
/// ```
/// use formd_normalization::structural::strip_wrapping_quotes;
///
/// assert_eq!(strip_wrapping_quotes(" \"Acme Corp\" "), "Acme Corp");
/// assert_eq!(strip_wrapping_quotes("\"\"Acme\"\""), "Acme");
/// assert_eq!(strip_wrapping_quotes("Acme \"West\" LLC"), "Acme \"West\" LLC");
/// ```
pub fn strip_wrapping_quotes(value: &str) -> &str {
    let mut current = value.trim();
    loop {
        let next = current.trim_matches('"').trim();
        if next.len() == current.len() {
            return next;
        }
        current = next;
    }
}

/// Clean a name: unwrap quotes, truncate to `max_len` characters.
///
/// Quotes and whitespace exposed by truncation are stripped as well, so
/// cleaning the result again returns it unchanged. Returns `None` when
/// nothing is left.
pub fn clean_name(value: &str, max_len: usize) -> Option<String> {
    let stripped = strip_wrapping_quotes(value);
    let cleaned = match stripped.char_indices().nth(max_len) {
        Some((cut, _)) => strip_wrapping_quotes(&stripped[..cut]),
        None => stripped,
    };
    if cleaned.is_empty() {
        return None;
    }
    Some(cleaned.to_string())
}
