#![allow(missing_docs)]

use formd_normalization::{NULL_TOKENS, normalize};
use proptest::prelude::*;

const FIELDS: &[&str] = &["state", "zip_code", "phone_number", "issuer_name", "city", "amount"];

fn field_name() -> impl Strategy<Value = &'static str> {
    (0..FIELDS.len()).prop_map(|idx| FIELDS[idx])
}

/// Null tokens in random case with random surrounding whitespace.
fn null_token() -> impl Strategy<Value = String> {
    (
        0..NULL_TOKENS.len(),
        any::<u32>(),
        "[ \t]{0,3}",
        "[ \t]{0,3}",
    )
        .prop_map(|(idx, mask, left, right)| {
            let token: String = NULL_TOKENS[idx]
                .chars()
                .enumerate()
                .map(|(pos, ch)| {
                    if mask & (1 << pos) == 0 {
                        ch.to_ascii_lowercase()
                    } else {
                        ch
                    }
                })
                .collect();
            format!("{left}{token}{right}")
        })
}

/// Names with quotes and spaces placed around the 100-character cut.
fn quoted_near_limit() -> impl Strategy<Value = String> {
    ("[\" ]{0,3}", 94usize..104, "[a\" ]{0,4}").prop_map(|(lead, body, tail)| {
        format!("{lead}{}{tail}", "a".repeat(body))
    })
}

/// Raw values: free text with stray or nested quotes, quoted names near the
/// truncation limit, phone-like strings and known corrections.
fn raw_value() -> impl Strategy<Value = String> {
    prop_oneof![
        "[A-Za-z0-9 ,.&()/\"-]{0,120}",
        "[A-Za-z0-9 ,.&()/\"-]{0,120}".prop_map(|inner| format!("\"\"{inner}\"\"")),
        quoted_near_limit(),
        "[0-9() .-]{0,16}",
        Just("Calfornia".to_string()),
        Just("00000".to_string()),
    ]
}

proptest! {
    #[test]
    fn null_tokens_are_null_for_every_field(field in field_name(), token in null_token()) {
        let result = normalize(field, &token);
        if field == "city" && token.trim().is_empty() {
            prop_assert_eq!(result.as_deref(), Some("UNKNOWN"));
        } else {
            prop_assert_eq!(result, None);
        }
    }

    #[test]
    fn renormalizing_output_is_stable_or_null(field in field_name(), raw in raw_value()) {
        if let Some(once) = normalize(field, &raw) {
            let twice = normalize(field, &once);
            prop_assert!(
                twice.is_none() || twice.as_deref() == Some(once.as_str()),
                "{field}: {raw:?} -> {once:?} -> {twice:?}"
            );
            if let Some(twice) = twice {
                let again = normalize(field, &twice);
                prop_assert_eq!(again, Some(twice));
            }
        }
    }

    #[test]
    fn output_is_always_trimmed(field in field_name(), raw in raw_value()) {
        if let Some(value) = normalize(field, &raw) {
            prop_assert_eq!(value.trim(), value.as_str());
        }
    }
}
