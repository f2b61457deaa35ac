//! The field normalization engine.
//!
//! Order of evaluation, stopping at the first step that produces a value:
//!
//! 1. Trim surrounding whitespace.
//! 2. Blank input returns the field's blank default, if it has one.
//! 3. Generic null tokens (`""`, `N/A`, `NULL`, `NONE`) return `None`.
//! 4. The field's rules, in order; the first matching predicate wins.
//! 5. Otherwise the trimmed value is returned unchanged.
//!
//! Normalization never fails: malformed input degrades to `None` or passes
//! through.

use formd_model::NormalizedValue;

use crate::rules::{NormalizationRuleSet, RuleAction, default_rule_set};
use crate::structural::{clean_name, format_phone, pad_left};
use crate::tokens::is_null_token;

/// Normalize one value with the built-in rule table.
///
/// # Examples
///
/// ```
/// use formd_normalization::normalize;
///
/// assert_eq!(normalize("zip_code", "1234").as_deref(), Some("01234"));
/// assert_eq!(normalize("state", "Calfornia").as_deref(), Some("California"));
/// assert_eq!(normalize("phone_number", "N/A"), None);
/// ```
pub fn normalize(field_name: &str, raw_value: &str) -> NormalizedValue {
    default_rule_set().normalize(field_name, raw_value)
}

impl NormalizationRuleSet {
    /// Normalize one value with this rule table.
    pub fn normalize(&self, field_name: &str, raw_value: &str) -> NormalizedValue {
        let trimmed = raw_value.trim();
        let policy = self.policy(field_name);

        if trimmed.is_empty()
            && let Some(default) = policy.and_then(|policy| policy.blank_default.as_deref())
        {
            return Some(default.to_string());
        }

        if is_null_token(trimmed) {
            return None;
        }

        let Some(policy) = policy else {
            return Some(trimmed.to_string());
        };

        match policy
            .rules
            .iter()
            .find(|rule| rule.predicate.matches(trimmed))
        {
            Some(rule) => {
                tracing::trace!(field = %field_name, rule = %rule.id, "Rule matched");
                apply_action(&rule.action, trimmed)
            }
            None => Some(trimmed.to_string()),
        }
    }

    /// Normalize a value that may not be present as a string.
    ///
    /// Non-string input (`None`) is always the null marker.
    pub fn normalize_optional(&self, field_name: &str, raw_value: Option<&str>) -> NormalizedValue {
        raw_value.and_then(|raw| self.normalize(field_name, raw))
    }
}

fn apply_action(action: &RuleAction, trimmed: &str) -> NormalizedValue {
    match action {
        RuleAction::Replace { value } => value.clone(),
        RuleAction::PadLeft { width, fill } => Some(pad_left(trimmed, *width, *fill)),
        RuleAction::FormatPhone => format_phone(trimmed),
        RuleAction::CleanName { max_len } => clean_name(trimmed, *max_len),
        RuleAction::Passthrough => Some(trimmed.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::FieldRule;

    #[test]
    fn null_tokens_win_over_field_rules() {
        for field in ["zip_code", "phone_number", "issuer_name", "state", "city", "other"] {
            assert_eq!(normalize(field, " n/a "), None, "{field}");
            assert_eq!(normalize(field, "NULL"), None, "{field}");
            assert_eq!(normalize(field, "none"), None, "{field}");
        }
    }

    #[test]
    fn blank_city_defaults_to_unknown() {
        assert_eq!(normalize("city", "").as_deref(), Some("UNKNOWN"));
        assert_eq!(normalize("city", "   ").as_deref(), Some("UNKNOWN"));
        assert_eq!(normalize("city", "\t\n").as_deref(), Some("UNKNOWN"));
        assert_eq!(normalize("state", "   "), None);
    }

    #[test]
    fn exact_rules_match_whole_trimmed_value() {
        assert_eq!(normalize("state", "  Texs ").as_deref(), Some("Texas"));
        assert_eq!(normalize("state", "texs").as_deref(), Some("texs"));
        assert_eq!(normalize("state", "Texs County").as_deref(), Some("Texs County"));
    }

    #[test]
    fn replacement_can_be_empty_string() {
        assert_eq!(normalize("issuer_name", "\"").as_deref(), Some(""));
        assert_eq!(normalize("issuer_name", " \" ").as_deref(), Some(""));
    }

    #[test]
    fn optional_input_without_string_is_null() {
        let rules = default_rule_set();
        assert_eq!(rules.normalize_optional("city", None), None);
        assert_eq!(
            rules.normalize_optional("city", Some("Boston")).as_deref(),
            Some("Boston")
        );
    }

    #[test]
    fn passthrough_rule_trims() {
        let rules = NormalizationRuleSet::builder()
            .rule("code", FieldRule::always("code.keep", RuleAction::Passthrough))
            .build();
        assert_eq!(rules.normalize("code", "  A1 ").as_deref(), Some("A1"));
    }

    #[test]
    fn empty_rule_set_only_trims_and_nulls() {
        let rules = NormalizationRuleSet::default();
        assert_eq!(rules.normalize("zip_code", "1234").as_deref(), Some("1234"));
        assert_eq!(rules.normalize("city", ""), None);
    }
}
