//! Declarative rule table.
//!
//! Each field maps to a [`FieldPolicy`]: an optional default for blank input
//! and an ordered list of [`FieldRule`]s. A rule pairs a [`RulePredicate`]
//! with a [`RuleAction`]; the engine applies the first rule whose predicate
//! matches the trimmed value.
//!
//! The default table is built once and shared as
//! `&'static NormalizationRuleSet` via [`default_rule_set`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use formd_model::FieldKind;

/// Width ZIP codes are padded to.
pub const ZIP_CODE_WIDTH: usize = 5;

/// Maximum issuer name length, in characters.
pub const ISSUER_NAME_MAX_LEN: usize = 100;

/// Value used for a blank city.
pub const UNKNOWN_CITY: &str = "UNKNOWN";

/// When a rule applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum RulePredicate {
    /// Exact, case-sensitive match on the trimmed value.
    Exact(String),
    /// Always applies.
    Any,
}

impl RulePredicate {
    pub fn matches(&self, trimmed: &str) -> bool {
        match self {
            Self::Exact(expected) => expected == trimmed,
            Self::Any => true,
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

impl fmt::Display for RulePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(value) => write!(f, "= {value:?}"),
            Self::Any => f.write_str("*"),
        }
    }
}

/// What a matching rule produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleAction {
    /// Return a fixed replacement; `None` is the null marker.
    Replace { value: Option<String> },
    /// Left-pad to `width` characters with `fill`.
    PadLeft { width: usize, fill: char },
    /// Keep digits; ten digits become `DDD-DDD-DDDD`, anything else is null.
    FormatPhone,
    /// Strip all leading and trailing double quotes and whitespace, truncate
    /// to `max_len` characters, strip again; empty becomes null.
    CleanName { max_len: usize },
    /// Return the trimmed value unchanged.
    Passthrough,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Replace { value: Some(value) } => write!(f, "replace with {value:?}"),
            Self::Replace { value: None } => f.write_str("replace with null"),
            Self::PadLeft { width, fill } => write!(f, "pad left to {width} with {fill:?}"),
            Self::FormatPhone => f.write_str("format as DDD-DDD-DDDD"),
            Self::CleanName { max_len } => {
                write!(f, "strip quotes, truncate to {max_len}")
            }
            Self::Passthrough => f.write_str("pass through"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRule {
    pub id: String,
    pub predicate: RulePredicate,
    pub action: RuleAction,
}

impl FieldRule {
    pub fn new(id: impl Into<String>, predicate: RulePredicate, action: RuleAction) -> Self {
        Self {
            id: id.into(),
            predicate,
            action,
        }
    }

    /// Exact-match correction: `raw` becomes `replacement`.
    pub fn exact(id: impl Into<String>, raw: impl Into<String>, replacement: Option<&str>) -> Self {
        Self::new(
            id,
            RulePredicate::Exact(raw.into()),
            RuleAction::Replace {
                value: replacement.map(str::to_string),
            },
        )
    }

    /// Unconditional rule.
    pub fn always(id: impl Into<String>, action: RuleAction) -> Self {
        Self::new(id, RulePredicate::Any, action)
    }
}

/// Normalization policy for one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldPolicy {
    /// Returned for blank input instead of the null marker.
    pub blank_default: Option<String>,
    pub rules: Vec<FieldRule>,
}

impl FieldPolicy {
    /// Insert an exact-match rule after existing exact rules and before any
    /// unconditional rule, so corrections still short-circuit structural
    /// normalization.
    fn insert_correction(&mut self, rule: FieldRule) {
        let position = self
            .rules
            .iter()
            .position(|existing| !existing.predicate.is_exact())
            .unwrap_or(self.rules.len());
        self.rules.insert(position, rule);
    }
}

/// Immutable per-field rule table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationRuleSet {
    fields: BTreeMap<String, FieldPolicy>,
}

impl NormalizationRuleSet {
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Start a builder seeded with this table's rules.
    pub fn to_builder(&self) -> RuleSetBuilder {
        RuleSetBuilder {
            fields: self.fields.clone(),
        }
    }

    pub fn policy(&self, field_name: &str) -> Option<&FieldPolicy> {
        self.fields.get(field_name)
    }

    /// Fields with a policy, in name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldPolicy)> {
        self.fields
            .iter()
            .map(|(name, policy)| (name.as_str(), policy))
    }

    pub fn rule_count(&self) -> usize {
        self.fields.values().map(|policy| policy.rules.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RuleSetBuilder {
    fields: BTreeMap<String, FieldPolicy>,
}

impl RuleSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to a field's list.
    #[must_use]
    pub fn rule(mut self, field_name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields
            .entry(field_name.into())
            .or_default()
            .rules
            .push(rule);
        self
    }

    /// Add an exact-match correction ahead of the field's unconditional rules.
    #[must_use]
    pub fn correction(mut self, field_name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields
            .entry(field_name.into())
            .or_default()
            .insert_correction(rule);
        self
    }

    /// Set the value returned for blank input.
    #[must_use]
    pub fn blank_default(mut self, field_name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.entry(field_name.into()).or_default().blank_default = Some(value.into());
        self
    }

    pub fn build(self) -> NormalizationRuleSet {
        NormalizationRuleSet {
            fields: self.fields,
        }
    }
}

static DEFAULT_RULE_SET: OnceLock<NormalizationRuleSet> = OnceLock::new();

/// Returns the built-in rule table.
///
/// The table is built on first access and never changes afterwards.
pub fn default_rule_set() -> &'static NormalizationRuleSet {
    DEFAULT_RULE_SET.get_or_init(build_default_rule_set)
}

fn field(kind: FieldKind) -> &'static str {
    kind.field_name().unwrap_or_default()
}

fn build_default_rule_set() -> NormalizationRuleSet {
    let state = field(FieldKind::State);
    let zip_code = field(FieldKind::ZipCode);
    let phone_number = field(FieldKind::PhoneNumber);
    let issuer_name = field(FieldKind::IssuerName);
    let city = field(FieldKind::City);

    NormalizationRuleSet::builder()
        // Known state typos
        .rule(state, FieldRule::exact("state.calfornia", "Calfornia", Some("California")))
        .rule(state, FieldRule::exact("state.texs", "Texs", Some("Texas")))
        // Placeholder ZIP, then width padding
        .rule(zip_code, FieldRule::exact("zip_code.placeholder", "00000", None))
        .rule(
            zip_code,
            FieldRule::always(
                "zip_code.pad",
                RuleAction::PadLeft {
                    width: ZIP_CODE_WIDTH,
                    fill: '0',
                },
            ),
        )
        .rule(
            phone_number,
            FieldRule::always("phone_number.format", RuleAction::FormatPhone),
        )
        // A lone stray quote is cleared outright
        .rule(issuer_name, FieldRule::exact("issuer_name.stray_quote", "\"", Some("")))
        .rule(
            issuer_name,
            FieldRule::always(
                "issuer_name.clean",
                RuleAction::CleanName {
                    max_len: ISSUER_NAME_MAX_LEN,
                },
            ),
        )
        .blank_default(city, UNKNOWN_CITY)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_covers_known_fields() {
        let rules = default_rule_set();
        for kind in FieldKind::known() {
            let name = kind.field_name().unwrap();
            assert!(rules.policy(name).is_some(), "missing policy for {name}");
        }
        assert!(rules.policy("amount").is_none());
        assert_eq!(rules.rule_count(), 7);
    }

    #[test]
    fn default_table_is_shared() {
        assert!(std::ptr::eq(default_rule_set(), default_rule_set()));
    }

    #[test]
    fn corrections_are_inserted_before_structural_rules() {
        let rules = default_rule_set()
            .to_builder()
            .correction("zip_code", FieldRule::exact("zip_code.extra", "99999", None))
            .build();
        let ids: Vec<_> = rules
            .policy("zip_code")
            .unwrap()
            .rules
            .iter()
            .map(|rule| rule.id.as_str())
            .collect();
        assert_eq!(ids, vec!["zip_code.placeholder", "zip_code.extra", "zip_code.pad"]);
    }

    #[test]
    fn correction_on_new_field_appends() {
        let rules = NormalizationRuleSet::builder()
            .correction("country", FieldRule::exact("country.usa", "USA", Some("US")))
            .build();
        assert_eq!(rules.policy("country").unwrap().rules.len(), 1);
    }

    #[test]
    fn predicates_match_exactly() {
        let predicate = RulePredicate::Exact("\"".to_string());
        assert!(predicate.matches("\""));
        assert!(!predicate.matches("\"Acme\""));
        assert!(RulePredicate::Any.matches(""));
    }
}
