//! Rule override loading.
//!
//! Overrides are exact-match corrections read from a CSV file:
//!
//! ```text
//! field,raw,replacement,null
//! state,Calif.,California,
//! zip_code,99999,,yes
//! ```
//!
//! A row whose `null` cell is truthy maps `raw` to the null marker; otherwise
//! `raw` maps to `replacement`, which may be empty. The `replacement` and
//! `null` columns are optional.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{NormalizationError, Result};
use crate::rules::{FieldRule, NormalizationRuleSet, RuleSetBuilder, default_rule_set};
use crate::tokens::is_null_token;

/// One exact-match correction read from an override file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverride {
    pub field: String,
    pub raw: String,
    pub replacement: Option<String>,
    /// 1-based line in the source file.
    pub line: u64,
}

impl RuleOverride {
    pub fn rule_id(&self) -> String {
        format!("{}.override.{}", self.field, self.line)
    }

    fn to_rule(&self) -> FieldRule {
        FieldRule::exact(self.rule_id(), self.raw.clone(), self.replacement.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct RuleRow {
    field: String,
    raw: String,
    #[serde(default)]
    replacement: String,
    #[serde(default)]
    null: Option<String>,
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "1"
    )
}

/// Load overrides from a CSV file.
///
/// # Errors
///
/// Fails when the file is missing or unreadable, a row cannot be parsed,
/// or a row has a blank field name or blank raw value.
pub fn load_rule_overrides(path: &Path) -> Result<Vec<RuleOverride>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NormalizationError::RulesNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NormalizationError::RulesRead {
                path: path.to_path_buf(),
                source: e.into(),
            }
        }
    })?;
    parse_rule_overrides(file, path)
}

/// Parse overrides from any reader; `source` is used in errors and logs.
pub fn parse_rule_overrides<R: Read>(reader: R, source: &Path) -> Result<Vec<RuleOverride>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let read_error = |e: csv::Error| NormalizationError::RulesRead {
        path: source.to_path_buf(),
        source: e,
    };

    let headers = reader.headers().map_err(read_error)?.clone();
    let mut overrides = Vec::new();

    for result in reader.records() {
        let record = result.map_err(read_error)?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: RuleRow = record.deserialize(Some(&headers)).map_err(read_error)?;

        let invalid = |reason: &str| NormalizationError::InvalidRule {
            path: source.to_path_buf(),
            line,
            reason: reason.to_string(),
        };

        let field = row.field.trim();
        if field.is_empty() {
            return Err(invalid("field is empty"));
        }
        let raw = row.raw.trim();
        if raw.is_empty() {
            return Err(invalid("raw value is empty"));
        }
        if is_null_token(raw) {
            tracing::warn!(
                file = %source.display(),
                line,
                field = %field,
                "Override matches a null token and will never apply"
            );
        }

        let replacement = if row.null.as_deref().is_some_and(is_truthy) {
            None
        } else {
            Some(row.replacement)
        };

        overrides.push(RuleOverride {
            field: field.to_string(),
            raw: raw.to_string(),
            replacement,
            line,
        });
    }

    tracing::debug!(
        file = %source.display(),
        count = overrides.len(),
        "Loaded rule overrides"
    );
    Ok(overrides)
}

/// Add overrides to a builder, ahead of each field's structural rules.
pub fn apply_overrides(mut builder: RuleSetBuilder, overrides: &[RuleOverride]) -> RuleSetBuilder {
    for rule_override in overrides {
        builder = builder.correction(rule_override.field.clone(), rule_override.to_rule());
    }
    builder
}

/// The default rule table extended with overrides from `path`.
pub fn load_rule_set_with_overrides(path: &Path) -> Result<NormalizationRuleSet> {
    let overrides = load_rule_overrides(path)?;
    Ok(apply_overrides(default_rule_set().to_builder(), &overrides).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Result<Vec<RuleOverride>> {
        parse_rule_overrides(content.as_bytes(), Path::new("rules.csv"))
    }

    #[test]
    fn parses_replacements_and_nulls() {
        let overrides = parse(
            "field,raw,replacement,null\n\
             state, Calif. ,California,\n\
             zip_code,99999,,yes\n\
             issuer_name,-,,\n",
        )
        .unwrap();

        assert_eq!(overrides.len(), 3);
        assert_eq!(overrides[0].raw, "Calif.");
        assert_eq!(overrides[0].replacement.as_deref(), Some("California"));
        assert_eq!(overrides[0].line, 2);
        assert_eq!(overrides[1].replacement, None);
        assert_eq!(overrides[2].replacement.as_deref(), Some(""));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let overrides = parse("field,raw\nstate,TX\n").unwrap();
        assert_eq!(overrides[0].replacement.as_deref(), Some(""));
    }

    #[test]
    fn rejects_blank_field() {
        let err = parse("field,raw,replacement\n ,Calif.,California\n").unwrap_err();
        assert!(matches!(
            err,
            NormalizationError::InvalidRule { line: 2, .. }
        ));
    }

    #[test]
    fn rejects_missing_required_column() {
        let err = parse("field,replacement\nstate,California\n").unwrap_err();
        assert!(matches!(err, NormalizationError::RulesRead { .. }));
    }

    #[test]
    fn overrides_apply_before_structural_rules() {
        let overrides = parse("field,raw,replacement,null\nzip_code,123,,true\n").unwrap();
        let rules = apply_overrides(default_rule_set().to_builder(), &overrides).build();

        assert_eq!(rules.normalize("zip_code", "123"), None);
        assert_eq!(rules.normalize("zip_code", "124").as_deref(), Some("00124"));
    }
}
