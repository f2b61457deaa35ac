//! Row-level normalization.

use serde::Serialize;
use tracing::{debug, info};

use formd_model::{NormalizedRecord, RawRecord};

use crate::rules::NormalizationRuleSet;

/// Normalize every field of a record, keeping field order.
pub fn normalize_record(record: &RawRecord, rules: &NormalizationRuleSet) -> NormalizedRecord {
    let mut normalized = NormalizedRecord::with_capacity(record.len());
    for field in record.iter() {
        normalized.push(field.name.clone(), rules.normalize(&field.name, &field.raw));
    }
    normalized
}

/// Per-field counts collected during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldStats {
    pub field: String,
    /// Values that normalized to the null marker.
    pub nulls: usize,
    /// Values whose output differs from the trimmed input.
    pub rewritten: usize,
}

/// Outcome counts for a batch of rows.
///
/// `fields` is in first-seen order, which matches the column order of the
/// cleaned records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizationSummary {
    pub rows: usize,
    pub fields: Vec<FieldStats>,
}

impl NormalizationSummary {
    pub fn field(&self, name: &str) -> Option<&FieldStats> {
        self.fields.iter().find(|stats| stats.field == name)
    }

    pub fn total_nulls(&self) -> usize {
        self.fields.iter().map(|stats| stats.nulls).sum()
    }

    pub fn total_rewritten(&self) -> usize {
        self.fields.iter().map(|stats| stats.rewritten).sum()
    }

    fn record(&mut self, field: &str, raw: &str, value: Option<&str>) {
        let index = match self.fields.iter().position(|stats| stats.field == field) {
            Some(index) => index,
            None => {
                self.fields.push(FieldStats {
                    field: field.to_string(),
                    ..FieldStats::default()
                });
                self.fields.len() - 1
            }
        };
        let stats = &mut self.fields[index];
        match value {
            None => stats.nulls += 1,
            Some(value) if value != raw.trim() => stats.rewritten += 1,
            Some(_) => {}
        }
    }
}

/// Applies a rule table to rows, optionally projecting a fixed field list.
///
/// With a projection, every output record has exactly the projected fields
/// in projection order; a field missing from the input row is normalized
/// as the empty string. Without one, every input field is kept.
#[derive(Debug, Clone)]
pub struct RecordNormalizer<'a> {
    rules: &'a NormalizationRuleSet,
    projection: Option<Vec<String>>,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(rules: &'a NormalizationRuleSet) -> Self {
        Self {
            rules,
            projection: None,
        }
    }

    #[must_use]
    pub fn with_projection<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.projection = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn projection(&self) -> Option<&[String]> {
        self.projection.as_deref()
    }

    /// Clean one row.
    pub fn clean_row(&self, row: &RawRecord) -> NormalizedRecord {
        self.clean_row_with(row, None)
    }

    fn clean_row_with(
        &self,
        row: &RawRecord,
        mut summary: Option<&mut NormalizationSummary>,
    ) -> NormalizedRecord {
        let Some(projection) = &self.projection else {
            let normalized = normalize_record(row, self.rules);
            if let Some(summary) = summary.as_deref_mut() {
                for (field, (_, value)) in row.iter().zip(normalized.iter()) {
                    summary.record(&field.name, &field.raw, value);
                }
            }
            return normalized;
        };

        let mut normalized = NormalizedRecord::with_capacity(projection.len());
        for name in projection {
            let raw = row.get_or_empty(name);
            let value = self.rules.normalize(name, raw);
            if let Some(summary) = summary.as_deref_mut() {
                summary.record(name, raw, value.as_deref());
            }
            normalized.push(name.clone(), value);
        }
        normalized
    }

    /// Clean all rows and collect a summary.
    pub fn run<'r>(
        &self,
        rows: impl IntoIterator<Item = &'r RawRecord>,
    ) -> (Vec<NormalizedRecord>, NormalizationSummary) {
        let mut summary = NormalizationSummary::default();
        let mut cleaned = Vec::new();

        for (index, row) in rows.into_iter().enumerate() {
            let record = self.clean_row_with(row, Some(&mut summary));
            debug!(
                row = index,
                fields = record.len(),
                nulls = record.null_count(),
                "Cleaned row"
            );
            cleaned.push(record);
            summary.rows += 1;
        }

        info!(
            rows = summary.rows,
            nulls = summary.total_nulls(),
            rewritten = summary.total_rewritten(),
            "Normalization complete"
        );
        (cleaned, summary)
    }
}
