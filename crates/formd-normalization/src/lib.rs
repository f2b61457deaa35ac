//! Field normalization for Form D issuer records.
//!
//! Given a field name and a raw string, [`normalize`] returns a corrected
//! value or `None` (the null marker). Behaviour is driven by a declarative
//! [`NormalizationRuleSet`]: per-field ordered rules consumed by one engine.
//!
//! # Overview
//!
//! - **Engine**: [`normalize`] and [`NormalizationRuleSet::normalize`]
//! - **Rule table**: [`default_rule_set`], [`RuleSetBuilder`], rule overrides
//!   loaded from CSV
//! - **Rows and frames**: [`RecordNormalizer`], [`normalize_record`],
//!   [`normalize_frame`]
//! - **Cells**: [`sanitize_cell`] for loosely typed rows
//!
//! # Example
//!
//! ```
//! use formd_normalization::normalize;
//!
//! assert_eq!(normalize("phone_number", "(123) 456-7890").as_deref(), Some("123-456-7890"));
//! assert_eq!(normalize("city", "   ").as_deref(), Some("UNKNOWN"));
//! assert_eq!(normalize("zip_code", "00000"), None);
//! ```
//!
//! # Design Principles
//!
//! - **Pure**: no I/O, no shared mutable state; safe to call from any thread
//! - **Fail open**: malformed input yields `None` or passes through, never an error
//! - **Declarative**: corrections are data, not branches

mod engine;
mod error;
mod frame;
mod loader;
mod record;
mod rules;
mod sanitize;
mod tokens;

pub mod structural;

// Engine
pub use engine::normalize;

// Rule table
pub use rules::{
    FieldPolicy, FieldRule, ISSUER_NAME_MAX_LEN, NormalizationRuleSet, RuleAction, RulePredicate,
    RuleSetBuilder, UNKNOWN_CITY, ZIP_CODE_WIDTH, default_rule_set,
};
pub use tokens::{NULL_TOKENS, is_null_token};

// Overrides
pub use loader::{
    RuleOverride, apply_overrides, load_rule_overrides, load_rule_set_with_overrides,
    parse_rule_overrides,
};

// Rows, frames and cells
pub use frame::normalize_frame;
pub use record::{FieldStats, NormalizationSummary, RecordNormalizer, normalize_record};
pub use sanitize::{MISSING_CELL, sanitize_cell, sanitize_row};

// Error type
pub use error::{NormalizationError, Result};
