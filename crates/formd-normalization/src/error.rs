//! Error types for normalization setup.
//!
//! Normalizing a value never fails; these errors come from loading rule
//! overrides and from DataFrame construction.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NormalizationError {
    /// Rule override file not found.
    #[error("rule file not found: {path}")]
    RulesNotFound { path: PathBuf },

    /// Failed to read or parse the rule override CSV.
    #[error("failed to read rules {path}: {source}")]
    RulesRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A rule row is structurally valid CSV but not a usable rule.
    #[error("invalid rule on line {line} of {path}: {reason}")]
    InvalidRule {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

pub type Result<T> = std::result::Result<T, NormalizationError>;
