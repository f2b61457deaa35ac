use std::path::PathBuf;

use formd_normalization::NormalizationSummary;

/// Outcome of a `clean` run.
#[derive(Debug)]
pub struct CleanResult {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub rule_count: usize,
    pub summary: NormalizationSummary,
    pub show_summary: bool,
}
