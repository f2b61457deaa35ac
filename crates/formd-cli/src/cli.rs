//! CLI argument definitions for the Form D normalizer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "formd",
    version,
    about = "Form D field normalizer - clean malformed issuer record values",
    long_about = "Clean malformed Form D issuer record values.\n\n\
                  Blank and N/A-like values become null, known typos are corrected,\n\
                  ZIP codes are zero-padded and phone numbers reformatted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow raw field values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize every row of a CSV file.
    Clean(CleanArgs),

    /// Normalize a single value.
    Value(ValueArgs),

    /// Print the active rule table.
    Rules(RulesArgs),
}

/// Rule table selection shared by all subcommands.
#[derive(Args)]
pub struct RulesSource {
    /// CSV of extra exact-match corrections (field,raw,replacement,null).
    #[arg(long = "rules", value_name = "CSV")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub source: RulesSource,

    /// Only emit these fields, in this order (missing fields count as blank).
    #[arg(long = "fields", value_name = "FIELD", value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Output format for cleaned records.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write cleaned records to a file instead of stdout.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Skip the per-field summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,
}

#[derive(Parser)]
pub struct ValueArgs {
    /// Field name, e.g. zip_code.
    #[arg(value_name = "FIELD")]
    pub field: String,

    /// Raw value to normalize.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    #[command(flatten)]
    pub source: RulesSource,
}

#[derive(Parser)]
pub struct RulesArgs {
    #[command(flatten)]
    pub source: RulesSource,

    /// Print the rule table as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
    Csv,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
