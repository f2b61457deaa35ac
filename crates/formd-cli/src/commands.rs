use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{debug, info, info_span};

use formd_ingest::read_csv_records;
use formd_model::NormalizedRecord;
use formd_normalization::{
    NormalizationRuleSet, RecordNormalizer, default_rule_set, load_rule_set_with_overrides,
};

use crate::cli::{CleanArgs, OutputFormatArg, RulesArgs, RulesSource, ValueArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::CleanResult;
use formd_cli::logging::redact_value;
use formd_cli::output::{NULL_DISPLAY, write_csv, write_json, write_table};

/// Built-in rules, extended by `--rules` when given.
fn load_rules(source: &RulesSource) -> Result<Cow<'static, NormalizationRuleSet>> {
    match &source.rules {
        Some(path) => {
            let rules = load_rule_set_with_overrides(path)
                .with_context(|| format!("load rules from {}", path.display()))?;
            info!(path = %path.display(), rules = rules.rule_count(), "Loaded rule overrides");
            Ok(Cow::Owned(rules))
        }
        None => Ok(Cow::Borrowed(default_rule_set())),
    }
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanResult> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let rules = load_rules(&args.source)?;
    let rows = read_csv_records(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let mut normalizer = RecordNormalizer::new(&rules);
    if let Some(fields) = &args.fields {
        normalizer = normalizer.with_projection(fields.iter().map(|name| name.trim()));
    }
    let (records, summary) = normalizer.run(&rows);

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create {}", path.display()))?;
            write_records(&records, args.format, BufWriter::new(file))?;
        }
        None => write_records(&records, args.format, io::stdout().lock())?,
    }

    info!(
        rows = summary.rows,
        duration_ms = start.elapsed().as_millis(),
        "Clean complete"
    );
    Ok(CleanResult {
        input: args.input.clone(),
        output: args.output.clone(),
        rule_count: rules.rule_count(),
        summary,
        show_summary: !args.no_summary,
    })
}

fn write_records<W: Write>(
    records: &[NormalizedRecord],
    format: OutputFormatArg,
    mut writer: W,
) -> Result<()> {
    match format {
        OutputFormatArg::Table => write_table(records, &mut writer)?,
        OutputFormatArg::Json => write_json(records, &mut writer)?,
        OutputFormatArg::Csv => write_csv(records, &mut writer)?,
    }
    writer.flush().context("flush output")?;
    Ok(())
}

pub fn run_value(args: &ValueArgs) -> Result<()> {
    let rules = load_rules(&args.source)?;
    let value = rules.normalize(&args.field, &args.value);
    debug!(
        field = %args.field,
        raw = redact_value(&args.value),
        null = value.is_none(),
        "Normalized value"
    );
    println!("{}", value.as_deref().unwrap_or(NULL_DISPLAY));
    Ok(())
}

pub fn run_rules(args: &RulesArgs) -> Result<()> {
    let rules = load_rules(&args.source)?;
    if args.json {
        let json = serde_json::to_string_pretty(&*rules).context("serialize rules")?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("#"),
        header_cell("Rule"),
        header_cell("When"),
        header_cell("Then"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (field, policy) in rules.fields() {
        if let Some(default) = &policy.blank_default {
            table.add_row(vec![
                Cell::new(field),
                dim_cell("-"),
                dim_cell("blank_default"),
                Cell::new("blank"),
                Cell::new(format!("replace with {default:?}")),
            ]);
        }
        for (index, rule) in policy.rules.iter().enumerate() {
            table.add_row(vec![
                Cell::new(field),
                Cell::new(index + 1),
                Cell::new(&rule.id),
                Cell::new(&rule.predicate),
                Cell::new(&rule.action),
            ]);
        }
    }
    println!("{table}");
    Ok(())
}
