//! Rendering of cleaned records.
//!
//! The null marker is written as `null` in tables, JSON `null` in JSON
//! output and an empty cell in CSV output.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use formd_model::NormalizedRecord;

/// Text shown for the null marker in human-readable output.
pub const NULL_DISPLAY: &str = "null";

/// Column order for a batch: first-seen order across all records.
pub fn column_names(records: &[NormalizedRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for (name, _) in record.iter() {
            if !names.iter().any(|existing| existing == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Build a table with one row per record.
pub fn records_table(records: &[NormalizedRecord]) -> Table {
    let columns = column_names(records);
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.iter().map(|name| {
        Cell::new(name)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    }));
    for record in records {
        table.add_row(columns.iter().map(|name| match record.get(name) {
            Some(Some(value)) => Cell::new(value),
            Some(None) | None => Cell::new(NULL_DISPLAY).fg(Color::DarkGrey),
        }));
    }
    table
}

/// Write records as a pretty-printed JSON array of objects.
pub fn write_json<W: Write>(records: &[NormalizedRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records).context("serialize records")?;
    writeln!(writer)?;
    Ok(())
}

/// Write records as CSV with a header row.
pub fn write_csv<W: Write>(records: &[NormalizedRecord], writer: W) -> Result<()> {
    let columns = column_names(records);
    let mut csv_writer = csv::Writer::from_writer(writer);
    if !columns.is_empty() {
        csv_writer.write_record(&columns).context("write header")?;
    }
    for record in records {
        let row = columns
            .iter()
            .map(|name| record.value(name).unwrap_or_default());
        csv_writer.write_record(row).context("write row")?;
    }
    csv_writer.flush().context("flush csv output")?;
    Ok(())
}

/// Write records as a table.
pub fn write_table<W: Write>(records: &[NormalizedRecord], mut writer: W) -> Result<()> {
    if records.is_empty() {
        writeln!(writer, "No rows.")?;
        return Ok(());
    }
    writeln!(writer, "{}", records_table(records))?;
    Ok(())
}
