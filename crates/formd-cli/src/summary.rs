use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use formd_model::FieldKind;

use crate::types::CleanResult;

/// Print the per-field summary of a `clean` run to stderr.
///
/// Goes to stderr so that stdout stays clean for piped record output.
pub fn print_summary(result: &CleanResult) {
    eprintln!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!("Rules: {}", result.rule_count);
    if !result.show_summary {
        return;
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Kind"),
        header_cell("Nulls"),
        header_cell("Rewritten"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);

    for stats in &result.summary.fields {
        let kind = FieldKind::from_name(&stats.field);
        table.add_row(vec![
            field_cell(&stats.field, kind),
            dim_cell(kind),
            count_cell(stats.nulls, Color::Yellow),
            count_cell(stats.rewritten, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{} rows", result.summary.rows))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(result.summary.total_nulls(), Color::Yellow).add_attribute(Attribute::Bold),
        count_cell(result.summary.total_rewritten(), Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn field_cell(name: &str, kind: FieldKind) -> Cell {
    if kind == FieldKind::Other {
        Cell::new(name).fg(Color::DarkGrey)
    } else {
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
