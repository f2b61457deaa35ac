//! DataFrame to record conversion.

use std::path::Path;

use polars::prelude::{DataFrame, DataType};

use formd_model::RawRecord;

use crate::csv::read_csv_table;
use crate::error::Result;

/// Convert every row of `df` into a [`RawRecord`].
///
/// Columns are cast to strings; null cells become empty strings.
pub fn frame_to_records(df: &DataFrame) -> Result<Vec<RawRecord>> {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        columns.push(column.as_materialized_series().cast(&DataType::String)?);
    }
    let cells = columns
        .iter()
        .map(|series| series.str())
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<String> = cells
            .iter()
            .map(|ca| ca.get(idx).unwrap_or_default().to_string())
            .collect();
        records.push(RawRecord::from_row(&headers, row)?);
    }
    Ok(records)
}

/// Read a CSV file straight into records.
pub fn read_csv_records(path: &Path) -> Result<Vec<RawRecord>> {
    let df = read_csv_table(path)?;
    frame_to_records(&df)
}
