//! DataFrame normalization.
//!
//! Applies the engine column by column. The column name is the field name;
//! every output column is a nullable `String` column in input order.

use polars::prelude::{Column, DataFrame, DataType, IntoColumn, NamedFrom, Series};

use crate::error::NormalizationError;
use crate::rules::NormalizationRuleSet;

/// Normalize every column of `df`.
///
/// Null cells and cells of non-string columns normalize to null.
pub fn normalize_frame(
    df: &DataFrame,
    rules: &NormalizationRuleSet,
) -> Result<DataFrame, NormalizationError> {
    let mut columns: Vec<Column> = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().clone();
        let series = column.as_materialized_series();

        let values: Vec<Option<String>> = if series.dtype() == &DataType::String {
            series
                .str()?
                .into_iter()
                .map(|cell| rules.normalize_optional(name.as_str(), cell))
                .collect()
        } else {
            tracing::debug!(
                column = %name,
                dtype = %series.dtype(),
                "Non-string column normalized to nulls"
            );
            vec![None; df.height()]
        };

        columns.push(Series::new(name, values).into_column());
    }

    DataFrame::new(columns).map_err(NormalizationError::from)
}
