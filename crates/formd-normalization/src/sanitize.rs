//! Loose cell sanitization for untyped rows.

use formd_model::CellValue;

/// Token treated as a missing cell.
pub const MISSING_CELL: &str = "N/A";

/// Sanitize one raw cell.
///
/// Exactly `"N/A"` becomes [`CellValue::Null`]; a non-empty string of ASCII
/// digits that fits in `i64` becomes [`CellValue::Integer`]; anything else is
/// kept as text, unchanged.
///
/// # Examples
///
/// ```
/// use formd_model::CellValue;
/// use formd_normalization::sanitize_cell;
///
/// assert_eq!(sanitize_cell("N/A"), CellValue::Null);
/// assert_eq!(sanitize_cell("1000000"), CellValue::Integer(1_000_000));
/// assert_eq!(
///     sanitize_cell("2025-07-29"),
///     CellValue::Text("2025-07-29".to_string())
/// );
/// ```
pub fn sanitize_cell(value: &str) -> CellValue {
    if value == MISSING_CELL {
        return CellValue::Null;
    }
    if !value.is_empty()
        && value.bytes().all(|byte| byte.is_ascii_digit())
        && let Ok(number) = value.parse::<i64>()
    {
        return CellValue::Integer(number);
    }
    CellValue::Text(value.to_string())
}

/// Sanitize every cell of a row.
pub fn sanitize_row<S: AsRef<str>>(cells: &[S]) -> Vec<CellValue> {
    cells.iter().map(|cell| sanitize_cell(cell.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitizes_mock_rows() {
        let rows = [
            ["Company A", "1000000", "2025-07-29"],
            ["Company B", "N/A", "2025-07-28"],
            ["Company C", "2500000", "N/A"],
        ];
        let cleaned: Vec<_> = rows.iter().map(|row| sanitize_row(row)).collect();
        assert_eq!(
            cleaned,
            vec![
                vec![
                    CellValue::Text("Company A".to_string()),
                    CellValue::Integer(1_000_000),
                    CellValue::Text("2025-07-29".to_string()),
                ],
                vec![
                    CellValue::Text("Company B".to_string()),
                    CellValue::Null,
                    CellValue::Text("2025-07-28".to_string()),
                ],
                vec![
                    CellValue::Text("Company C".to_string()),
                    CellValue::Integer(2_500_000),
                    CellValue::Null,
                ],
            ]
        );
    }

    #[test]
    fn only_exact_token_is_missing() {
        assert_eq!(sanitize_cell("n/a"), CellValue::Text("n/a".to_string()));
        assert_eq!(sanitize_cell(" N/A"), CellValue::Text(" N/A".to_string()));
    }

    #[test]
    fn signed_empty_and_overflowing_digits_stay_text() {
        assert_eq!(sanitize_cell(""), CellValue::Text(String::new()));
        assert_eq!(sanitize_cell("-5"), CellValue::Text("-5".to_string()));
        let huge = "9".repeat(30);
        assert_eq!(sanitize_cell(&huge), CellValue::Text(huge.clone()));
    }
}
