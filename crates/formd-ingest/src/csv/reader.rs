//! CSV file reading.
//!
//! Every column is read as a string and empty fields stay empty strings
//! rather than nulls, so blank values reach the normalizer as written.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, SerReader};

use crate::error::{IngestError, Result};

/// Largest CSV file [`read_csv_table`] accepts (500 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: char = '\u{feff}';

/// Reads a CSV file into a DataFrame of string columns.
///
/// The first row is the header. Header names are trimmed and a UTF-8 BOM is
/// dropped. Files over [`MAX_CSV_FILE_SIZE`], UTF-16 files, files without
/// data rows and files with a blank header name are rejected.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    read_csv_table_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// [`read_csv_table`] with a custom size limit in bytes.
pub fn read_csv_table_with_limit(path: &Path, max_size: u64) -> Result<DataFrame> {
    preflight(path, max_size)?;

    let parse_error = |e: polars::prelude::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_missing_is_null(false))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| {
            let name = name.as_str();
            name.strip_prefix(UTF8_BOM).unwrap_or(name).trim().to_string()
        })
        .collect();
    if names.iter().any(String::is_empty) {
        return Err(IngestError::EmptyColumnName {
            path: path.to_path_buf(),
        });
    }
    df.set_column_names(names)?;

    if df.height() == 0 {
        return Err(IngestError::EmptyDataFrame {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded CSV"
    );
    Ok(df)
}

/// Check `path` exists, enforcing the size limit and sniffing for a UTF-16 BOM.
fn preflight(path: &Path, max_size: u64) -> Result<()> {
    let read_error = |source: std::io::Error| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            read_error(e)
        }
    })?;

    let size = file.metadata().map_err(read_error)?.len();
    if size > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            max_size,
        });
    }

    let mut head = Vec::with_capacity(2);
    (&mut file).take(2).read_to_end(&mut head).map_err(read_error)?;
    let encoding = match head.as_slice() {
        [0xFF, 0xFE] => Some("UTF-16 LE"),
        [0xFE, 0xFF] => Some("UTF-16 BE"),
        _ => None,
    };
    if let Some(encoding) = encoding {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }
    Ok(())
}
