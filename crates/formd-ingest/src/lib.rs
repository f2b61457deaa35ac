//! Form D record ingestion.
//!
//! Loads a single CSV file into a Polars DataFrame with every column read as
//! a string, and turns frames into [`RawRecord`](formd_model::RawRecord)s
//! for row-level normalization.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use formd_ingest::{frame_to_records, read_csv_table};
//!
//! let df = read_csv_table(Path::new("issuers.csv"))?;
//! let records = frame_to_records(&df)?;
//! ```

mod csv;
mod error;
mod records;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{MAX_CSV_FILE_SIZE, read_csv_table, read_csv_table_with_limit};

// === Records ===
pub use records::{frame_to_records, read_csv_records};
