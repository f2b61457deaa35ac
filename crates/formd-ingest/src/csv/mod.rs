//! CSV reading utilities.

mod reader;

pub use reader::{MAX_CSV_FILE_SIZE, read_csv_table, read_csv_table_with_limit};
