#![allow(missing_docs)]

use std::io::Write;

use formd_ingest::{IngestError, read_csv_records};
use tempfile::NamedTempFile;

fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn reads_issuer_rows_verbatim() {
    let file = temp_csv(
        "issuer_name,zip_code,phone_number,city\n\
         \" \"\"Acme Corp\"\" \",1234,(123) 456-7890,New York\n\
         \"\"\"\"\"\",N/A,1234567,   \n",
    );

    let records = read_csv_records(file.path()).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].get("issuer_name"), Some(" \"Acme Corp\" "));
    assert_eq!(records[0].get("zip_code"), Some("1234"));
    assert_eq!(records[1].get("issuer_name"), Some("\"\""));
    assert_eq!(records[1].get("zip_code"), Some("N/A"));
    assert_eq!(records[1].get("city"), Some("   "));
}

#[test]
fn blank_header_is_rejected() {
    let file = temp_csv("zip_code, \n12345,x\n");
    let result = read_csv_records(file.path());
    assert!(matches!(result, Err(IngestError::EmptyColumnName { .. })));
}
