//! End-to-end tests for record cleaning and rendering.

use std::fs;
use std::path::Path;

use formd_cli::output::{column_names, write_csv, write_json};
use formd_ingest::read_csv_records;
use formd_model::NormalizedRecord;
use formd_normalization::{RecordNormalizer, default_rule_set, load_rule_set_with_overrides};

const ISSUERS_CSV: &str = "\
issuer_name,state,zip_code,phone_number,city
Acme Corp,Calfornia,501,(555) 123-4567,
N/A,TX, ,12345,Austin
";

fn write_file(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn clean(path: &Path) -> Vec<NormalizedRecord> {
    let rows = read_csv_records(path).unwrap();
    let (records, summary) = RecordNormalizer::new(default_rule_set()).run(&rows);
    assert_eq!(summary.rows, rows.len());
    records
}

#[test]
fn test_clean_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "issuers.csv", ISSUERS_CSV);

    let records = clean(&input);
    let mut out = Vec::new();
    write_csv(&records, &mut out).unwrap();

    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    issuer_name,state,zip_code,phone_number,city
    Acme Corp,California,00501,555-123-4567,UNKNOWN
    ,TX,,,Austin
    ");
}

#[test]
fn test_clean_to_json_keeps_nulls() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "issuers.csv", ISSUERS_CSV);

    let records = clean(&input);
    let mut out = Vec::new();
    write_json(&records, &mut out).unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(parsed[1]["issuer_name"], serde_json::Value::Null);
    assert_eq!(parsed[1]["zip_code"], serde_json::Value::Null);
    assert_eq!(parsed[1]["phone_number"], serde_json::Value::Null);
    assert_eq!(parsed[0]["city"], "UNKNOWN");
    assert_eq!(
        column_names(&records),
        vec!["issuer_name", "state", "zip_code", "phone_number", "city"]
    );
}

#[test]
fn test_projection_orders_and_fills_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "issuers.csv", ISSUERS_CSV);
    let rows = read_csv_records(&input).unwrap();

    let normalizer =
        RecordNormalizer::new(default_rule_set()).with_projection(["city", "entity_type"]);
    let (records, summary) = normalizer.run(&rows);

    assert_eq!(column_names(&records), vec!["city", "entity_type"]);
    assert_eq!(records[0].value("city"), Some("UNKNOWN"));
    assert!(records[0].is_null("entity_type"));
    assert_eq!(summary.field("entity_type").map(|stats| stats.nulls), Some(2));
    let summary_fields: Vec<_> = summary.fields.iter().map(|stats| stats.field.as_str()).collect();
    assert_eq!(summary_fields, vec!["city", "entity_type"]);
}

#[test]
fn test_rule_overrides_change_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(dir.path(), "issuers.csv", ISSUERS_CSV);
    let overrides = write_file(
        dir.path(),
        "rules.csv",
        "field,raw,replacement,null\nstate,TX,Texas,\ncity,Austin,,true\n",
    );

    let rules = load_rule_set_with_overrides(&overrides).unwrap();
    let rows = read_csv_records(&input).unwrap();
    let (records, _) = RecordNormalizer::new(&rules).run(&rows);

    assert_eq!(records[1].value("state"), Some("Texas"));
    assert!(records[1].is_null("city"));
    // Built-in rules still apply
    assert_eq!(records[0].value("state"), Some("California"));
}
