use std::fs;
use std::path::PathBuf;

use techjobs_ingest::{IngestError, read_job_table};

fn temp_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn reads_job_listing_source() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(
        &dir,
        "job_data.csv",
        "name,employer,location,position type,core competency\n\
         Junior Data Analyst,Lockerdome,Saint Louis,Data Scientist / Business Intelligence,Statistical Analysis\n\
         Junior Web Developer,\"Enterprise Holdings, Inc\",Saint Louis,Web - Back End,Ruby\n",
    );

    let table = read_job_table(&path).expect("read csv");

    assert_eq!(
        table.columns(),
        &[
            "name",
            "employer",
            "location",
            "position type",
            "core competency"
        ]
    );
    assert_eq!(table.len(), 2);
    let second = &table.rows()[1];
    assert_eq!(second.get("employer"), Some("Enterprise Holdings, Inc"));
    assert_eq!(second.get("position type"), Some("Web - Back End"));
    assert!(table.rows().iter().all(|row| row.len() == 5));
}

#[test]
fn cell_values_are_kept_verbatim() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = temp_file(&dir, "padded.csv", "A,B\n  spaced  ,\tTabbed\n");

    let table = read_job_table(&path).expect("read csv");

    assert_eq!(table.rows()[0].get("A"), Some("  spaced  "));
    assert_eq!(table.rows()[0].get("B"), Some("\tTabbed"));
}

#[test]
fn invalid_utf8_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.csv");
    fs::write(&path, [b'A', b',', b'B', b'\n', 0xC3, 0x28, b',', b'x', b'\n']).expect("write");

    let err = read_job_table(&path).expect_err("invalid utf-8 must fail");

    assert!(matches!(err, IngestError::CsvParse { .. }));
}
