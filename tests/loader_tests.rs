use rsunblue::core::loader::{load_directory, load_file, parse_channel, read_table};
use rsunblue::errors::AppError;
use std::fs;

mod common;
use common::{morning_only_samples, setup_dir, solstice_samples, write_log};

#[test]
fn test_parse_channel_strips_label() {
    assert_eq!(parse_channel("B: 67"), Ok(67));
    assert_eq!(parse_channel("R: 0"), Ok(0));
    assert_eq!(parse_channel("G:  12 "), Ok(12));
}

#[test]
fn test_parse_channel_splits_on_first_delimiter() {
    // everything after the first ": " must be an integer
    assert!(parse_channel("B: 1: 2").is_err());
}

#[test]
fn test_parse_channel_rejects_bad_values() {
    assert!(parse_channel("67").is_err());
    assert!(parse_channel("B:67").is_err());
    assert!(parse_channel("B: abc").is_err());
    assert!(parse_channel("B: 6.5").is_err());
}

#[test]
fn test_read_table_native_layout() {
    let csv = "Timestamp, R, G, B\n\
               2024-05-01 06:00:00, R: 1, G: 2, B: 3\n\
               2024-05-01 06:01:00, R: 4, G: 5, B: 6\n";

    let table = read_table("day.csv", csv.as_bytes()).unwrap();

    assert_eq!(table.name(), "day.csv");
    assert_eq!(table.len(), 2);
    let first = table.records()[0];
    assert_eq!((first.r, first.g, first.b), (1, 2, 3));
    assert_eq!(table.first_date().to_string(), "2024-05-01");
}

#[test]
fn test_read_table_sorts_by_timestamp() {
    let csv = "Timestamp, R, G, B\n\
               2024-05-01 07:00:00, R: 1, G: 1, B: 2\n\
               2024-05-01 06:00:00, R: 1, G: 1, B: 1\n";

    let table = read_table("day.csv", csv.as_bytes()).unwrap();
    let blues: Vec<i64> = table.records().iter().map(|r| r.b).collect();
    assert_eq!(blues, vec![1, 2]);
}

#[test]
fn test_read_table_accepts_other_timestamp_layouts() {
    let csv = "Timestamp, R, G, B\n\
               2024-05-01T06:00:00.250, R: 1, G: 1, B: 1\n\
               2024-05-01 06:01, R: 1, G: 1, B: 2\n\
               01.05.2024 06:02:00, R: 1, G: 1, B: 3\n\
               2024-05-01T06:03:00+02:00, R: 1, G: 1, B: 4\n";

    let table = read_table("day.csv", csv.as_bytes()).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(
        table.records()[3].time().format("%H:%M").to_string(),
        "06:03"
    );
}

#[test]
fn test_read_table_reports_file_and_line_on_bad_channel() {
    let csv = "Timestamp, R, G, B\n\
               2024-05-01 06:00:00, R: 1, G: 2, B: 3\n\
               2024-05-01 06:01:00, R: 4, G: 5, B: oops\n";

    match read_table("bad.csv", csv.as_bytes()) {
        Err(AppError::Parse { file, line, message }) => {
            assert_eq!(file, "bad.csv");
            assert_eq!(line, 3);
            assert!(message.contains("oops"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_read_table_rejects_bad_timestamp() {
    let csv = "Timestamp, R, G, B\nyesterday, R: 1, G: 2, B: 3\n";

    let err = read_table("bad.csv", csv.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn test_read_table_missing_column() {
    let csv = "Timestamp, R, G\n2024-05-01 06:00:00, R: 1, G: 2\n";

    let err = read_table("bad.csv", csv.as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::Parse { line: 1, .. }));
    assert!(err.to_string().contains("'B'"));
}

#[test]
fn test_read_table_header_only_is_empty_log() {
    let err = read_table("empty.csv", "Timestamp, R, G, B\n".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::EmptyLog(ref f) if f == "empty.csv"));
}

#[test]
fn test_load_directory_filters_and_sorts() {
    let dir = setup_dir("loader_filters");

    write_log(&dir, "b_day.csv", &morning_only_samples());
    write_log(&dir, "a_day.csv", &solstice_samples());
    // case-sensitive suffix: skipped
    write_log(&dir, "upper.CSV", &solstice_samples());
    fs::write(dir.join("notes.txt"), "not a log").unwrap();
    fs::create_dir_all(dir.join("nested.csv")).unwrap();

    let tables = load_directory(&dir, "csv").unwrap();
    let names: Vec<&str> = tables.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["a_day.csv", "b_day.csv"]);
}

#[test]
fn test_load_directory_empty() {
    let dir = setup_dir("loader_empty");
    assert!(load_directory(&dir, "csv").unwrap().is_empty());
}

#[test]
fn test_load_file_names_table_after_file() {
    let dir = setup_dir("loader_single");
    let path = write_log(&dir, "2024-06-21.csv", &solstice_samples());

    let table = load_file(&path).unwrap();
    assert_eq!(table.name(), "2024-06-21.csv");
    assert_eq!(table.len(), solstice_samples().len());
}
