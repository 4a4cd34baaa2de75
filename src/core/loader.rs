//! Reads RGB light logs from a directory into per-file tables.

use crate::errors::{AppError, AppResult};
use crate::models::{LogRecord, LogTable};
use crate::utils::path::has_extension;
use crate::utils::time::parse_timestamp;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load every `*.<ext>` file of `dir`, sorted by file name.
pub fn load_directory(dir: &Path, ext: &str) -> AppResult<Vec<LogTable>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && has_extension(&path, ext) {
            paths.push(path);
        }
    }

    paths.sort();
    debug!("found {} log file(s) in {}", paths.len(), dir.display());

    paths.iter().map(|p| load_file(p)).collect()
}

/// Load one log file; the table is named after the file name.
pub fn load_file(path: &Path) -> AppResult<LogTable> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let file = fs::File::open(path)?;
    let table = read_table(&name, file)?;

    debug!("loaded {}: {} record(s)", name, table.len());
    Ok(table)
}

/// Column positions resolved from the header row.
struct Columns {
    timestamp: usize,
    r: usize,
    g: usize,
    b: usize,
}

impl Columns {
    fn from_headers(file: &str, headers: &StringRecord) -> AppResult<Self> {
        let find = |label: &str| {
            headers
                .iter()
                .position(|h| h.trim() == label)
                .ok_or_else(|| AppError::Parse {
                    file: file.to_string(),
                    line: 1,
                    message: format!("missing column '{}'", label),
                })
        };

        Ok(Self {
            timestamp: 0,
            r: find("R")?,
            g: find("G")?,
            b: find("B")?,
        })
    }
}

/// Parse CSV content. Errors carry the file name and line number.
pub fn read_table<R: Read>(name: &str, reader: R) -> AppResult<LogTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr.headers().map_err(|e| csv_error(name, e))?.clone();
    let cols = Columns::from_headers(name, &headers)?;

    let mut records = Vec::new();

    for row in rdr.records() {
        let row = row.map_err(|e| csv_error(name, e))?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        let parse_err = |message: String| AppError::Parse {
            file: name.to_string(),
            line,
            message,
        };

        let field = |idx: usize| row.get(idx).unwrap_or("");

        let ts_raw = field(cols.timestamp);
        let timestamp = parse_timestamp(ts_raw)
            .ok_or_else(|| parse_err(format!("invalid timestamp '{}'", ts_raw)))?;

        let r = parse_channel(field(cols.r)).map_err(&parse_err)?;
        let g = parse_channel(field(cols.g)).map_err(&parse_err)?;
        let b = parse_channel(field(cols.b)).map_err(&parse_err)?;

        records.push(LogRecord::new(timestamp, r, g, b));
    }

    LogTable::new(name, records).ok_or_else(|| AppError::EmptyLog(name.to_string()))
}

fn csv_error(file: &str, err: csv::Error) -> AppError {
    match err.position().map(|p| p.line()) {
        Some(line) => AppError::Parse {
            file: file.to_string(),
            line,
            message: err.to_string(),
        },
        None => AppError::Csv(err),
    }
}

/// `"B: 67"` → 67. The label before the first `": "` is discarded.
pub fn parse_channel(raw: &str) -> Result<i64, String> {
    let (_, value) = raw
        .split_once(": ")
        .ok_or_else(|| format!("channel value '{}' has no '<label>: ' prefix", raw))?;

    value
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("channel value '{}' is not an integer", raw))
}
