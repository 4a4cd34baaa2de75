//! Runs the pipeline over all tables and renders the text report.

use crate::config::Config;
use crate::core::averager::average_day;
use crate::core::loader::load_directory;
use crate::core::solar::sun_times;
use crate::errors::{AppError, AppResult};
use crate::models::{DayResult, Extrema, LogTable, Location, RunSummary};
use crate::utils::formatting::{format_f64, format_value};
use chrono::TimeDelta;
use log::info;
use std::io::Write;

pub const HEADER: &str = "nazwa pliku:\tbw\tbavg\tbz";
pub const SUMMARY_TITLE: &str = "Podsumowanie:";

/// Per-file averages for every table, in input order.
///
/// Stops at the first table whose sun times cannot be computed.
pub fn analyze(
    tables: &[LogTable],
    location: &Location,
    padding: TimeDelta,
    inner: TimeDelta,
) -> AppResult<Vec<DayResult>> {
    tables
        .iter()
        .map(|table| {
            let sun = sun_times(table.first_date(), location, padding).map_err(|e| AppError::InFile {
                file: table.name().to_string(),
                source: Box::new(e),
            })?;
            Ok(average_day(table, &sun, inner))
        })
        .collect()
}

pub fn summarize(results: &[DayResult]) -> RunSummary {
    let mut summary = RunSummary::default();
    for r in results {
        summary.update(r);
    }
    summary
}

pub fn format_row(result: &DayResult) -> String {
    format!(
        "{}:\t{}\t{}\t{}",
        result.file,
        format_value(result.bw),
        format_value(result.bavg),
        format_value(result.bz)
    )
}

fn write_extrema<W: Write>(out: &mut W, label: &str, e: &Extrema) -> std::io::Result<()> {
    writeln!(out, "min({}): {}", label, format_f64(e.min))?;
    writeln!(out, "max({}): {}", label, format_f64(e.max))
}

pub fn write_report<W: Write>(
    out: &mut W,
    results: &[DayResult],
    summary: &RunSummary,
) -> std::io::Result<()> {
    writeln!(out, "{}", HEADER)?;
    for r in results {
        writeln!(out, "{}", format_row(r))?;
    }

    writeln!(out)?;
    writeln!(out, "{}", SUMMARY_TITLE)?;
    write_extrema(out, "bw", &summary.bw)?;
    write_extrema(out, "bz", &summary.bz)?;
    write_extrema(out, "bavg", &summary.bavg)?;
    out.flush()
}

/// Load, analyse and print. Nothing is written unless every file succeeds.
pub fn run_report<W: Write>(cfg: &Config, out: &mut W) -> AppResult<RunSummary> {
    let dir = cfg.directory_path();
    let tables = load_directory(&dir, &cfg.extension)?;
    info!("analysing {} file(s) from {}", tables.len(), dir.display());

    let results = analyze(&tables, &cfg.location, cfg.padding(), cfg.inner_window())?;
    let summary = summarize(&results);

    write_report(out, &results, &summary)?;
    Ok(summary)
}
