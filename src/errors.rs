//! Unified application error type.
//! Loader, solar calculator, config and CLI all return AppError so a single
//! message reaches the user before the process exits.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Parse error in {file}, line {line}: {message}")]
    Parse {
        file: String,
        line: u64,
        message: String,
    },

    #[error("Log file {0} contains no records")]
    EmptyLog(String),

    // ---------------------------
    // Astronomy
    // ---------------------------
    #[error("No {event} on {date} at {place}: the sun never crosses the horizon")]
    Astronomical {
        date: String,
        place: String,
        event: &'static str,
    },

    #[error("{file}: {source}")]
    InFile {
        file: String,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),
}

pub type AppResult<T> = Result<T, AppError>;
