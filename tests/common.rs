#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER_LINE: &str = "Timestamp, R, G, B";

pub fn rsb() -> Command {
    cargo_bin_cmd!("rsunblue")
}

/// Binary command isolated from any user config: HOME points at `home`.
pub fn rsb_in(home: &Path) -> Command {
    let mut cmd = rsb();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

/// Create a fresh, empty directory inside the system temp dir
pub fn setup_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rsunblue_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// One CSV row in the sensor's native layout.
pub fn row(ts: &str, r: i64, g: i64, b: i64) -> String {
    format!("{}, R: {}, G: {}, B: {}", ts, r, g, b)
}

/// Write a log file with a header and the given `(timestamp, B)` samples.
pub fn write_log(dir: &Path, name: &str, samples: &[(&str, i64)]) -> PathBuf {
    let mut content = String::from(HEADER_LINE);
    content.push('\n');
    for (ts, b) in samples {
        content.push_str(&row(ts, 1, 2, *b));
        content.push('\n');
    }
    let path = dir.join(name);
    fs::write(&path, content).expect("write log");
    path
}

/// Tarnów, 2024-06-21: padded sunrise 04:21:44, padded sunset 20:54:11 (CEST).
pub fn solstice_samples() -> Vec<(&'static str, i64)> {
    vec![
        ("2024-06-21 03:00:00", 1),
        ("2024-06-21 04:18:00", 10),
        ("2024-06-21 04:20:00", 20),
        ("2024-06-21 04:25:00", 30),
        ("2024-06-21 12:00:00", 100),
        ("2024-06-21 20:50:00", 50),
        ("2024-06-21 20:58:00", 90),
        ("2024-06-21 23:00:00", 5),
    ]
}

/// Tarnów, 2024-06-22: only morning samples, nothing near sunset.
pub fn morning_only_samples() -> Vec<(&'static str, i64)> {
    vec![("2024-06-22 04:20:00", 40), ("2024-06-22 10:00:00", 80)]
}
