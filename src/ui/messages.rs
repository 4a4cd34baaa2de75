//! Status lines for the user, on stderr so stdout carries only the report.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

fn emit<T: Display>(color: &str, icon: &str, msg: T) {
    eprintln!("{color}{BOLD}{icon} {RESET}{msg}");
}

pub fn info<T: Display>(msg: T) {
    emit("\x1b[34m", "ℹ️", msg);
}

pub fn success<T: Display>(msg: T) {
    emit("\x1b[32m", "✅", msg);
}

pub fn warning<T: Display>(msg: T) {
    emit("\x1b[33m", "⚠️", msg);
}

pub fn error<T: Display>(msg: T) {
    emit("\x1b[31m", "❌", msg);
}
