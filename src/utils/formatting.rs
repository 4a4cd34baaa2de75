//! Formatting utilities used for the report.

/// Two-decimal rendering; a missing value prints `nan`.
///
/// Infinite sentinels render as `inf` / `-inf`.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format_f64(v),
        None => "nan".to_string(),
    }
}

pub fn format_f64(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{:.2}", v)
    }
}
