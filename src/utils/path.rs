//! Path utilities: expand ~, filter files by extension.

use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Case-sensitive suffix match on the file name: `day1.csv` matches `csv`,
/// `day1.CSV` does not.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let suffix = format!(".{}", ext.trim_start_matches('.'));
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(&suffix))
}
