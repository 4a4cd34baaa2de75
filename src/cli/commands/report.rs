use crate::config::Config;
use crate::core::report::run_report;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io;

/// Handle the `report` command (also the default)
pub fn handle(cfg: &Config) -> AppResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = run_report(cfg, &mut out)?;

    if summary.files == 0 {
        warning(format!(
            "No *.{} files found in {}",
            cfg.extension.trim_start_matches('.'),
            cfg.directory_path().display()
        ));
    }

    Ok(())
}
