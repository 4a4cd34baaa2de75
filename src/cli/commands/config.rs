use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config { print_config, init } = cmd {
        // ---- INIT CONFIG ----
        if *init {
            if Config::init_file(path)? {
                success(format!("Config file created: {}", path.display()));
            } else {
                info(format!("Config file already exists: {}", path.display()));
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config || !*init {
            print!("{}", cfg.to_yaml()?);
        }
    }

    Ok(())
}
