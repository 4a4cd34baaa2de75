//! rSunBlue library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! loader / solar / averaging pipeline.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Report) => cli::commands::report::handle(cfg),
        Some(cmd @ Commands::Sun { .. }) => cli::commands::sun::handle(cmd, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg, config_path),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once: explicit file, standard file, or defaults
    let (mut cfg, config_path) = match &cli.config {
        Some(p) => {
            let path = utils::path::expand_tilde(p);
            let initializing = matches!(cli.command, Some(Commands::Config { init: true, .. }));
            let cfg = if initializing && !path.exists() {
                Config::default()
            } else {
                Config::load_from(&path)?
            };
            (cfg, path)
        }
        None => (Config::load()?, Config::config_file()),
    };

    // 3️⃣ command-line overrides
    cli.apply_overrides(&mut cfg);
    cfg.validate()?;

    log::debug!("effective configuration: {:?}", cfg);

    // 4️⃣ dispatch
    dispatch(&cli, &cfg, &config_path)
}
