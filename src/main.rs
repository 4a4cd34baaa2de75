//! rSunBlue main entrypoint.

use rsunblue::run;
use rsunblue::ui::messages::error;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
