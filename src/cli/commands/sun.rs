use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::averager::{DayWindows, TimeWindow};
use crate::core::solar::sun_times;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_date;

fn fmt_window(w: &TimeWindow) -> String {
    let suffix = if w.wraps_midnight() { " (wraps midnight)" } else { "" };
    format!("{} - {}{}", w.start.format("%H:%M:%S"), w.end.format("%H:%M:%S"), suffix)
}

/// Handle the `sun` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Sun { date } = cmd {
        let d = parse_date(date).ok_or_else(|| AppError::Config(format!("invalid date '{}'", date)))?;

        let sun = sun_times(d, &cfg.location, cfg.padding())?;
        let windows = DayWindows::new(&sun, cfg.inner_window());

        println!("📍 {} ({})", cfg.location.label(), cfg.location.timezone);
        println!("📅 {}", d);
        println!(
            "🌅 sunrise - {}m : {}",
            cfg.padding_minutes,
            sun.sunrise.to_rfc3339()
        );
        println!(
            "🌇 sunset + {}m  : {}",
            cfg.padding_minutes,
            sun.sunset.to_rfc3339()
        );
        println!("bw   window: {}", fmt_window(&windows.sunrise));
        println!("bavg window: {}", fmt_window(&windows.daytime));
        println!("bz   window: {}", fmt_window(&windows.sunset));
    }

    Ok(())
}
