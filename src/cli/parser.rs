use clap::{Parser, Subcommand};

/// Command-line interface definition for rSunBlue
/// Averages the blue channel of RGB light logs around sunrise and sunset
#[derive(Parser, Debug)]
#[command(
    name = "rsunblue",
    version = env!("CARGO_PKG_VERSION"),
    about = "Average the blue channel of RGB light logs around sunrise and sunset",
    long_about = None
)]
pub struct Cli {
    /// Use a specific configuration file instead of ~/.rsunblue/rsunblue.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Directory holding the daily log files
    #[arg(global = true, short = 'd', long = "dir", value_name = "DIR")]
    pub dir: Option<String>,

    /// Log file extension (case-sensitive)
    #[arg(global = true, long = "ext", value_name = "EXT")]
    pub ext: Option<String>,

    /// Minutes subtracted from sunrise and added to sunset
    #[arg(global = true, long = "padding", value_name = "MIN")]
    pub padding: Option<u32>,

    /// Half-width in minutes of the bw/bz windows
    #[arg(global = true, long = "window", value_name = "MIN")]
    pub window: Option<u32>,

    /// Name of the observation place
    #[arg(global = true, long = "place", value_name = "NAME")]
    pub place: Option<String>,

    /// Latitude in degrees (north positive)
    #[arg(global = true, long = "lat", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees (east positive)
    #[arg(global = true, long = "lon", allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// IANA timezone, e.g. Europe/Warsaw
    #[arg(global = true, long = "tz", value_name = "ZONE")]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Analyse every log in the directory (default)
    Report,

    /// Print padded sunrise/sunset and the inspection windows for a date
    Sun {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Print or initialise the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write the default configuration file if missing")]
        init: bool,
    },
}
