pub mod commands;
pub mod parser;

use crate::config::Config;
use parser::Cli;

impl Cli {
    /// Command-line values win over the configuration file.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(dir) = &self.dir {
            cfg.directory = dir.clone();
        }
        if let Some(ext) = &self.ext {
            cfg.extension = ext.clone();
        }
        if let Some(p) = self.padding {
            cfg.padding_minutes = p;
        }
        if let Some(w) = self.window {
            cfg.window_minutes = w;
        }
        if let Some(place) = &self.place {
            cfg.location.name = place.clone();
            cfg.location.region.clear();
        }
        if let Some(lat) = self.lat {
            cfg.location.latitude = lat;
        }
        if let Some(lon) = self.lon {
            cfg.location.longitude = lon;
        }
        if let Some(tz) = &self.tz {
            cfg.location.timezone = tz.clone();
        }
    }
}
