use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A named observation place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default)]
    pub region: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Location {
    fn default() -> Self {
        Self::tarnow()
    }
}

impl Location {
    pub fn tarnow() -> Self {
        Self {
            name: "Tarnów".to_string(),
            region: "Poland".to_string(),
            timezone: "Europe/Warsaw".to_string(),
            latitude: 50.0123,
            longitude: 20.9856,
        }
    }

    /// Resolve the IANA timezone name.
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| AppError::Config(format!("unknown timezone '{}': {}", self.timezone, e)))
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(AppError::Config(format!(
                "latitude {} out of range [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(AppError::Config(format!(
                "longitude {} out of range [-180, 180]",
                self.longitude
            )));
        }
        self.tz().map(|_| ())
    }

    /// "Name, Region" or just "Name".
    pub fn label(&self) -> String {
        if self.region.is_empty() {
            self.name.clone()
        } else {
            format!("{}, {}", self.name, self.region)
        }
    }
}
