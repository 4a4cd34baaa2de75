//! Sunrise and sunset via the SPA algorithm of `solar_positioning`.
//!
//! Events are solved in UTC for the requested date, then converted to the
//! location's timezone.

use crate::errors::{AppError, AppResult};
use crate::models::Location;
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Utc};
use chrono_tz::Tz;
use log::debug;
use solar_positioning::{Horizon, SunriseResult, spa};

/// Estimated TT - UT for the 2020s, seconds.
const DELTA_T_SECONDS: f64 = 69.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SunEvent {
    Sunrise,
    Sunset,
}

impl SunEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SunEvent::Sunrise => "sunrise",
            SunEvent::Sunset => "sunset",
        }
    }
}

/// Padded sunrise and sunset in the location's timezone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunTimes {
    pub sunrise: DateTime<Tz>,
    pub sunset: DateTime<Tz>,
}

/// `sunrise - padding` and `sunset + padding` for `date` at `location`.
pub fn sun_times(date: NaiveDate, location: &Location, padding: TimeDelta) -> AppResult<SunTimes> {
    let sunrise = event_time(date, location, SunEvent::Sunrise)? - padding;
    let sunset = event_time(date, location, SunEvent::Sunset)? + padding;

    debug!(
        "{} @ {}: sunrise' {} sunset' {}",
        date,
        location.name,
        sunrise.format("%H:%M:%S"),
        sunset.format("%H:%M:%S")
    );

    Ok(SunTimes { sunrise, sunset })
}

/// Unpadded sunrise or sunset on the local calendar date `date`.
pub fn event_time(date: NaiveDate, location: &Location, event: SunEvent) -> AppResult<DateTime<Tz>> {
    let tz = location.tz()?;
    let unavailable = || AppError::Astronomical {
        date: date.to_string(),
        place: location.label(),
        event: event.as_str(),
    };

    let utc = event_utc(date, location.latitude, location.longitude, event)?.ok_or_else(unavailable)?;
    let local = utc.with_timezone(&tz);

    // Far from Greenwich the UTC solution can land on the neighbouring local day.
    let local_date = local.date_naive();
    if local_date == date {
        return Ok(local);
    }

    let shifted = if local_date < date {
        date.succ_opt()
    } else {
        date.pred_opt()
    }
    .ok_or_else(unavailable)?;

    let utc = event_utc(shifted, location.latitude, location.longitude, event)?.ok_or_else(unavailable)?;
    Ok(utc.with_timezone(&tz))
}

/// Event instant in UTC, or None when the sun does not cross the horizon.
fn event_utc(date: NaiveDate, latitude: f64, longitude: f64, event: SunEvent) -> AppResult<Option<DateTime<Utc>>> {
    let result = spa::sunrise_sunset_utc_for_horizon(
        date.year(),
        date.month(),
        date.day(),
        latitude,
        longitude,
        DELTA_T_SECONDS,
        Horizon::SunriseSunset,
    )
    .map_err(|e| AppError::Config(format!("solar position for {}: {}", date, e)))?;

    let hours = match result {
        SunriseResult::RegularDay { sunrise, sunset, .. } => match event {
            SunEvent::Sunrise => sunrise.hours(),
            SunEvent::Sunset => sunset.hours(),
        },
        SunriseResult::AllDay { .. } | SunriseResult::AllNight { .. } => return Ok(None),
    };

    // hours are counted from 00:00 UTC of `date` and may fall outside [0, 24)
    let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
        return Ok(None);
    };
    let offset = TimeDelta::milliseconds((hours * 3_600_000.0).round() as i64);
    Ok(Some(midnight.and_utc() + offset))
}
