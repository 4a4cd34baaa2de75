//! Blue-channel averages in the sunrise, daytime and sunset windows.

use crate::core::solar::SunTimes;
use crate::models::{DayResult, LogRecord, LogTable};
use chrono::{DateTime, NaiveTime, TimeDelta};
use chrono_tz::Tz;
use log::debug;

/// Time-of-day bounds of one inspection window, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// `[center - half, center + half]` as wall-clock times.
    pub fn around(center: DateTime<Tz>, half: TimeDelta) -> Self {
        Self::new((center - half).time(), (center + half).time())
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }
}

/// The three windows for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindows {
    pub sunrise: TimeWindow,
    pub daytime: TimeWindow,
    pub sunset: TimeWindow,
}

impl DayWindows {
    /// `sun` is already padded; `inner` is the half-width of the bw/bz windows.
    pub fn new(sun: &SunTimes, inner: TimeDelta) -> Self {
        Self {
            sunrise: TimeWindow::around(sun.sunrise, inner),
            daytime: TimeWindow::new(sun.sunrise.time(), sun.sunset.time()),
            sunset: TimeWindow::around(sun.sunset, inner),
        }
    }
}

/// Mean of B over `records`; None when empty.
pub fn mean_blue<'a, I>(records: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a LogRecord>,
{
    let (sum, count) = records
        .into_iter()
        .fold((0.0_f64, 0_usize), |(s, n), r| (s + r.b as f64, n + 1));

    if count == 0 { None } else { Some(sum / count as f64) }
}

pub fn window_mean(table: &LogTable, window: &TimeWindow) -> Option<f64> {
    mean_blue(table.between_time(window.start, window.end))
}

/// bw, bavg and bz for one table.
pub fn average_day(table: &LogTable, sun: &SunTimes, inner: TimeDelta) -> DayResult {
    let windows = DayWindows::new(sun, inner);

    let result = DayResult {
        file: table.name().to_string(),
        bw: window_mean(table, &windows.sunrise),
        bavg: window_mean(table, &windows.daytime),
        bz: window_mean(table, &windows.sunset),
    };

    debug!(
        "{}: bw={:?} bavg={:?} bz={:?}",
        result.file, result.bw, result.bavg, result.bz
    );

    result
}
