use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// One sensor sample: local wall-clock timestamp and the three colour channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: NaiveDateTime,
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl LogRecord {
    pub fn new(timestamp: NaiveDateTime, r: i64, g: i64, b: i64) -> Self {
        Self { timestamp, r, g, b }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.timestamp.time()
    }
}
