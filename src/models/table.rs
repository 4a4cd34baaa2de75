use crate::models::record::LogRecord;
use chrono::{NaiveDate, NaiveTime};

/// All samples of one log file, sorted by timestamp.
#[derive(Debug, Clone)]
pub struct LogTable {
    name: String,
    records: Vec<LogRecord>,
    single_day: bool,
}

impl LogTable {
    /// Build a table, sorting records chronologically.
    /// Returns None when there are no records.
    pub fn new(name: impl Into<String>, mut records: Vec<LogRecord>) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        records.sort_by_key(|r| r.timestamp);

        let first_date = records[0].date();
        let single_day = records.iter().all(|r| r.date() == first_date);

        Some(Self {
            name: name.into(),
            records,
            single_day,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Date of the first (earliest) record.
    pub fn first_date(&self) -> NaiveDate {
        self.records[0].date()
    }

    /// Records whose time of day lies in `[start, end]`, dates ignored.
    ///
    /// When `start > end` the range wraps midnight and selects
    /// `t >= start || t <= end`.
    pub fn between_time(&self, start: NaiveTime, end: NaiveTime) -> Vec<&LogRecord> {
        if start <= end {
            if self.single_day {
                // sorted by time of day: two binary searches
                let lo = self.records.partition_point(|r| r.time() < start);
                let hi = self.records.partition_point(|r| r.time() <= end);
                return self.records[lo..hi.max(lo)].iter().collect();
            }

            return self
                .records
                .iter()
                .filter(|r| r.time() >= start && r.time() <= end)
                .collect();
        }

        self.records
            .iter()
            .filter(|r| r.time() >= start || r.time() <= end)
            .collect()
    }
}
