use crate::models::day_result::DayResult;

/// Running minimum/maximum of one statistic.
///
/// Starts at (+inf, -inf); missing values never update it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

impl Default for Extrema {
    fn default() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Extrema {
    pub fn update(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
    }
}

/// Extrema of bw, bavg and bz across all processed files.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub bw: Extrema,
    pub bavg: Extrema,
    pub bz: Extrema,
    pub files: usize,
}

impl RunSummary {
    pub fn update(&mut self, result: &DayResult) {
        self.bw.update(result.bw);
        self.bavg.update(result.bavg);
        self.bz.update(result.bz);
        self.files += 1;
    }
}
