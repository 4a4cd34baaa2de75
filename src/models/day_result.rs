/// The three blue-channel averages of one log file.
/// `None` means the window selected no records.
#[derive(Debug, Clone, PartialEq)]
pub struct DayResult {
    pub file: String,
    pub bw: Option<f64>,
    pub bavg: Option<f64>,
    pub bz: Option<f64>,
}
