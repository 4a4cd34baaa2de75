pub mod day_result;
pub mod location;
pub mod record;
pub mod summary;
pub mod table;

pub use day_result::DayResult;
pub use location::Location;
pub use record::LogRecord;
pub use summary::{Extrema, RunSummary};
pub use table::LogTable;
