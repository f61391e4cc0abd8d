pub mod category;
pub mod day_summary;
pub mod time_log;
