pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod projects;
pub mod stats;
pub mod time_intervals;
pub mod time_report;
