pub mod backup;
pub mod clock;
pub mod config;
pub mod log;
pub mod project;
pub mod register;
pub mod status;
pub mod time_report;
