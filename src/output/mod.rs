pub mod console;
pub mod csv_log;
pub mod plot;

pub use console::ConsoleReport;
pub use csv_log::CycleLog;
