pub mod config;
pub mod report;
pub mod runner;

pub use config::BatchConfig;
pub use report::{BatchReport, ChangeReporter, ConsoleReporter, NoopReporter};
pub use runner::BatchRunner;
