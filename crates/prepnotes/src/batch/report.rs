use std::path::PathBuf;

use crate::enhancer::Enhancement;

/// Outcome of one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Every data row in the table, eligible or not.
    pub total: usize,
    pub eligible: usize,
    /// Names of records with at least one note replaced, in table order.
    pub enhanced: Vec<String>,
    pub output_path: PathBuf,
    /// False for dry runs.
    pub written: bool,
}

impl BatchReport {
    pub fn enhanced_count(&self) -> usize {
        self.enhanced.len()
    }
}

/// Receives the per-record change log while a batch runs.
pub trait ChangeReporter {
    fn record_enhanced(&self, name: &str, enhancement: &Enhancement);

    fn finished(&self, _report: &BatchReport) {}
}

/// No-op reporter for tests.
pub struct NoopReporter;

impl ChangeReporter for NoopReporter {
    fn record_enhanced(&self, _name: &str, _enhancement: &Enhancement) {}
}

/// Prints one line per enhanced record and a closing summary to stdout.
pub struct ConsoleReporter;

impl ChangeReporter for ConsoleReporter {
    fn record_enhanced(&self, name: &str, _enhancement: &Enhancement) {
        println!("Enhanced: {}", name);
    }

    fn finished(&self, report: &BatchReport) {
        println!(
            "\nEnhanced {} materials with detailed preparation notes.",
            report.enhanced_count()
        );
        if report.written {
            println!("Updated CSV saved to {}", report.output_path.display());
        } else {
            println!(
                "Dry run: nothing written to {}",
                report.output_path.display()
            );
        }
    }
}
