//! Test harness for running batches against an isolated table file.

#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

use prepnotes::{BatchConfig, BatchReport, BatchRunner, NoopReporter, Table};

pub struct TestHarness {
    /// Keeps the directory alive for the harness lifetime.
    temp_dir: TempDir,
    /// Path of the materials table within temp_dir.
    pub table_path: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let table_path = temp_dir.path().join("materials_rows.csv");
        Self {
            temp_dir,
            table_path,
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.temp_dir.path()
    }

    pub fn write_table(&self, text: &str) {
        std::fs::write(&self.table_path, text).expect("Failed to write table");
    }

    pub fn read_text(&self) -> String {
        std::fs::read_to_string(&self.table_path).expect("Failed to read table")
    }

    pub fn read_table(&self) -> Table {
        Table::read(&self.table_path).expect("Failed to parse table")
    }

    /// Runs an in-place batch over the harness table.
    pub fn run(&self) -> prepnotes::Result<BatchReport> {
        BatchRunner::new(BatchConfig::in_place(&self.table_path)).run(&NoopReporter)
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
