use tracing::{debug, debug_span, info, info_span};

use super::config::BatchConfig;
use super::report::{BatchReport, ChangeReporter};
use crate::enhancer::enhance;
use crate::error::Result;
use crate::material::ColumnIndex;
use crate::sanitize;
use crate::store::Table;

pub struct BatchRunner {
    config: BatchConfig,
}

impl BatchRunner {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Loads the whole table, enhances every eligible record in memory, then
    /// rewrites the table in one atomic step. Nothing touches the output file
    /// until every record has been processed.
    pub fn run(&self, reporter: &dyn ChangeReporter) -> Result<BatchReport> {
        let _batch_span = info_span!("batch",
            input = %sanitize::redact_path(&self.config.input_path),
            output = %sanitize::redact_path(&self.config.output_path),
            dry_run = self.config.dry_run,
        )
        .entered();

        // Step 1: Load
        let mut table = {
            let _step = info_span!("load").entered();
            Table::read(&self.config.input_path)?
        };
        let columns = ColumnIndex::resolve(&table, &self.config.input_path)?;
        debug!(
            rows = table.rows.len(),
            columns = table.headers.len(),
            "Loaded table"
        );

        // Step 2: Enhance
        let mut report = BatchReport {
            total: table.rows.len(),
            eligible: 0,
            enhanced: Vec::new(),
            output_path: self.config.output_path.clone(),
            written: false,
        };
        {
            let _step = info_span!("enhance").entered();
            for row in 0..table.rows.len() {
                if columns.status(&table, row) != self.config.eligible_status {
                    continue;
                }
                report.eligible += 1;

                let mut record = columns.record(&table, row);
                let _record_span = debug_span!("record", name = %record.name).entered();

                let enhancement = enhance(&mut record);
                if !enhancement.is_changed() {
                    continue;
                }

                columns.write_notes(&mut table, row, &record, &enhancement.changed);
                debug!(
                    stages = enhancement.changed.len(),
                    hardness = %enhancement.hardness,
                    "Record enhanced"
                );
                reporter.record_enhanced(&record.name, &enhancement);
                report.enhanced.push(record.name);
            }
        }

        // Step 3: Store
        if self.config.dry_run {
            info!("Dry run, table not written");
        } else {
            let _step = info_span!("store").entered();
            table.write_atomic(&self.config.output_path)?;
            report.written = true;
        }

        info!(
            total = report.total,
            eligible = report.eligible,
            enhanced = report.enhanced_count(),
            "Batch complete"
        );
        reporter.finished(&report);
        Ok(report)
    }
}
