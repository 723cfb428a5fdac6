//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `deliveries.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, TickSummaryRow};

/// Writes the delivery log to two CSV files.
pub struct CsvWriter {
    deliveries: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record([
            "sequence",
            "tick",
            "robot",
            "mail_id",
            "destination_floor",
            "arrival_tick",
            "weight",
            "score",
            "fee_summary",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "delivered_total"])?;

        Ok(Self {
            deliveries,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_delivery(&mut self, row: &DeliveryRow) -> OutputResult<()> {
        self.deliveries.write_record(&[
            row.sequence.to_string(),
            row.tick.to_string(),
            row.robot.clone(),
            row.mail_id.to_string(),
            row.destination_floor.to_string(),
            row.arrival_tick.to_string(),
            row.weight.to_string(),
            format!("{:.4}", row.score),
            row.fee_summary.clone(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[row.tick.to_string(), row.delivered_total.to_string()])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
