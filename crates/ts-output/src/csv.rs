//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `round_events.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::EventWriter;
use crate::{OutputResult, RoundEventRow, TickSummaryRow};

/// Writes the round log to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("round_events.csv"))?;
        events.write_record(["tick", "event", "traveler", "station", "detail"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "elapsed_secs", "in_flight", "finished", "fraud_success"])?;

        Ok(Self {
            events,
            summaries,
            finished: false,
        })
    }
}

/// Empty cell for "not applicable".
fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

impl EventWriter for CsvWriter {
    fn write_events(&mut self, rows: &[RoundEventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record(&[
                row.tick.to_string(),
                row.event.as_str().to_owned(),
                opt(row.traveler),
                opt(row.station),
                row.detail.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            format!("{:.3}", row.elapsed_secs),
            row.in_flight.to_string(),
            row.finished.to_string(),
            row.fraud_success.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
