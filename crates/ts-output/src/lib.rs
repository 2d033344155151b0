//! `ts-output` — round event log for the turnstile rush simulation.
//!
//! The log is optional telemetry: a round keeps no persisted state, and
//! nothing written here is ever read back by the simulation.
//!
//! | Backend | Files created                                |
//! |---------|----------------------------------------------|
//! | CSV     | `round_events.csv`, `tick_summaries.csv`     |
//!
//! Backends implement [`EventWriter`] and are driven by
//! [`EventLogObserver`], which implements `ts_sim::RoundObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ts_output::{CsvWriter, EventLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = EventLogObserver::new(writer, 60);
//! round.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EventLogObserver;
pub use row::{EventKind, RoundEventRow, TickSummaryRow};
pub use writer::EventWriter;
