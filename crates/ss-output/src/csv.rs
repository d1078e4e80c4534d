//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `response_log.csv`
//! - `rescuer_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, RescuerRow, ResponseRow};
use crate::writer::OutputWriter;

pub const RESPONSE_HEADERS: [&str; 6] = [
    "episode", "time", "rescuers_responding", "rescuers_arrived", "closest_eta", "min_distance",
];

pub const RESCUER_HEADERS: [&str; 8] = [
    "episode", "time", "rescuer_id", "status", "lat", "lon", "eta", "distance",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    responses: Writer<File>,
    rescuers:  Writer<File>,
}

impl CsvWriter {
    /// Create (truncating) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut responses = Writer::from_path(dir.join("response_log.csv"))?;
        responses.write_record(RESPONSE_HEADERS)?;

        let mut rescuers = Writer::from_path(dir.join("rescuer_snapshots.csv"))?;
        rescuers.write_record(RESCUER_HEADERS)?;

        Ok(Self { responses, rescuers })
    }
}

impl OutputWriter for CsvWriter {
    fn write_response(&mut self, row: &ResponseRow) -> OutputResult<()> {
        self.responses.write_record(&[
            row.episode.to_string(),
            format!("{:.3}", row.time),
            row.rescuers_responding.to_string(),
            row.rescuers_arrived.to_string(),
            format!("{:.3}", row.closest_eta),
            format!("{:.3}", row.min_distance),
        ])?;
        Ok(())
    }

    fn write_rescuers(&mut self, rows: &[RescuerRow]) -> OutputResult<()> {
        for row in rows {
            self.rescuers.write_record(&[
                row.episode.to_string(),
                format!("{:.3}", row.time),
                row.rescuer_id.to_string(),
                row.status.to_owned(),
                format!("{:.6}", row.lat),
                format!("{:.6}", row.lon),
                format!("{:.3}", row.eta),
                format!("{:.3}", row.distance),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.responses.flush()?;
        self.rescuers.flush()?;
        Ok(())
    }
}
