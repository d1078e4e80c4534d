//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `response_log` and `rescuer_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, RescuerRow, ResponseRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn: Connection,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS response_log (
                 episode             INTEGER NOT NULL,
                 time                REAL    NOT NULL,
                 rescuers_responding INTEGER NOT NULL,
                 rescuers_arrived    INTEGER NOT NULL,
                 closest_eta         REAL    NOT NULL,
                 min_distance        REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS rescuer_snapshots (
                 episode    INTEGER NOT NULL,
                 time       REAL    NOT NULL,
                 rescuer_id INTEGER NOT NULL,
                 status     TEXT    NOT NULL,
                 lat        REAL    NOT NULL,
                 lon        REAL    NOT NULL,
                 eta        REAL    NOT NULL,
                 distance   REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_response(&mut self, row: &ResponseRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO response_log \
             (episode, time, rescuers_responding, rescuers_arrived, closest_eta, min_distance) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                row.episode,
                row.time,
                row.rescuers_responding,
                row.rescuers_arrived,
                row.closest_eta,
                row.min_distance,
            ],
        )?;
        Ok(())
    }

    fn write_rescuers(&mut self, rows: &[RescuerRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO rescuer_snapshots \
                 (episode, time, rescuer_id, status, lat, lon, eta, distance) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.episode,
                    row.time,
                    row.rescuer_id,
                    row.status,
                    row.lat,
                    row.lon,
                    row.eta,
                    row.distance,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
