//! `ss-output`: response-log writers for the safeswarm rescue simulation.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend     | Files created                                   |
//! |-----------|-------------|-------------------------------------------------|
//! | *(none)*  | CSV         | `response_log.csv`, `rescuer_snapshots.csv`     |
//! | `sqlite`  | SQLite      | `output.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by
//! [`SwarmOutputObserver`], which implements `ss_sim::SwarmObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ss_output::{CsvWriter, SwarmOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SwarmOutputObserver::new(writer);
//! poll.activate(&mut swarm, &mut obs)?;
//! poll.run_until_settled(&mut swarm, 120, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SwarmOutputObserver;
pub use row::{RescuerRow, ResponseRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
