//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, RescuerRow, ResponseRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SwarmOutputObserver::take_error`][crate::SwarmOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one response-log row.
    fn write_response(&mut self, row: &ResponseRow) -> OutputResult<()>;

    /// Write a batch of per-rescuer rows.
    fn write_rescuers(&mut self, rows: &[RescuerRow]) -> OutputResult<()>;

    /// Flush everything written so far to disk.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
