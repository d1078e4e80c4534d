//! `SwarmOutputObserver<W>`: bridges `SwarmObserver` to an `OutputWriter`.

use ss_sim::{ResponseSnapshot, Swarm, SwarmObserver};

use crate::row::{RescuerRow, ResponseRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SwarmObserver`] that records every log entry and every rescuer's
/// state to any [`OutputWriter`] backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `SwarmObserver`
/// methods have no return value.  After the episode ends, check for errors
/// with [`take_error`][Self::take_error].
pub struct SwarmOutputObserver<W: OutputWriter> {
    writer:     W,
    episode:    u32,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SwarmOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            episode:    0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Episodes seen so far.
    pub fn episodes(&self) -> u32 {
        self.episode
    }

    fn record(&mut self, swarm: &Swarm, snapshot: &ResponseSnapshot) {
        let row = ResponseRow {
            episode:             self.episode,
            time:                snapshot.time,
            rescuers_responding: snapshot.rescuers_responding as u32,
            rescuers_arrived:    snapshot.rescuers_arrived as u32,
            closest_eta:         snapshot.closest_eta,
            min_distance:        snapshot.min_distance,
        };
        let result = self.writer.write_response(&row);
        self.store_err(result);

        let rows: Vec<RescuerRow> = swarm
            .rescuers()
            .iter()
            .map(|r| RescuerRow {
                episode:    self.episode,
                time:       snapshot.time,
                rescuer_id: r.id.0,
                status:     r.status.as_str(),
                lat:        r.location.lat,
                lon:        r.location.lon,
                eta:        r.eta,
                distance:   r.distance,
            })
            .collect();
        let result = self.writer.write_rescuers(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, episode = self.episode, "Output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SwarmObserver for SwarmOutputObserver<W> {
    fn on_activate(&mut self, swarm: &Swarm, snapshot: &ResponseSnapshot) {
        self.episode += 1;
        self.record(swarm, snapshot);
    }

    fn on_tick(&mut self, swarm: &Swarm, snapshot: &ResponseSnapshot) {
        self.record(swarm, snapshot);
    }

    fn on_episode_end(&mut self, _swarm: &Swarm) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
