//! Response-log entries and the control-panel summary.

/// Aggregate response metrics at one point in an episode.
///
/// One is appended to the swarm's log on activation and on every tick.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponseSnapshot {
    /// Seconds since activation.
    pub time: f64,

    /// Rescuers that have been dispatched: responding **plus** arrived.
    /// Reported as 0 in the activation entry.
    pub rescuers_responding: usize,

    pub rescuers_arrived: usize,

    /// Smallest ETA among still-responding rescuers.  `0.0` as soon as any
    /// rescuer has arrived, or when none is responding.
    pub closest_eta: f64,

    /// Smallest creation-time distance among still-responding rescuers,
    /// under the same zeroing rule as `closest_eta`.
    pub min_distance: f64,
}

/// Point-in-time view of an episode for a status panel.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SwarmSummary {
    pub active: bool,

    /// Seconds since activation; `0.0` when idle.
    pub elapsed: f64,

    /// `elapsed / progress_horizon_secs`, capped at `1.0`.
    pub progress: f64,

    pub arrived: usize,
    pub total:   usize,

    /// Smallest ETA among responding rescuers, `0.0` if none.  Unlike the
    /// log's `closest_eta`, arrived rescuers do not force this to zero.
    pub closest_eta: f64,

    /// `rescuers_responding` of the latest log entry.
    pub responding: usize,
}
