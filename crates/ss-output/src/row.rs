//! Plain data row types written by output backends.

/// One response-log entry, tagged with the episode it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResponseRow {
    /// 1 for the first activation, incremented on every later activation.
    pub episode:             u32,
    /// Seconds since activation.
    pub time:                f64,
    pub rescuers_responding: u32,
    pub rescuers_arrived:    u32,
    pub closest_eta:         f64,
    pub min_distance:        f64,
}

/// One rescuer's state at a given point in an episode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RescuerRow {
    pub episode:    u32,
    pub time:       f64,
    pub rescuer_id: u32,
    /// `standby`, `responding`, or `arrived`.
    pub status:     &'static str,
    pub lat:        f64,
    pub lon:        f64,
    pub eta:        f64,
    pub distance:   f64,
}
