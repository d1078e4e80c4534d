//! Swarm configuration.

use crate::{GeoPoint, SwarmError, SwarmResult};

/// How a new rescuer's initial ETA and distance are chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EtaModel {
    /// Draw both uniformly from `eta_range` / `distance_range`, independent
    /// of where the rescuer was actually placed.
    #[default]
    Placeholder,

    /// Distance is the haversine distance to the victim in km (rounded to
    /// 0.1); ETA is `distance / speed` (rounded to 0.01).
    Kinematic,
}

/// Top-level simulation configuration.
///
/// `Default` reproduces the stock demo: five rescuers scattered within
/// ±0.02° of a victim in lower Manhattan.  Applications typically load this
/// from JSON (with the `serde` feature) and override fields from the
/// command line.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwarmConfig {
    /// Fixed victim location for the whole run.
    pub victim: GeoPoint,

    /// Number of rescuers.  Fixed for the lifetime of a swarm.
    pub rescuer_count: usize,

    /// Half-width, in degrees, of the box rescuers are scattered in.
    pub offset_deg: f64,

    /// Rescuer speed, `[lo, hi)`.
    pub speed_range: [f64; 2],

    /// Placeholder initial ETA, `[lo, hi)`.  Ignored by `EtaModel::Kinematic`.
    pub eta_range: [f64; 2],

    /// Placeholder initial distance, `[lo, hi)`.  Ignored by `EtaModel::Kinematic`.
    pub distance_range: [f64; 2],

    pub eta_model: EtaModel,

    /// A responding rescuer whose ETA drops to or below this is marked arrived.
    pub arrival_threshold: f64,

    /// Pause between refreshes of the driving loop, seconds.
    pub refresh_interval_secs: f64,

    /// Elapsed time at which the episode progress bar reads full, seconds.
    pub progress_horizon_secs: f64,

    /// Master RNG seed.  `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            victim:                GeoPoint::new(40.7128, -74.0060),
            rescuer_count:         5,
            offset_deg:            0.02,
            speed_range:           [1.5, 3.0],
            eta_range:             [0.5, 3.0],
            distance_range:        [0.3, 1.5],
            eta_model:             EtaModel::Placeholder,
            arrival_threshold:     0.1,
            refresh_interval_secs: 0.5,
            progress_horizon_secs: 10.0,
            seed:                  None,
        }
    }
}

/// Largest swarm `validate` accepts.  Ids are `u32`, and the console table
/// stops being readable long before this.
pub const MAX_RESCUERS: usize = 10_000;

/// Longest refresh pause `validate` accepts, seconds.
pub const MAX_REFRESH_INTERVAL_SECS: f64 = 3600.0;

/// Largest scatter radius `validate` accepts, degrees.
pub const MAX_OFFSET_DEG: f64 = 90.0;

impl SwarmConfig {
    /// Reject configurations that would make the simulation ill-defined.
    pub fn validate(&self) -> SwarmResult<()> {
        if self.rescuer_count == 0 {
            return Err(SwarmError::Config("rescuer_count must be at least 1".into()));
        }
        if self.rescuer_count > MAX_RESCUERS {
            return Err(SwarmError::Config(format!("rescuer_count must be at most {MAX_RESCUERS}")));
        }
        if !(self.victim.lat.is_finite() && self.victim.lon.is_finite()) {
            return Err(SwarmError::Config(format!("victim {} is not finite", self.victim)));
        }
        if !(0.0..=MAX_OFFSET_DEG).contains(&self.offset_deg) {
            return Err(SwarmError::Config(format!("offset_deg must be within [0, {MAX_OFFSET_DEG}]")));
        }
        check_range("speed_range", self.speed_range)?;
        if self.speed_range[0] <= 0.0 {
            return Err(SwarmError::Config("speed_range must be strictly positive".into()));
        }
        check_range("eta_range", self.eta_range)?;
        check_range("distance_range", self.distance_range)?;
        if !(self.arrival_threshold.is_finite() && self.arrival_threshold >= 0.0) {
            return Err(SwarmError::Config("arrival_threshold must be finite and non-negative".into()));
        }
        if !(0.0..=MAX_REFRESH_INTERVAL_SECS).contains(&self.refresh_interval_secs) {
            return Err(SwarmError::Config(format!(
                "refresh_interval_secs must be within [0, {MAX_REFRESH_INTERVAL_SECS}]"
            )));
        }
        if !(self.progress_horizon_secs.is_finite() && self.progress_horizon_secs > 0.0) {
            return Err(SwarmError::Config("progress_horizon_secs must be finite and positive".into()));
        }
        Ok(())
    }
}

fn check_range(name: &str, [lo, hi]: [f64; 2]) -> SwarmResult<()> {
    if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || hi < lo {
        return Err(SwarmError::Config(format!("{name} [{lo}, {hi}] is not a valid non-negative range")));
    }
    Ok(())
}
