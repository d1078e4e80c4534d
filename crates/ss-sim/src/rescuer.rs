//! A single simulated responder and its three-state lifecycle.

use std::fmt;

use ss_core::{Bearing, EtaModel, GeoPoint, RescuerId, SimRng, SwarmConfig, Timestamp};

/// ETAs at or below this are treated as zero when computing progress, so a
/// nearly-arrived rescuer never divides by (almost) nothing.
const ETA_EPSILON: f64 = 1e-9;

/// Where a rescuer is in one panic episode.
///
/// Transitions only ever go forward:
///
/// ```text
/// Standby --activate--> Responding --tick (eta <= threshold)--> Arrived
/// ```
///
/// `Arrived` is terminal until the swarm is reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RescuerStatus {
    #[default]
    Standby,
    Responding,
    Arrived,
}

impl RescuerStatus {
    /// Position in the lifecycle.  A rescuer's rank never decreases within
    /// one episode.
    #[inline]
    pub fn rank(self) -> u8 {
        match self {
            RescuerStatus::Standby    => 0,
            RescuerStatus::Responding => 1,
            RescuerStatus::Arrived    => 2,
        }
    }

    /// Status dot shown in the rescuer table.
    pub fn marker(self) -> &'static str {
        match self {
            RescuerStatus::Standby    => "⚪",
            RescuerStatus::Responding => "🟡",
            RescuerStatus::Arrived    => "🟢",
        }
    }

    /// Lower-case name used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            RescuerStatus::Standby    => "standby",
            RescuerStatus::Responding => "responding",
            RescuerStatus::Arrived    => "arrived",
        }
    }
}

impl fmt::Display for RescuerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RescuerStatus::Standby    => "Standby",
            RescuerStatus::Responding => "Responding",
            RescuerStatus::Arrived    => "Arrived",
        };
        f.write_str(s)
    }
}

/// A simulated responder heading for the victim.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rescuer {
    pub id: RescuerId,

    /// Current position.  Only moves while `Responding`.
    pub location: GeoPoint,

    /// Fixed at creation.  Only used by `EtaModel::Kinematic`.
    pub speed: f64,

    /// Estimated time to arrival.  Never negative; `0.0` once arrived.
    pub eta: f64,

    /// Distance to the victim as assessed at creation.  Not updated as the
    /// rescuer moves.
    pub distance: f64,

    pub status: RescuerStatus,

    /// Time of the last position / ETA update.
    pub last_update: Timestamp,
}

impl Rescuer {
    /// A standby rescuer with explicit state.
    pub fn new(
        id:       RescuerId,
        location: GeoPoint,
        speed:    f64,
        eta:      f64,
        distance: f64,
        now:      Timestamp,
    ) -> Self {
        Self {
            id,
            location,
            speed,
            eta: eta.max(0.0),
            distance,
            status: RescuerStatus::Standby,
            last_update: now,
        }
    }

    /// Place a new standby rescuer at a random offset from `config.victim`.
    ///
    /// Draw order is fixed (lat offset, lon offset, then the ETA model's
    /// draws) so a given seed always yields the same swarm.
    pub fn spawn(id: RescuerId, config: &SwarmConfig, rng: &mut SimRng, now: Timestamp) -> Self {
        let d_lat = rng.symmetric(config.offset_deg);
        let d_lon = rng.symmetric(config.offset_deg);
        let location = config.victim.offset(d_lat, d_lon);

        match config.eta_model {
            EtaModel::Placeholder => {
                let distance = rng.uniform(config.distance_range);
                let eta      = rng.uniform(config.eta_range);
                let speed    = rng.uniform(config.speed_range);
                Self::new(id, location, speed, eta, distance, now)
            }
            EtaModel::Kinematic => {
                let speed    = rng.uniform(config.speed_range);
                let km       = location.distance_km(config.victim);
                let eta      = round_to(km / speed, 2);
                let distance = round_to(km, 1);
                Self::new(id, location, speed, eta, distance, now)
            }
        }
    }

    /// Standby → Responding.  Returns `false` (and changes nothing) for any
    /// other starting status.
    pub fn dispatch(&mut self, now: Timestamp) -> bool {
        if self.status != RescuerStatus::Standby {
            return false;
        }
        self.status = RescuerStatus::Responding;
        self.last_update = now;
        true
    }

    /// Advance a responding rescuer to `now`.
    ///
    /// Moves `progress = (now - last_update) / eta` (clamped to `[0, 1]`) of
    /// the remaining way to `victim`, burns the elapsed time off the ETA,
    /// and marks the rescuer arrived once the ETA is at or below
    /// `arrival_threshold`.  A `now` earlier than `last_update` counts as no
    /// elapsed time.
    ///
    /// Returns `true` only on the call that made the rescuer arrive.
    /// Non-responding rescuers are left untouched.
    pub fn advance_toward(&mut self, victim: GeoPoint, now: Timestamp, arrival_threshold: f64) -> bool {
        if self.status != RescuerStatus::Responding {
            return false;
        }

        let dt = now.since(self.last_update).max(0.0);
        let progress = if self.eta <= ETA_EPSILON {
            1.0
        } else {
            (dt / self.eta).clamp(0.0, 1.0)
        };

        self.location    = self.location.lerp_toward(victim, progress);
        self.eta         = (self.eta - dt).max(0.0);
        self.last_update = now;

        if self.eta <= arrival_threshold {
            self.status = RescuerStatus::Arrived;
            self.eta = 0.0;
            return true;
        }
        false
    }

    /// Direction from this rescuer's position to `victim`.
    #[inline]
    pub fn bearing_to(&self, victim: GeoPoint) -> Bearing {
        Bearing::between(self.location.as_point2(), victim.as_point2())
    }

    /// ETA column text: `"2.4 min"` while responding, `"Arrived"` otherwise.
    pub fn eta_label(&self) -> String {
        if self.status == RescuerStatus::Responding {
            format!("{:.1} min", self.eta)
        } else {
            "Arrived".to_owned()
        }
    }
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}
