//! The `Swarm` struct: victim, rescuers, and the panic-episode state machine.

use ss_core::{GeoPoint, RescuerId, SimRng, SwarmConfig, SwarmError, SwarmResult, Timestamp};

use crate::{Rescuer, RescuerStatus, ResponseSnapshot, SwarmSummary};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What one call to [`Swarm::tick`] produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TickReport {
    /// The log entry appended by this tick.
    pub snapshot: ResponseSnapshot,

    /// Rescuers that arrived during this tick, in ascending id order.
    pub arrivals: Vec<RescuerId>,
}

// ── Swarm ─────────────────────────────────────────────────────────────────────

/// All state for one simulated emergency.
///
/// A swarm is always initialized: construction places `rescuer_count`
/// standby rescuers around the victim.  From there:
///
/// 1. [`activate`][Self::activate] starts a panic episode and dispatches
///    every rescuer.
/// 2. [`tick`][Self::tick] advances every responding rescuer to `now` and
///    appends one [`ResponseSnapshot`] to the log.
/// 3. [`reset`][Self::reset] ends the episode and regenerates all rescuers
///    from fresh random draws.
///
/// `Swarm` never reads a clock; every time-dependent method takes `now`.
/// Drive it with [`PollLoop`][crate::PollLoop] or any other scheduler.
///
/// Create via [`Swarm::new`] or [`SwarmBuilder`][crate::SwarmBuilder].
pub struct Swarm {
    config:       SwarmConfig,
    rng:          SimRng,
    rescuers:     Vec<Rescuer>,
    panic_active: bool,
    activated_at: Option<Timestamp>,
    elapsed:      f64,
    log:          Vec<ResponseSnapshot>,
}

impl Swarm {
    /// Validate `config` and place a fresh set of standby rescuers.
    pub fn new(config: SwarmConfig, mut rng: SimRng, now: Timestamp) -> SwarmResult<Self> {
        config.validate()?;
        let rescuers = spawn_rescuers(&config, &mut rng, now);
        Ok(Self::from_parts(config, rng, rescuers))
    }

    /// Assemble a swarm from pre-built rescuers.  Caller has validated.
    pub(crate) fn from_parts(config: SwarmConfig, rng: SimRng, rescuers: Vec<Rescuer>) -> Self {
        tracing::debug!(
            rescuers = rescuers.len(),
            victim = %config.victim,
            "Swarm initialized"
        );
        Self {
            config,
            rng,
            rescuers,
            panic_active: false,
            activated_at: None,
            elapsed:      0.0,
            log:          Vec::new(),
        }
    }

    // ── Episode lifecycle ─────────────────────────────────────────────────

    /// Start a panic episode at `now`.
    ///
    /// Every rescuer goes to `Responding` with `last_update = now`, and the
    /// log is restarted with a single entry whose `rescuers_responding` is 0
    /// and whose ETA / distance are the minima over all rescuers.
    ///
    /// # Errors
    ///
    /// [`SwarmError::AlreadyActive`] if an episode is already running.
    pub fn activate(&mut self, now: Timestamp) -> SwarmResult<&ResponseSnapshot> {
        if self.panic_active {
            return Err(SwarmError::AlreadyActive);
        }

        self.panic_active = true;
        self.activated_at = Some(now);
        self.elapsed      = 0.0;
        for r in &mut self.rescuers {
            r.dispatch(now);
        }

        let snapshot = ResponseSnapshot {
            time:                0.0,
            rescuers_responding: 0,
            rescuers_arrived:    0,
            closest_eta:         min_of(self.rescuers.iter().map(|r| r.eta)),
            min_distance:        min_of(self.rescuers.iter().map(|r| r.distance)),
        };
        self.log.clear();
        self.log.push(snapshot);

        tracing::info!(
            rescuers = self.rescuers.len(),
            victim = %self.config.victim,
            closest_eta = snapshot.closest_eta,
            "Panic activated - rescuers dispatched"
        );

        Ok(&self.log[0])
    }

    /// Advance every responding rescuer to `now` and log one snapshot.
    ///
    /// Always mutates state; there is no partial-failure path once the
    /// precondition holds.
    ///
    /// # Errors
    ///
    /// [`SwarmError::NotActive`] if no episode is running.
    pub fn tick(&mut self, now: Timestamp) -> SwarmResult<TickReport> {
        let Some(start) = self.activated_at.filter(|_| self.panic_active) else {
            return Err(SwarmError::NotActive);
        };
        // A clock that went backwards reads as no time passed.
        self.elapsed = now.since(start).max(0.0);

        let victim    = self.config.victim;
        let threshold = self.config.arrival_threshold;
        let mut arrivals = Vec::new();
        for r in &mut self.rescuers {
            if r.advance_toward(victim, now, threshold) {
                tracing::info!(
                    rescuer = %r.id,
                    elapsed = self.elapsed,
                    "Rescuer arrived"
                );
                arrivals.push(r.id);
            }
        }

        let snapshot = self.aggregate();
        self.log.push(snapshot);

        tracing::debug!(
            elapsed = snapshot.time,
            responding = snapshot.rescuers_responding,
            arrived = snapshot.rescuers_arrived,
            closest_eta = snapshot.closest_eta,
            "Tick"
        );

        Ok(TickReport { snapshot, arrivals })
    }

    /// End any episode and regenerate all rescuers with new random draws.
    ///
    /// Safe to call at any point between ticks, active or not.
    pub fn reset(&mut self, now: Timestamp) {
        let was_active = self.panic_active;
        self.panic_active = false;
        self.activated_at = None;
        self.elapsed      = 0.0;
        self.log.clear();
        self.rescuers = spawn_rescuers(&self.config, &mut self.rng, now);

        tracing::info!(was_active, rescuers = self.rescuers.len(), "Simulation reset");
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    #[inline]
    pub fn victim(&self) -> GeoPoint {
        self.config.victim
    }

    #[inline]
    pub fn rescuers(&self) -> &[Rescuer] {
        &self.rescuers
    }

    pub fn rescuer(&self, id: RescuerId) -> Option<&Rescuer> {
        self.rescuers.iter().find(|r| r.id == id)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.panic_active
    }

    #[inline]
    pub fn activated_at(&self) -> Option<Timestamp> {
        self.activated_at
    }

    /// Seconds from activation to the latest tick; `0.0` when idle.
    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Every snapshot of the current episode, oldest first.
    #[inline]
    pub fn response_log(&self) -> &[ResponseSnapshot] {
        &self.log
    }

    pub fn count(&self, status: RescuerStatus) -> usize {
        self.rescuers.iter().filter(|r| r.status == status).count()
    }

    /// `true` once every rescuer has arrived.
    pub fn is_settled(&self) -> bool {
        self.rescuers.iter().all(|r| r.status == RescuerStatus::Arrived)
    }

    /// Metrics for a status panel.
    pub fn summary(&self) -> SwarmSummary {
        let closest_eta = min_of(
            self.rescuers
                .iter()
                .filter(|r| r.status == RescuerStatus::Responding)
                .map(|r| r.eta),
        );
        SwarmSummary {
            active:      self.panic_active,
            elapsed:     self.elapsed,
            progress:    (self.elapsed / self.config.progress_horizon_secs).clamp(0.0, 1.0),
            arrived:     self.count(RescuerStatus::Arrived),
            total:       self.rescuers.len(),
            closest_eta,
            responding:  self.log.last().map_or(0, |s| s.rescuers_responding),
        }
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn aggregate(&self) -> ResponseSnapshot {
        let arrived    = self.count(RescuerStatus::Arrived);
        let responding = self.count(RescuerStatus::Responding) + arrived;

        // Any arrival zeroes both minima, even with others still en route.
        let (closest_eta, min_distance) = if arrived > 0 {
            (0.0, 0.0)
        } else {
            let active = || {
                self.rescuers
                    .iter()
                    .filter(|r| r.status == RescuerStatus::Responding)
            };
            (min_of(active().map(|r| r.eta)), min_of(active().map(|r| r.distance)))
        };

        ResponseSnapshot {
            time: self.elapsed,
            rescuers_responding: responding,
            rescuers_arrived: arrived,
            closest_eta,
            min_distance,
        }
    }
}

/// Place `config.rescuer_count` standby rescuers with ids `1..=N`.
///
/// `validate` bounds the count by `MAX_RESCUERS`, so every index has an id.
fn spawn_rescuers(config: &SwarmConfig, rng: &mut SimRng, now: Timestamp) -> Vec<Rescuer> {
    (0..config.rescuer_count)
        .map_while(RescuerId::from_index)
        .map(|id| Rescuer::spawn(id, config, rng, now))
        .collect()
}

/// Minimum of `values`, or `0.0` if there are none.
fn min_of(values: impl Iterator<Item = f64>) -> f64 {
    values.reduce(f64::min).unwrap_or(0.0)
}
