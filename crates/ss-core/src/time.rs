//! Wall-clock time model.
//!
//! # Design
//!
//! Unlike a fixed-step simulation, rescuer motion is driven by real elapsed
//! time: each tick moves a rescuer by `(now - last_update) / eta` of the way
//! to the victim.  Time is therefore a floating-point [`Timestamp`] in
//! seconds, supplied by a [`Clock`].
//!
//! The state-advance functions never read a clock themselves; they take
//! `now` as an argument.  Only the driving loop holds a `Clock`, which makes
//! every tick reproducible in tests with a [`ManualClock`].

use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// A point in time, in seconds since an arbitrary epoch.
///
/// [`SystemClock`] uses the Unix epoch; tests usually start at `0.0`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    /// Seconds from `earlier` to `self`.  Negative if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }

    #[inline]
    pub fn secs(self) -> f64 {
        self.0
    }
}

impl std::ops::Add<f64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: f64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = f64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.0)
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────────

/// Source of `now` plus the pause between refreshes.
///
/// Bundling `sleep` with `now` lets a fake clock turn the refresh pause into
/// an instant time jump, so the driving loop runs at full speed in tests.
pub trait Clock {
    fn now(&self) -> Timestamp;

    /// Block (or pretend to block) for `secs` seconds.
    fn sleep(&mut self, secs: f64);
}

/// Real wall clock: Unix time, `std::thread::sleep`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Timestamp(secs)
    }

    fn sleep(&mut self, secs: f64) {
        // Negative, NaN and out-of-range pauses are skipped.
        if let Ok(d) = Duration::try_from_secs_f64(secs) {
            std::thread::sleep(d);
        }
    }
}

/// Deterministic fake clock.  `sleep` advances time instantly.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self { now: start }
    }

    /// Jump to an absolute time.
    #[inline]
    pub fn set(&mut self, t: Timestamp) {
        self.now = t;
    }

    #[inline]
    pub fn advance(&mut self, secs: f64) {
        self.now = self.now + secs;
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Timestamp {
        self.now
    }

    #[inline]
    fn sleep(&mut self, secs: f64) {
        self.advance(secs.max(0.0));
    }
}
