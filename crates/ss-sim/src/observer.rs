//! Swarm observer trait for display refresh and data collection.

use crate::{Rescuer, ResponseSnapshot, Swarm};

/// Callbacks invoked by [`PollLoop`][crate::PollLoop] at key points of a
/// panic episode.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  A rendering layer typically redraws in
/// `on_tick`; an output writer records rows there.
///
/// # Example: status printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SwarmObserver for Printer {
///     fn on_arrival(&mut self, rescuer: &Rescuer, elapsed: f64) {
///         println!("{} arrived after {elapsed:.1}s", rescuer.id);
///     }
/// }
/// ```
pub trait SwarmObserver {
    /// Called right after the episode starts, with the first log entry.
    fn on_activate(&mut self, _swarm: &Swarm, _snapshot: &ResponseSnapshot) {}

    /// Called once per rescuer on the tick it arrives, before `on_tick`.
    fn on_arrival(&mut self, _rescuer: &Rescuer, _elapsed: f64) {}

    /// Called after every tick with the entry just appended to the log.
    fn on_tick(&mut self, _swarm: &Swarm, _snapshot: &ResponseSnapshot) {}

    /// Called when the driving loop stops refreshing an episode.
    fn on_episode_end(&mut self, _swarm: &Swarm) {}

    /// Called after the swarm has been reset to fresh standby rescuers.
    fn on_reset(&mut self, _swarm: &Swarm) {}
}

/// A [`SwarmObserver`] that does nothing.
pub struct NoopObserver;

impl SwarmObserver for NoopObserver {}
