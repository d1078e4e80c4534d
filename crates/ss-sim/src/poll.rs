//! The refresh loop that drives a [`Swarm`] in real (or fake) time.

use ss_core::{Clock, SwarmResult};

use crate::{Swarm, SwarmObserver};

/// Why [`PollLoop::run_until_settled`] returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EpisodeEnd {
    /// Every rescuer arrived.
    Settled { ticks: usize },
    /// `max_ticks` ran out first.
    TickLimit { ticks: usize },
}

impl EpisodeEnd {
    pub fn ticks(self) -> usize {
        match self {
            EpisodeEnd::Settled { ticks } | EpisodeEnd::TickLimit { ticks } => ticks,
        }
    }
}

/// Cooperative single-threaded driver: tick, notify, pause, repeat.
///
/// The loop owns the [`Clock`]; the swarm never sees it.  With a
/// [`ManualClock`][ss_core::ManualClock] the pause is an instant time jump,
/// so whole episodes run synchronously in tests.
pub struct PollLoop<C: Clock> {
    pub clock: C,

    /// Pause between ticks, seconds.
    pub interval_secs: f64,
}

impl<C: Clock> PollLoop<C> {
    pub fn new(clock: C, interval_secs: f64) -> Self {
        Self { clock, interval_secs }
    }

    /// Start an episode at the clock's current time.
    pub fn activate<O: SwarmObserver>(&mut self, swarm: &mut Swarm, observer: &mut O) -> SwarmResult<()> {
        let snapshot = *swarm.activate(self.clock.now())?;
        observer.on_activate(swarm, &snapshot);
        Ok(())
    }

    /// Reset the swarm at the clock's current time.
    pub fn reset<O: SwarmObserver>(&mut self, swarm: &mut Swarm, observer: &mut O) {
        swarm.reset(self.clock.now());
        observer.on_reset(swarm);
    }

    /// Run exactly `n` refresh iterations.
    pub fn run_ticks<O: SwarmObserver>(
        &mut self,
        swarm:    &mut Swarm,
        n:        usize,
        observer: &mut O,
    ) -> SwarmResult<()> {
        for _ in 0..n {
            self.step(swarm, observer)?;
        }
        Ok(())
    }

    /// Refresh until every rescuer has arrived or `max_ticks` iterations
    /// have run, then call `on_episode_end`.
    pub fn run_until_settled<O: SwarmObserver>(
        &mut self,
        swarm:     &mut Swarm,
        max_ticks: usize,
        observer:  &mut O,
    ) -> SwarmResult<EpisodeEnd> {
        let mut ticks = 0;
        let end = loop {
            if ticks >= max_ticks {
                break EpisodeEnd::TickLimit { ticks };
            }
            self.step(swarm, observer)?;
            ticks += 1;
            if swarm.is_settled() {
                break EpisodeEnd::Settled { ticks };
            }
        };

        tracing::info!(
            ticks = end.ticks(),
            settled = matches!(end, EpisodeEnd::Settled { .. }),
            elapsed = swarm.elapsed(),
            "Episode refresh loop finished"
        );
        observer.on_episode_end(swarm);
        Ok(end)
    }

    /// One iteration: tick at `now`, notify, then pause.
    fn step<O: SwarmObserver>(&mut self, swarm: &mut Swarm, observer: &mut O) -> SwarmResult<()> {
        let report = swarm.tick(self.clock.now())?;
        for id in &report.arrivals {
            if let Some(r) = swarm.rescuer(*id) {
                observer.on_arrival(r, report.snapshot.time);
            }
        }
        observer.on_tick(swarm, &report.snapshot);
        self.clock.sleep(self.interval_secs);
        Ok(())
    }
}
