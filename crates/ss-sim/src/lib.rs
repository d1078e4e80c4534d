//! `ss-sim`: rescuer model and panic-episode state machine for safeswarm.
//!
//! # Episode lifecycle
//!
//! ```text
//! Swarm::new       : N standby rescuers scattered around the victim
//! Swarm::activate  : every rescuer → Responding; log = [initial snapshot]
//! loop:
//!   Swarm::tick(now)  ① each responding rescuer moves (now - last_update)/eta
//!                        of the way to the victim, ETA decreases
//!                     ② ETA <= threshold → Arrived (ETA clamped to 0)
//!                     ③ one ResponseSnapshot appended to the log
//!   pause refresh_interval_secs
//! Swarm::reset     : log cleared, N new standby rescuers
//! ```
//!
//! The state advance ([`Swarm::tick`]) is a plain synchronous method taking
//! `now`.  Scheduling lives in [`PollLoop`], which owns a
//! [`Clock`][ss_core::Clock] and notifies a [`SwarmObserver`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ss_core::{ManualClock, SwarmConfig, Timestamp};
//! use ss_sim::{NoopObserver, PollLoop, SwarmBuilder};
//!
//! let mut swarm = SwarmBuilder::new().seed(42).build()?;
//! let mut poll = PollLoop::new(ManualClock::new(Timestamp::ZERO), 0.5);
//! poll.activate(&mut swarm, &mut NoopObserver)?;
//! poll.run_until_settled(&mut swarm, 100, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod observer;
pub mod poll;
pub mod rescuer;
pub mod snapshot;
pub mod swarm;


pub use builder::SwarmBuilder;
pub use observer::{NoopObserver, SwarmObserver};
pub use poll::{EpisodeEnd, PollLoop};
pub use rescuer::{Rescuer, RescuerStatus};
pub use snapshot::{ResponseSnapshot, SwarmSummary};
pub use swarm::{Swarm, TickReport};
