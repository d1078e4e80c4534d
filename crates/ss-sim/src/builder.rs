//! Fluent builder for constructing a [`Swarm`].

use ss_core::{SimRng, SwarmConfig, SwarmError, SwarmResult, Timestamp};

use crate::{Rescuer, RescuerStatus, Swarm};

/// Fluent builder for [`Swarm`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                        |
/// |-------------------|------------------------------------------------|
/// | `.config(c)`      | `SwarmConfig::default()`                       |
/// | `.seed(s)`        | `config.seed`, else OS entropy                 |
/// | `.rescuers(v)`    | `rescuer_count` randomly placed rescuers       |
///
/// Supplied rescuers are used for the first episode only; a later
/// [`Swarm::reset`] regenerates them from the RNG like any other swarm.
///
/// # Example
///
/// ```rust
/// use ss_core::SwarmConfig;
/// use ss_sim::SwarmBuilder;
///
/// let swarm = SwarmBuilder::new()
///     .config(SwarmConfig { rescuer_count: 3, ..SwarmConfig::default() })
///     .seed(7)
///     .build()
///     .unwrap();
/// assert_eq!(swarm.rescuers().len(), 3);
/// ```
#[derive(Default)]
pub struct SwarmBuilder {
    config:   SwarmConfig,
    seed:     Option<u64>,
    rescuers: Option<Vec<Rescuer>>,
}

impl SwarmBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: SwarmConfig) -> Self {
        self.config = config;
        self
    }

    /// Override `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Supply the initial rescuers explicitly.
    ///
    /// Must be length `rescuer_count`, all `Standby`, with ids `1..=N` in
    /// order.
    pub fn rescuers(mut self, rescuers: Vec<Rescuer>) -> Self {
        self.rescuers = Some(rescuers);
        self
    }

    /// Validate inputs and return a ready, idle [`Swarm`].
    pub fn build(self) -> SwarmResult<Swarm> {
        self.build_at(Timestamp::ZERO)
    }

    /// As [`build`](Self::build), stamping generated rescuers with `now`.
    pub fn build_at(mut self, now: Timestamp) -> SwarmResult<Swarm> {
        if let Some(seed) = self.seed {
            self.config.seed = Some(seed);
        }
        let rng = SimRng::from_seed_opt(self.config.seed);

        let Some(rescuers) = self.rescuers else {
            return Swarm::new(self.config, rng, now);
        };

        self.config.validate()?;
        if rescuers.len() != self.config.rescuer_count {
            return Err(SwarmError::CountMismatch {
                expected: self.config.rescuer_count,
                got:      rescuers.len(),
            });
        }
        for (i, r) in rescuers.iter().enumerate() {
            if r.id.0 == 0 || r.id.index() != i {
                return Err(SwarmError::Config(format!(
                    "rescuer at position {i} has id {}, expected {}",
                    r.id.0,
                    i + 1
                )));
            }
            if r.status != RescuerStatus::Standby {
                return Err(SwarmError::Config(format!("{} is not on standby", r.id)));
            }
        }

        Ok(Swarm::from_parts(self.config, rng, rescuers))
    }
}
