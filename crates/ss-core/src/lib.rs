//! `ss-core`: foundational types for the `safeswarm` rescue simulation.
//!
//! This crate is a dependency of every other `ss-*` crate.  It intentionally
//! has no `ss-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RescuerId`                                           |
//! | [`geo`]         | `GeoPoint`, `Point2`, haversine distance              |
//! | [`bearing`]     | `Bearing`, four-way compass classification            |
//! | [`time`]        | `Timestamp`, `Clock`, `SystemClock`, `ManualClock`    |
//! | [`rng`]         | `SimRng` (seedable world-generation RNG)              |
//! | [`config`]      | `SwarmConfig`, `EtaModel`                             |
//! | [`error`]       | `SwarmError`, `SwarmResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                                          |
//! |---------|-------------------------------------------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types; required to load `SwarmConfig` from a file. |

pub mod bearing;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use bearing::Bearing;
pub use config::{EtaModel, SwarmConfig};
pub use error::{SwarmError, SwarmResult};
pub use geo::{GeoPoint, Point2};
pub use ids::RescuerId;
pub use rng::SimRng;
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
