//! Strongly typed identifier wrappers.
//!
//! Rescuer ids are 1-based (`1..=N`) to match what operators see on screen,
//! so unlike a plain index they must go through [`RescuerId::index`] before
//! touching a `Vec`.

use std::fmt;

/// Identifier of a rescuer, unique within one swarm.  Starts at 1.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RescuerId(pub u32);

impl RescuerId {
    /// Id of the rescuer stored at zero-based position `i`, or `None` when
    /// `i + 1` does not fit in a `u32`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Self> {
        i.checked_add(1).and_then(|n| u32::try_from(n).ok()).map(RescuerId)
    }

    /// Zero-based position in the swarm's rescuer `Vec`.
    ///
    /// # Panics
    /// Panics in debug mode for id 0, which is never assigned.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for RescuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rescuer #{}", self.0)
    }
}
