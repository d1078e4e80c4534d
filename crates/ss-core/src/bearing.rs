//! Four-way compass classification of a screen-space vector.

use std::fmt;

use crate::Point2;

/// Upper bound of the East sector, radians (≈ π/4).
const EAST_LIMIT: f64 = 0.78;

/// Upper bound of the South sector, radians (≈ 3π/4).
const SOUTH_LIMIT: f64 = 2.36;

/// Direction from one point to another, in screen space.
///
/// Screen space has `y` growing downward, so a positive `dy` is South.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bearing {
    North,
    East,
    South,
    West,
}

impl Bearing {
    /// Classify the vector `to - from`.
    ///
    /// Sectors are half-open `(lower, upper]` on `atan2(dy, dx)` and are
    /// checked in the order East, South, North; everything else is West.
    /// The thresholds are the rounded constants `0.78` and `2.36`, not exact
    /// multiples of π, so a vector at exactly 45° (≈ 0.785 rad) is South.
    ///
    /// A zero vector has angle 0 and classifies as East.
    pub fn between(from: Point2, to: Point2) -> Self {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        Self::from_angle(dy.atan2(dx))
    }

    /// Classify an angle in radians, as returned by `atan2`.
    pub fn from_angle(angle: f64) -> Self {
        if -EAST_LIMIT < angle && angle <= EAST_LIMIT {
            Bearing::East
        } else if EAST_LIMIT < angle && angle <= SOUTH_LIMIT {
            Bearing::South
        } else if -SOUTH_LIMIT < angle && angle <= -EAST_LIMIT {
            Bearing::North
        } else {
            Bearing::West
        }
    }

    /// Arrow glyph shown next to a rescuer.
    pub fn arrow(self) -> &'static str {
        match self {
            Bearing::North => "⬆️",
            Bearing::East  => "➡️",
            Bearing::South => "⬇️",
            Bearing::West  => "⬅️",
        }
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Bearing::North => "north",
            Bearing::East  => "east",
            Bearing::South => "south",
            Bearing::West  => "west",
        };
        f.write_str(s)
    }
}
