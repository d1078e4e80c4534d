//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Rescuers start within a few
//! hundredths of a degree of the victim and creep toward it in small
//! interpolation steps, so single precision would visibly quantise the
//! last few metres of every approach.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// This point shifted by `d_lat` / `d_lon` degrees.
    #[inline]
    pub fn offset(self, d_lat: f64, d_lon: f64) -> Self {
        Self::new(self.lat + d_lat, self.lon + d_lon)
    }

    /// Move `progress` of the way from `self` to `target`.
    ///
    /// `progress = 0.0` returns `self`, `1.0` returns `target`.  Values
    /// outside `[0, 1]` extrapolate; callers clamp first.
    #[inline]
    pub fn lerp_toward(self, target: GeoPoint, progress: f64) -> Self {
        Self::new(
            self.lat + (target.lat - self.lat) * progress,
            self.lon + (target.lon - self.lon) * progress,
        )
    }

    /// Straight-line distance in degree space.
    ///
    /// Not a physical distance; used to check that interpolation moves a
    /// rescuer monotonically closer to its target.
    #[inline]
    pub fn planar_distance(self, other: GeoPoint) -> f64 {
        (other.lat - self.lat).hypot(other.lon - self.lon)
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371.0; // mean Earth radius, km

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Project into the screen-space plane used by [`Bearing`][crate::Bearing].
    ///
    /// Components keep their storage order: `x = lat`, `y = lon`.
    #[inline]
    pub fn as_point2(self) -> Point2 {
        Point2::new(self.lat, self.lon)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// A point in screen space: `x` grows to the right, `y` grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}
