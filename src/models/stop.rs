//! Geographic stop type.

use serde::{Deserialize, Serialize};

/// A stop to visit, given in decimal degrees.
///
/// Stops are plain values. Two stops are the same stop when both coordinates
/// compare exactly equal; that is how a route entry is mapped back to its
/// position in the request.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
///
/// let s = Stop::new(37.7749, -122.4194).unwrap();
/// assert_eq!(s.lat(), 37.7749);
/// assert!(Stop::new(f64::NAN, 0.0).is_none());
/// assert!(Stop::new(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    lat: f64,
    lon: f64,
}

impl Stop {
    /// Creates a stop.
    ///
    /// Returns `None` if either coordinate is non-finite or outside the
    /// `[-90, 90]` / `[-180, 180]` range.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if !valid_latitude(lat) || !valid_longitude(lon) {
            return None;
        }
        Some(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Returns `true` if `other` lies within `tolerance` degrees on both axes.
    pub fn within_degrees(&self, other: &Stop, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lon - other.lon).abs() < tolerance
    }
}

pub(crate) fn valid_latitude(lat: f64) -> bool {
    lat.is_finite() && (-90.0..=90.0).contains(&lat)
}

pub(crate) fn valid_longitude(lon: f64) -> bool {
    lon.is_finite() && (-180.0..=180.0).contains(&lon)
}
