//! Landmark bypass constructor.
//!
//! Some trips have a known fast corridor between two landmarks (say, a ring
//! road between two suburbs). The bypass route visits the stop at the start
//! landmark first, the stop at the end landmark second, then everything else
//! in input order.

use serde::{Deserialize, Serialize};

use crate::models::Stop;

/// A named reference point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl Landmark {
    /// Creates a landmark.
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Returns `true` if `stop` is within `tolerance` degrees on both axes.
    pub fn matches(&self, stop: &Stop, tolerance: f64) -> bool {
        Stop::new(self.lat, self.lon).is_some_and(|centre| centre.within_degrees(stop, tolerance))
    }
}

/// A start/end landmark pair with a matching tolerance.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::constructive::{BypassCorridor, Landmark};
///
/// let corridor = BypassCorridor::new(
///     Landmark::new("south", 12.8456, 77.6603),
///     Landmark::new("north", 13.0358, 77.5970),
/// );
/// let stops = vec![
///     Stop::new(12.97, 77.59).unwrap(),
///     Stop::new(13.0360, 77.5971).unwrap(),
///     Stop::new(12.8450, 77.6600).unwrap(),
/// ];
/// assert_eq!(corridor.order(&stops), vec![2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BypassCorridor {
    /// Landmark visited first.
    pub start: Landmark,
    /// Landmark visited second.
    pub end: Landmark,
    /// Match tolerance in degrees on each axis.
    #[serde(default = "BypassCorridor::default_tolerance")]
    pub tolerance: f64,
}

impl BypassCorridor {
    /// Default match tolerance in degrees.
    pub const DEFAULT_TOLERANCE: f64 = 0.01;

    /// Creates a corridor with the default tolerance.
    pub fn new(start: Landmark, end: Landmark) -> Self {
        Self {
            start,
            end,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Sets the match tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    fn default_tolerance() -> f64 {
        Self::DEFAULT_TOLERANCE
    }

    /// Builds the bypass visiting order.
    ///
    /// The first stop matching the start landmark leads, the first other
    /// stop matching the end landmark follows, and the remaining stops keep
    /// their input order. If either landmark has no matching stop, the input
    /// order is returned.
    pub fn order(&self, stops: &[Stop]) -> Vec<usize> {
        let mut start = None;
        let mut end = None;
        let mut rest = Vec::with_capacity(stops.len());

        for (i, stop) in stops.iter().enumerate() {
            if start.is_none() && self.start.matches(stop, self.tolerance) {
                start = Some(i);
            } else if end.is_none() && self.end.matches(stop, self.tolerance) {
                end = Some(i);
            } else {
                rest.push(i);
            }
        }

        match (start, end) {
            (Some(s), Some(e)) => {
                let mut order = Vec::with_capacity(stops.len());
                order.push(s);
                order.push(e);
                order.extend(rest);
                order
            }
            _ => (0..stops.len()).collect(),
        }
    }
}
