//! Pluggable distance sources for measuring a finished route.

use super::haversine;
use crate::models::Stop;

/// Supplies the distance between two stops in kilometres.
///
/// Construction heuristics always use straight-line distance; a provider
/// lets the caller measure candidate routes with something closer to road
/// distance.
pub trait DistanceProvider {
    /// Distance from `from` to `to` in kilometres.
    fn distance_km(&self, from: &Stop, to: &Stop) -> f64;

    /// Open-path length of `stops` under this provider.
    fn path_km(&self, stops: &[Stop]) -> f64 {
        stops
            .windows(2)
            .map(|w| self.distance_km(&w[0], &w[1]))
            .sum()
    }
}

/// Straight-line great-circle distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Haversine;

impl DistanceProvider for Haversine {
    fn distance_km(&self, from: &Stop, to: &Stop) -> f64 {
        haversine(from, to)
    }
}

/// Great-circle distance inflated by a constant detour factor.
///
/// A cheap stand-in for road distance when no road router is available.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::{haversine, DetourEstimate, DistanceProvider};
///
/// let a = Stop::new(0.0, 0.0).unwrap();
/// let b = Stop::new(0.0, 0.1).unwrap();
/// let road = DetourEstimate::default();
/// assert!((road.distance_km(&a, &b) - 1.3 * haversine(&a, &b)).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetourEstimate {
    factor: f64,
}

impl DetourEstimate {
    /// Default detour factor applied to straight-line distance.
    pub const DEFAULT_FACTOR: f64 = 1.3;

    /// Creates an estimate with the given factor.
    ///
    /// Returns `None` unless the factor is finite and at least 1.
    pub fn new(factor: f64) -> Option<Self> {
        if !factor.is_finite() || factor < 1.0 {
            return None;
        }
        Some(Self { factor })
    }

    /// The multiplier applied to straight-line distance.
    pub fn factor(&self) -> f64 {
        self.factor
    }
}

impl Default for DetourEstimate {
    fn default() -> Self {
        Self {
            factor: Self::DEFAULT_FACTOR,
        }
    }
}

impl DistanceProvider for DetourEstimate {
    fn distance_km(&self, from: &Stop, to: &Stop) -> f64 {
        haversine(from, to) * self.factor
    }
}
