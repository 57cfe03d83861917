//! Geometric features of a route.

use serde::{Deserialize, Serialize};

use super::rules::{classify, RoadType};
use crate::distance::haversine;
use crate::models::Stop;

/// Per-axis coordinate change, in degrees, above which consecutive legs
/// count as a turn.
pub const TURN_THRESHOLD_DEG: f64 = 0.01;

/// Derived, read-only features of one route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteMetrics {
    /// Route length in kilometres, as supplied by the caller.
    pub total_distance: f64,
    /// Mean haversine leg length in kilometres.
    pub avg_segment_length: f64,
    /// Longest haversine leg in kilometres.
    pub max_segment_length: f64,
    /// `(lat range + lon range) / stop count`, in degrees per stop.
    pub coordinate_spread: f64,
    /// Direction changes per kilometre of `total_distance`.
    pub turns_per_km: f64,
    /// Number of direction changes.
    pub turn_count: usize,
    /// Number of legs.
    pub segment_count: usize,
    /// Road-type label.
    pub classification: RoadType,
}

impl RouteMetrics {
    /// Metrics for a route with fewer than two stops.
    pub fn trivial(total_distance: f64) -> Self {
        Self {
            total_distance,
            avg_segment_length: 0.0,
            max_segment_length: 0.0,
            coordinate_spread: 0.0,
            turns_per_km: 0.0,
            turn_count: 0,
            segment_count: 0,
            classification: RoadType::Unknown,
        }
    }

    /// Extracts features from `stops` and labels the route.
    ///
    /// `total_distance` is the route length the caller measured, which may
    /// be road-aware; legs are always measured with haversine.
    ///
    /// # Examples
    ///
    /// ```
    /// use eco_routing::models::Stop;
    /// use eco_routing::classify::{RoadType, RouteMetrics};
    ///
    /// let stops = vec![Stop::new(0.0, 0.0).unwrap()];
    /// let m = RouteMetrics::analyze(&stops, 0.0);
    /// assert_eq!(m.classification, RoadType::Unknown);
    /// ```
    pub fn analyze(stops: &[Stop], total_distance: f64) -> Self {
        if stops.len() < 2 {
            return Self::trivial(total_distance);
        }

        let segments: Vec<f64> = stops.windows(2).map(|w| haversine(&w[0], &w[1])).collect();
        let segment_count = segments.len();
        let avg_segment_length = segments.iter().sum::<f64>() / segment_count as f64;
        let max_segment_length = segments.iter().copied().fold(0.0, f64::max);
        let turn_count = count_turns(stops);
        let coordinate_spread = coordinate_spread(stops);
        let turns_per_km = if total_distance > 0.0 {
            turn_count as f64 / total_distance
        } else {
            0.0
        };

        let classification = classify(
            avg_segment_length,
            max_segment_length,
            coordinate_spread,
            turns_per_km,
            total_distance,
        );

        Self {
            total_distance,
            avg_segment_length,
            max_segment_length,
            coordinate_spread,
            turns_per_km,
            turn_count,
            segment_count,
            classification,
        }
    }
}

/// Counts legs whose coordinate deltas differ from the previous leg's by
/// more than [`TURN_THRESHOLD_DEG`] on either axis.
fn count_turns(stops: &[Stop]) -> usize {
    stops
        .windows(3)
        .filter(|w| {
            let prev_lat = w[1].lat() - w[0].lat();
            let prev_lon = w[1].lon() - w[0].lon();
            let next_lat = w[2].lat() - w[1].lat();
            let next_lon = w[2].lon() - w[1].lon();
            (prev_lat - next_lat).abs() > TURN_THRESHOLD_DEG
                || (prev_lon - next_lon).abs() > TURN_THRESHOLD_DEG
        })
        .count()
}

fn coordinate_spread(stops: &[Stop]) -> f64 {
    let (mut lat_min, mut lat_max) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut lon_min, mut lon_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for s in stops {
        lat_min = lat_min.min(s.lat());
        lat_max = lat_max.max(s.lat());
        lon_min = lon_min.min(s.lon());
        lon_max = lon_max.max(s.lon());
    }
    ((lat_max - lat_min) + (lon_max - lon_min)) / stops.len() as f64
}
