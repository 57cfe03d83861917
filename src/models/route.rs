//! Route type: an ordered visit of every stop.

use serde::{Deserialize, Serialize};

use super::Stop;
use crate::distance::path_length;

/// An ordered sequence of stops.
///
/// A route produced by this crate is always a permutation of the request's
/// stops. It is an open path: there is no implicit edge from the last stop
/// back to the first.
///
/// # Examples
///
/// ```
/// use eco_routing::models::{Route, Stop};
///
/// let stops = vec![
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 1.0).unwrap(),
///     Stop::new(0.0, 2.0).unwrap(),
/// ];
/// let route = Route::from_order(&stops, &[2, 0, 1]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.stops()[0], stops[2]);
/// assert_eq!(route.input_positions(&stops), vec![3, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    stops: Vec<Stop>,
}

impl Route {
    /// Wraps a stop sequence.
    pub fn new(stops: Vec<Stop>) -> Self {
        Self { stops }
    }

    /// Materializes a visiting order given as positions into `stops`.
    ///
    /// # Panics
    ///
    /// Panics if any position is out of bounds.
    pub fn from_order(stops: &[Stop], order: &[usize]) -> Self {
        Self {
            stops: order.iter().map(|&i| stops[i]).collect(),
        }
    }

    /// The stops in visit order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns `true` if the route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Open-path haversine length in kilometres.
    pub fn total_distance(&self) -> f64 {
        path_length(&self.stops)
    }

    /// The same stops visited in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut stops = self.stops.clone();
        stops.reverse();
        Self { stops }
    }

    /// Maps each route entry to the 1-based position of the first stop in
    /// `original` with identical coordinates.
    ///
    /// Entries with no match map to 0.
    pub fn input_positions(&self, original: &[Stop]) -> Vec<usize> {
        self.stops
            .iter()
            .map(|stop| {
                original
                    .iter()
                    .position(|o| o == stop)
                    .map_or(0, |i| i + 1)
            })
            .collect()
    }

    /// Returns `true` if this route holds exactly the multiset `original`.
    pub fn is_permutation_of(&self, original: &[Stop]) -> bool {
        if self.stops.len() != original.len() {
            return false;
        }
        let mut used = vec![false; original.len()];
        self.stops.iter().all(|stop| {
            let slot = original
                .iter()
                .enumerate()
                .position(|(i, o)| !used[i] && o == stop);
            match slot {
                Some(i) => {
                    used[i] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl From<Vec<Stop>> for Route {
    fn from(stops: Vec<Stop>) -> Self {
        Self::new(stops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new(37.7749, -122.4194).expect("valid"),
            Stop::new(37.7849, -122.4094).expect("valid"),
            Stop::new(37.7649, -122.4294).expect("valid"),
            Stop::new(37.7849, -122.4394).expect("valid"),
        ]
    }

    #[test]
    fn test_route_empty() {
        let r = Route::default();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.total_distance(), 0.0);
    }

    #[test]
    fn test_from_order() {
        let s = stops();
        let r = Route::from_order(&s, &[3, 2, 1, 0]);
        assert_eq!(r.stops()[0], s[3]);
        assert_eq!(r.stops()[3], s[0]);
    }

    #[test]
    fn test_reversed_same_distance() {
        let r = Route::new(stops());
        assert!((r.total_distance() - r.reversed().total_distance()).abs() < 1e-9);
    }

    #[test]
    fn test_input_positions_one_based() {
        let s = stops();
        let r = Route::from_order(&s, &[1, 3, 0, 2]);
        assert_eq!(r.input_positions(&s), vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_input_positions_duplicates_map_to_first() {
        let a = Stop::new(1.0, 1.0).expect("valid");
        let b = Stop::new(2.0, 2.0).expect("valid");
        let original = vec![a, b, a];
        let r = Route::new(vec![a, a, b]);
        assert_eq!(r.input_positions(&original), vec![1, 1, 2]);
    }

    #[test]
    fn test_is_permutation_of() {
        let s = stops();
        assert!(Route::from_order(&s, &[2, 0, 3, 1]).is_permutation_of(&s));
        assert!(!Route::from_order(&s, &[2, 0, 0, 1]).is_permutation_of(&s));
        assert!(!Route::from_order(&s, &[2, 0, 1]).is_permutation_of(&s));
    }

    #[test]
    fn test_serializes_as_array() {
        let s = stops();
        let json = serde_json::to_value(Route::from_order(&s, &[0])).expect("serialize");
        assert_eq!(json, serde_json::json!([{"lat": 37.7749, "lon": -122.4194}]));
    }
}
