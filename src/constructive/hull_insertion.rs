//! Convex-hull insertion heuristic.
//!
//! Starts from the hull boundary, which any good tour visits in hull order,
//! then inserts each interior stop in input order at its cheapest position.
//!
//! # Complexity
//!
//! O(n log n) for the hull plus O(n²) for the insertions.

use super::insertion::cheapest_position;
use crate::distance::DistanceMatrix;
use crate::geometry::hull_positions;
use crate::models::Stop;

/// Builds a visiting order by hull insertion.
///
/// Three or fewer stops yield the identity order. Duplicate coordinates of a
/// hull corner are inserted like interior stops, so the result always
/// covers every stop exactly once.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::constructive::hull_insertion;
///
/// let stops: Vec<Stop> = [(0.5, 0.5), (0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]
///     .iter()
///     .map(|&(a, b)| Stop::new(a, b).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_stops(&stops);
/// let order = hull_insertion(&stops, &dm);
/// assert_eq!(order.len(), 5);
/// // Tour starts on the hull, at its lowest corner.
/// assert_eq!(order[0], 1);
/// ```
pub fn hull_insertion(stops: &[Stop], distances: &DistanceMatrix) -> Vec<usize> {
    let n = stops.len();
    if n <= 3 {
        return (0..n).collect();
    }

    let mut tour = hull_positions(stops);
    let mut on_tour = vec![false; n];
    for &i in &tour {
        on_tour[i] = true;
    }

    for stop in 0..n {
        if on_tour[stop] {
            continue;
        }
        let pos = cheapest_position(&tour, stop, distances);
        tour.insert(pos, stop);
    }

    tour
}
