//! 2-opt improvement for an open path.
//!
//! # Algorithm
//!
//! Scan index pairs `(i, j)` with `1 <= i`, `i + 2 <= j <= n` and evaluate
//! the path obtained by reversing the slice `[i, j)`. The first stop never
//! moves and there is no closing edge, so the move only rewires the edges
//! entering `i` and leaving `j - 1`.
//!
//! A reversal is adopted as soon as it strictly shortens the path, and the
//! scan continues over the updated path. A full pass without an adopted move
//! ends the search at a 2-opt local optimum.
//!
//! # Complexity
//!
//! O(n³) per pass; the number of passes is bounded by the number of
//! improving moves.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Route;

/// Applies 2-opt to a visiting order and returns it with its path length.
///
/// The result is never longer than the input.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::local_search::two_opt_improve;
///
/// let stops: Vec<Stop> = [0.0, 1.0, 2.0, 3.0]
///     .iter()
///     .map(|&lon| Stop::new(0.0, lon).unwrap())
///     .collect();
/// let dm = DistanceMatrix::from_stops(&stops);
///
/// let (improved, dist) = two_opt_improve(&[0, 2, 1, 3], &dm);
/// assert_eq!(improved, vec![0, 1, 2, 3]);
/// assert!(dist < dm.path_length(&[0, 2, 1, 3]));
/// ```
pub fn two_opt_improve(order: &[usize], distances: &DistanceMatrix) -> (Vec<usize>, f64) {
    let mut current = order.to_vec();
    let mut best = distances.path_length(&current);
    let n = current.len();
    if n < 3 {
        return (current, best);
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..n - 1 {
            for j in (i + 2)..=n {
                current[i..j].reverse();
                let candidate = distances.path_length(&current);
                if candidate < best {
                    best = candidate;
                    improved = true;
                } else {
                    current[i..j].reverse();
                }
            }
        }
    }

    (current, best)
}

/// Applies 2-opt to a materialized route.
///
/// Builds a haversine matrix over the route's own stops.
pub fn improve_route(route: &Route) -> Route {
    let dm = DistanceMatrix::from_stops(route.stops());
    let identity: Vec<usize> = (0..route.len()).collect();
    let (order, _) = two_opt_improve(&identity, &dm);
    Route::from_order(route.stops(), &order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    fn stops(coords: &[(f64, f64)]) -> Vec<Stop> {
        coords
            .iter()
            .map(|&(a, b)| Stop::new(a, b).expect("valid"))
            .collect()
    }

    #[test]
    fn test_2opt_already_optimal() {
        let s = stops(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        let dm = DistanceMatrix::from_stops(&s);
        let (order, dist) = two_opt_improve(&[0, 1, 2, 3], &dm);
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert!((dist - dm.path_length(&[0, 1, 2, 3])).abs() < 1e-12);
    }

    #[test]
    fn test_2opt_reverses_tail() {
        // Reversing through the last stop needs j == n.
        let s = stops(&[(0.0, 0.0), (0.0, 3.0), (0.0, 2.0), (0.0, 1.0)]);
        let dm = DistanceMatrix::from_stops(&s);
        let (order, _) = two_opt_improve(&[0, 1, 2, 3], &dm);
        assert_eq!(order, vec![0, 3, 2, 1]);
    }

    #[test]
    fn test_2opt_keeps_first_stop() {
        let s = stops(&[(0.0, 2.0), (0.0, 0.0), (0.0, 1.0), (0.0, 3.0)]);
        let dm = DistanceMatrix::from_stops(&s);
        let (order, _) = two_opt_improve(&[0, 1, 2, 3], &dm);
        assert_eq!(order[0], 0);
    }

    #[test]
    fn test_2opt_small_routes() {
        let s = stops(&[(0.0, 0.0), (1.0, 1.0)]);
        let dm = DistanceMatrix::from_stops(&s);
        assert_eq!(two_opt_improve(&[], &dm), (vec![], 0.0));
        assert_eq!(two_opt_improve(&[1], &dm), (vec![1], 0.0));
        let (order, _) = two_opt_improve(&[1, 0], &dm);
        assert_eq!(order, vec![1, 0]);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let s = stops(&[
            (5.0, 5.0),
            (0.0, 0.0),
            (10.0, 0.0),
            (0.0, 10.0),
            (10.0, 10.0),
        ]);
        let dm = DistanceMatrix::from_stops(&s);
        let initial = vec![0, 4, 1, 2, 3];
        let before = dm.path_length(&initial);
        let (order, after) = two_opt_improve(&initial, &dm);
        assert!(after <= before);
        assert!((after - dm.path_length(&order)).abs() < 1e-9);
    }

    #[test]
    fn test_improve_route_is_permutation() {
        let s = stops(&[(0.0, 0.0), (0.0, 2.0), (0.0, 1.0), (0.0, 3.0)]);
        let route = Route::new(s.clone());
        let improved = improve_route(&route);
        assert!(improved.is_permutation_of(&s));
        assert!(improved.total_distance() <= route.total_distance());
        assert_eq!(improved.stops()[0], s[0]);
    }
}
