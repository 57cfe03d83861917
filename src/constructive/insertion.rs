//! Farthest- and nearest-insertion heuristics.
//!
//! # Algorithm
//!
//! Both grow a tour one stop at a time. At each step they pick an unvisited
//! stop by its distance to the tour (the distance to the closest tour
//! member) and place it where it adds the least length, treating the tour
//! as a cycle:
//!
//! ```text
//! increase(k) = d(t[k], p) + d(p, t[k+1 mod m]) - d(t[k], t[k+1 mod m])
//! ```
//!
//! The stop is inserted after `t[k]` for the smallest `k` achieving the
//! minimum increase.
//!
//! - Farthest insertion seeds with the most distant pair and picks the stop
//!   farthest from the tour, sketching the outline first.
//! - Nearest insertion seeds with the first stop and picks the stop closest
//!   to the tour.
//!
//! Selection ties go to the stop that comes first in input order.
//!
//! # Complexity
//!
//! O(n³) for n stops.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM J. Comput.*
//! 6(3), 563-581.

use crate::distance::DistanceMatrix;

/// Builds a visiting order with farthest insertion.
///
/// Two or fewer stops yield the identity order.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::constructive::farthest_insertion;
///
/// let stops = vec![
///     Stop::new(0.0, 1.0).unwrap(),
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 3.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// // Seeded with the farthest pair (1, 2); stop 0 slots in between.
/// assert_eq!(farthest_insertion(&dm), vec![1, 0, 2]);
/// ```
pub fn farthest_insertion(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n <= 2 {
        return (0..n).collect();
    }

    let (a, b) = farthest_pair(distances);
    let remaining: Vec<usize> = (0..n).filter(|&i| i != a && i != b).collect();
    grow_tour(vec![a, b], remaining, distances, Pick::Farthest)
}

/// Builds a visiting order with nearest insertion.
///
/// Two or fewer stops yield the identity order.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::constructive::nearest_insertion;
///
/// let stops = vec![
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 3.0).unwrap(),
///     Stop::new(0.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// let order = nearest_insertion(&dm);
/// assert_eq!(order.len(), 3);
/// assert_eq!(order[0], 0);
/// ```
pub fn nearest_insertion(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n <= 2 {
        return (0..n).collect();
    }

    grow_tour(vec![0], (1..n).collect(), distances, Pick::Nearest)
}

/// Index in `tour` at which to insert `stop` for the least added length,
/// treating `tour` as closed.
///
/// An empty tour yields 0; a single-stop tour yields 1.
pub(crate) fn cheapest_position(tour: &[usize], stop: usize, distances: &DistanceMatrix) -> usize {
    let m = tour.len();
    let mut best_pos = m;
    let mut best_increase = f64::INFINITY;
    for k in 0..m {
        let prev = tour[k];
        let next = tour[(k + 1) % m];
        let increase =
            distances.get(prev, stop) + distances.get(stop, next) - distances.get(prev, next);
        if increase < best_increase {
            best_increase = increase;
            best_pos = k + 1;
        }
    }
    best_pos
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pick {
    Farthest,
    Nearest,
}

fn grow_tour(
    mut tour: Vec<usize>,
    mut remaining: Vec<usize>,
    distances: &DistanceMatrix,
    pick: Pick,
) -> Vec<usize> {
    while !remaining.is_empty() {
        let mut chosen: Option<(usize, f64)> = None;
        for (slot, &candidate) in remaining.iter().enumerate() {
            let d = distances.min_distance_to(candidate, &tour);
            let better = match (chosen, pick) {
                (None, _) => true,
                (Some((_, best)), Pick::Farthest) => d > best,
                (Some((_, best)), Pick::Nearest) => d < best,
            };
            if better {
                chosen = Some((slot, d));
            }
        }
        let Some((slot, _)) = chosen else {
            break;
        };
        let stop = remaining.remove(slot);
        let pos = cheapest_position(&tour, stop, distances);
        tour.insert(pos, stop);
    }
    tour
}

/// First pair `(i, j)`, `i < j`, with the largest distance.
fn farthest_pair(distances: &DistanceMatrix) -> (usize, usize) {
    let n = distances.size();
    let mut pair = (0, 1);
    let mut max = f64::NEG_INFINITY;
    for i in 0..n {
        for j in (i + 1)..n {
            let d = distances.get(i, j);
            if d > max {
                max = d;
                pair = (i, j);
            }
        }
    }
    pair
}
