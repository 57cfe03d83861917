//! Nearest-neighbor constructive heuristic.
//!
//! Starts at the first stop in input order and repeatedly moves to the
//! closest unvisited stop. Ties go to the stop that comes first in input
//! order.
//!
//! # Complexity
//!
//! O(n²) where n = number of stops.

use crate::distance::DistanceMatrix;

/// Builds a visiting order with the nearest-neighbor heuristic.
///
/// Returns positions into the stop set the matrix was built from. Zero or
/// one stop yields the identity order.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::DistanceMatrix;
/// use eco_routing::constructive::nearest_neighbor;
///
/// let stops = vec![
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 3.0).unwrap(),
///     Stop::new(0.0, 1.0).unwrap(),
///     Stop::new(0.0, 2.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(nearest_neighbor(&dm), vec![0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix) -> Vec<usize> {
    let n = distances.size();
    if n <= 1 {
        return (0..n).collect();
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = 0;
    visited[0] = true;
    order.push(0);

    while order.len() < n {
        let mut best: Option<(usize, f64)> = None;
        for (i, &seen) in visited.iter().enumerate() {
            if seen {
                continue;
            }
            let d = distances.get(current, i);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }
        let Some((next, _)) = best else {
            break;
        };
        visited[next] = true;
        order.push(next);
        current = next;
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stop;

    fn matrix(coords: &[(f64, f64)]) -> DistanceMatrix {
        let stops: Vec<Stop> = coords
            .iter()
            .map(|&(a, b)| Stop::new(a, b).expect("valid"))
            .collect();
        DistanceMatrix::from_stops(&stops)
    }

    #[test]
    fn test_nn_line() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 1.0), (0.0, 2.0), (0.0, 3.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_nn_chooses_nearest() {
        let dm = matrix(&[(0.0, 0.0), (0.0, 10.0), (0.0, 1.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 2, 1]);
    }

    #[test]
    fn test_nn_tie_goes_to_first() {
        // Stops 1 and 2 are equidistant from stop 0.
        let dm = matrix(&[(0.0, 0.0), (0.0, 1.0), (0.0, -1.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_small_inputs() {
        assert!(nearest_neighbor(&matrix(&[])).is_empty());
        assert_eq!(nearest_neighbor(&matrix(&[(1.0, 1.0)])), vec![0]);
        assert_eq!(nearest_neighbor(&matrix(&[(1.0, 1.0), (2.0, 2.0)])), vec![0, 1]);
    }

    #[test]
    fn test_nn_handles_duplicates() {
        let dm = matrix(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(nearest_neighbor(&dm), vec![0, 1, 2]);
    }
}
