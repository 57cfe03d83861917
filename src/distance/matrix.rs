//! Dense distance matrix over a stop set.

use super::haversine;
use crate::models::Stop;

/// A dense n×n haversine distance matrix stored in row-major order.
///
/// Indices are positions in the stop slice the matrix was built from. The
/// matrix is exactly symmetric: each pair is computed once and mirrored.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::{haversine, DistanceMatrix};
///
/// let stops = vec![
///     Stop::new(0.0, 0.0).unwrap(),
///     Stop::new(0.0, 1.0).unwrap(),
///     Stop::new(1.0, 1.0).unwrap(),
/// ];
/// let dm = DistanceMatrix::from_stops(&stops);
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 1), haversine(&stops[0], &stops[1]));
/// assert_eq!(dm.get(1, 0), dm.get(0, 1));
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the haversine matrix for `stops`.
    pub fn from_stops(stops: &[Stop]) -> Self {
        let n = stops.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine(&stops[i], &stops[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance between positions `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance between positions `from` and `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of stops in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Open-path length of a visiting order given as stop positions.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }

    /// Smallest distance from `from` to any position in `targets`.
    ///
    /// Returns `f64::INFINITY` if `targets` is empty.
    pub fn min_distance_to(&self, from: usize, targets: &[usize]) -> f64 {
        targets
            .iter()
            .map(|&t| self.get(from, t))
            .fold(f64::INFINITY, f64::min)
    }
}
