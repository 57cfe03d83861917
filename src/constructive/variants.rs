//! Cheap ordering variants used to widen the candidate pool.
//!
//! None of these aim at a short tour. They produce deliberately different
//! shapes so that the emissions scorer has real alternatives to weigh.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::haversine;
use crate::models::Stop;

/// Visits stops from the outside in: decreasing distance from the centroid.
///
/// Equidistant stops keep their input order.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::constructive::perimeter_first;
///
/// let stops = vec![
///     Stop::new(0.0, 0.1).unwrap(),
///     Stop::new(0.0, 2.0).unwrap(),
///     Stop::new(0.0, -1.0).unwrap(),
/// ];
/// assert_eq!(perimeter_first(&stops), vec![1, 2, 0]);
/// ```
pub fn perimeter_first(stops: &[Stop]) -> Vec<usize> {
    let n = stops.len();
    if n == 0 {
        return Vec::new();
    }
    let count = n as f64;
    let lat = stops.iter().map(Stop::lat).sum::<f64>() / count;
    let lon = stops.iter().map(Stop::lon).sum::<f64>() / count;
    let Some(center) = Stop::new(lat, lon) else {
        return (0..n).collect();
    };

    let radius: Vec<f64> = stops.iter().map(|s| haversine(&center, s)).collect();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| radius[b].total_cmp(&radius[a]));
    order
}

/// Alternates stops north and south of the middle latitude.
///
/// Stops are ranked by latitude; even ranks are appended and odd ranks
/// prepended, so the route swings back and forth across the stop set.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::constructive::latitude_zigzag;
///
/// let stops: Vec<Stop> = [3.0, 0.0, 2.0, 1.0]
///     .iter()
///     .map(|&lat| Stop::new(lat, 0.0).unwrap())
///     .collect();
/// // Ranked: 1 (0.0), 3 (1.0), 2 (2.0), 0 (3.0).
/// assert_eq!(latitude_zigzag(&stops), vec![0, 3, 1, 2]);
/// ```
pub fn latitude_zigzag(stops: &[Stop]) -> Vec<usize> {
    let mut ranked: Vec<usize> = (0..stops.len()).collect();
    ranked.sort_by(|&a, &b| stops[a].lat().total_cmp(&stops[b].lat()));

    let mut order = std::collections::VecDeque::with_capacity(ranked.len());
    for (rank, &i) in ranked.iter().enumerate() {
        if rank % 2 == 0 {
            order.push_back(i);
        } else {
            order.push_front(i);
        }
    }
    order.into()
}

/// Input order reversed.
pub fn reversed(n: usize) -> Vec<usize> {
    (0..n).rev().collect()
}

/// A uniformly shuffled order drawn from the caller's generator.
///
/// Seed the generator to make candidate generation reproducible.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use eco_routing::constructive::shuffled;
///
/// let a = shuffled(6, &mut StdRng::seed_from_u64(7));
/// let b = shuffled(6, &mut StdRng::seed_from_u64(7));
/// assert_eq!(a, b);
/// ```
pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}
