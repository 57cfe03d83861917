//! Convex hull by the two-chain (monotone) construction.
//!
//! # Algorithm
//!
//! Sort distinct points by `(lat, lon)`. Sweep left to right building the
//! lower chain, popping the last point while it does not make a strict left
//! turn; sweep right to left for the upper chain. Concatenate both chains,
//! dropping each chain's last point since it starts the other chain.
//!
//! Collinear boundary points are dropped, so the hull holds only corners.
//! The result is counter-clockwise in `(lat, lon)` space.
//!
//! # Complexity
//!
//! O(n log n).

use std::cmp::Ordering;

use crate::models::Stop;

/// Returns the hull corners of `stops` in counter-clockwise order.
///
/// Inputs with at most one distinct point are returned unchanged.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::geometry::{convex_hull, hull_contains};
///
/// let pts: Vec<Stop> = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0), (0.5, 0.5)]
///     .iter()
///     .map(|&(a, b)| Stop::new(a, b).unwrap())
///     .collect();
/// let hull = convex_hull(&pts);
/// assert_eq!(hull.len(), 4);
/// assert!(hull_contains(&hull, &pts[4]));
/// ```
pub fn convex_hull(stops: &[Stop]) -> Vec<Stop> {
    let positions = hull_positions(stops);
    if positions.len() <= 1 {
        return stops.to_vec();
    }
    positions.into_iter().map(|i| stops[i]).collect()
}

/// Hull corners as positions into `stops`.
///
/// Each corner refers to the first stop with those coordinates, so
/// duplicates of a corner are left for the caller to treat as interior.
/// Returns an empty vector for empty input and a single position when all
/// stops coincide.
pub(crate) fn hull_positions(stops: &[Stop]) -> Vec<usize> {
    let mut points: Vec<usize> = (0..stops.len()).collect();
    // Stable sort keeps the first occurrence of duplicates in front.
    points.sort_by(|&a, &b| compare(&stops[a], &stops[b]));
    points.dedup_by(|b, a| stops[*a] == stops[*b]);

    if points.len() <= 1 {
        return points;
    }

    let mut lower: Vec<usize> = Vec::with_capacity(points.len());
    for &p in &points {
        while lower.len() >= 2
            && cross(
                &stops[lower[lower.len() - 2]],
                &stops[lower[lower.len() - 1]],
                &stops[p],
            ) <= 0.0
        {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<usize> = Vec::with_capacity(points.len());
    for &p in points.iter().rev() {
        while upper.len() >= 2
            && cross(
                &stops[upper[upper.len() - 2]],
                &stops[upper[upper.len() - 1]],
                &stops[p],
            ) <= 0.0
        {
            upper.pop();
        }
        upper.push(p);
    }

    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Returns `true` if `point` lies inside or on the boundary of `hull`.
///
/// `hull` must be counter-clockwise, as produced by [`convex_hull`]. A
/// single-point hull contains only that point; a two-point hull contains
/// the segment between them.
pub fn hull_contains(hull: &[Stop], point: &Stop) -> bool {
    const EPS: f64 = 1e-9;
    match hull.len() {
        0 => false,
        1 => hull[0] == *point,
        2 => {
            let (a, b) = (&hull[0], &hull[1]);
            cross(a, b, point).abs() <= EPS
                && point.lat() >= a.lat().min(b.lat()) - EPS
                && point.lat() <= a.lat().max(b.lat()) + EPS
                && point.lon() >= a.lon().min(b.lon()) - EPS
                && point.lon() <= a.lon().max(b.lon()) + EPS
        }
        n => (0..n).all(|i| cross(&hull[i], &hull[(i + 1) % n], point) >= -EPS),
    }
}

/// Z component of `(a - o) × (b - o)` with lat as x and lon as y.
fn cross(o: &Stop, a: &Stop, b: &Stop) -> f64 {
    (a.lat() - o.lat()) * (b.lon() - o.lon()) - (a.lon() - o.lon()) * (b.lat() - o.lat())
}

fn compare(a: &Stop, b: &Stop) -> Ordering {
    a.lat()
        .total_cmp(&b.lat())
        .then_with(|| a.lon().total_cmp(&b.lon()))
}
