//! Great-circle distance on a spherical Earth.

use crate::models::Stop;

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two stops in kilometres.
///
/// Symmetric, non-negative, and exactly zero for identical stops.
///
/// # Examples
///
/// ```
/// use eco_routing::models::Stop;
/// use eco_routing::distance::haversine;
///
/// let a = Stop::new(0.0, 0.0).unwrap();
/// let b = Stop::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator.
/// assert!((haversine(&a, &b) - 111.195).abs() < 1e-3);
/// assert_eq!(haversine(&a, &a), 0.0);
/// ```
pub fn haversine(a: &Stop, b: &Stop) -> f64 {
    let lat1 = a.lat().to_radians();
    let lat2 = b.lat().to_radians();
    let dlat = (b.lat() - a.lat()).to_radians();
    let dlon = (b.lon() - a.lon()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points.
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    EARTH_RADIUS_KM * c
}

/// Open-path length of a stop sequence: the sum of consecutive haversine
/// distances, without a closing edge back to the start.
pub fn path_length(stops: &[Stop]) -> f64 {
    stops.windows(2).map(|w| haversine(&w[0], &w[1])).sum()
}
