//! Geodesic distances.
//!
//! - [`haversine`] — great-circle distance between two stops
//! - [`DistanceMatrix`] — dense pairwise haversine matrix used by the heuristics
//! - [`DistanceProvider`] — pluggable measure for finished routes

mod haversine;
mod matrix;
mod provider;

pub use haversine::{haversine, path_length, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
pub use provider::{DetourEstimate, DistanceProvider, Haversine};
