//! Planar geometry over stop coordinates.
//!
//! Latitude and longitude are treated as Cartesian `(x, y)`; at city scale
//! the distortion does not change which stops lie on the hull.

mod hull;

pub use hull::{convex_hull, hull_contains};
pub(crate) use hull::hull_positions;
