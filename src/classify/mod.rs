//! Road-type classification from route geometry.
//!
//! - [`RouteMetrics`] — leg lengths, turn rate and coordinate spread of a route
//! - [`classify`] — ordered rules mapping those features to a [`RoadType`]

mod features;
mod rules;

pub use features::{RouteMetrics, TURN_THRESHOLD_DEG};
pub use rules::{classify, RoadType};
