//! Traffic conditions along a route.
//!
//! - [`TrafficProvider`] — contract for level and speed estimates
//! - [`HotspotTraffic`] — implementation driven by a [`HotspotTable`]

mod hotspot;
mod provider;

pub use hotspot::{Hotspot, HotspotTable, HotspotTraffic, RouteClass, RushHour};
pub use provider::{TrafficAnalysis, TrafficProvider};
